//! Scoring and Honesty Evaluation
//!
//! Pure comparison of the target and player arrangements. Reward is
//! confidence-weighted correctness: a wager only counts if its slot is
//! exactly right, and nothing pays out unless the round clears the
//! minimum-correct threshold. Honesty is exact set equality between the
//! self-report and the ground-truth correct set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::game::symbol::{Arrangement, SlotIndex, Symbol};
use crate::game::wager::Denomination;
use crate::{GRID_SIZE, MIN_CORRECT_FOR_REWARD};

/// Outcome of a round evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Slots where the player's symbol exactly matches the target.
    pub actual_correct: BTreeSet<SlotIndex>,
    /// Total wager value redeemed, zero below the correctness threshold.
    pub score: u32,
    /// Whether the self-report equals the actual correct set exactly.
    pub honesty: bool,
}

/// Slots where `player` matches `target` by symbol equality.
pub fn actual_correct(
    target: &[Symbol; GRID_SIZE],
    player: &Arrangement,
) -> BTreeSet<SlotIndex> {
    (0..GRID_SIZE)
        .filter(|slot| player[*slot] == Some(target[*slot]))
        .collect()
}

/// Evaluate a finished round.
///
/// Wagers on incorrect slots never contribute, even above the threshold;
/// below `MIN_CORRECT_FOR_REWARD` correct slots the score is zero
/// regardless of wagers. Pure function, no side effects.
pub fn evaluate(
    target: &[Symbol; GRID_SIZE],
    player: &Arrangement,
    wagers: &[Option<Denomination>; GRID_SIZE],
    self_report: &BTreeSet<SlotIndex>,
) -> Evaluation {
    let correct = actual_correct(target, player);

    let score = if correct.len() >= MIN_CORRECT_FOR_REWARD {
        correct
            .iter()
            .map(|slot| wagers[*slot].map(Denomination::value).unwrap_or(0))
            .sum()
    } else {
        0
    };

    let honesty = *self_report == correct;

    Evaluation {
        actual_correct: correct,
        score,
        honesty,
    }
}

// =============================================================================
// TESTS
// =============================================================================
