//! Telemetry Action Records
//!
//! Discrete event records emitted by the engine for audit and analysis.
//! Delivery is best-effort and fire-and-forget: the engine never blocks on
//! a recorder and never surfaces a recorder failure to the player.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::session::{Phase, SessionId};
use crate::game::symbol::{SlotIndex, Symbol};
use crate::game::wager::Denomination;
use crate::GRID_SIZE;

/// Sink that receives engine action records.
///
/// Implementations must be non-blocking; any delivery failure is theirs to
/// swallow (and log). The engine consumes no result.
pub trait ActionRecorder: Send + Sync {
    /// Deliver one record, best-effort.
    fn record(&self, record: ActionRecord);
}

/// One recorded action, stamped with its session context.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRecord {
    /// Session the action belongs to.
    pub session_id: SessionId,
    /// Participant identifier.
    pub participant_id: String,
    /// Wall-clock time the action was recorded.
    pub timestamp: DateTime<Utc>,
    /// Phase the engine was in when the action fired.
    pub phase: Phase,
    /// The action itself.
    pub action: ActionKind,
}

/// The action vocabulary, mirroring the analysis pipeline's schema.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ActionKind {
    /// A round started with a freshly shuffled target.
    GameStart {
        /// The hidden target arrangement for the round.
        initial_positions: [Symbol; GRID_SIZE],
    },

    /// The phase machine advanced.
    PhaseChange {
        /// Phase before the transition.
        from: Phase,
        /// Phase after the transition.
        to: Phase,
    },

    /// Two slots were swapped during evaluation (coins moved along).
    PositionSwapped {
        /// Origin slot of the drag.
        from_index: SlotIndex,
        /// Destination slot.
        to_index: SlotIndex,
        /// Symbol that was dragged.
        from_icon: Option<Symbol>,
        /// Symbol that moved into the origin slot.
        to_icon: Option<Symbol>,
    },

    /// A coin was wagered on a slot.
    CoinPlaced {
        /// Slot the coin was placed on.
        position: SlotIndex,
        /// Denomination placed.
        coin_value: Denomination,
        /// Coin previously on the slot, refunded to stock.
        previous_coin: Option<Denomination>,
    },

    /// A coin was taken back off a slot.
    CoinRemoved {
        /// Slot the coin was removed from.
        position: SlotIndex,
        /// Denomination removed.
        coin_value: Denomination,
    },

    /// The player marked or unmarked a slot in the self-report.
    PositionReported {
        /// Slot toggled.
        position: SlotIndex,
        /// True if the slot is now marked correct.
        marked: bool,
        /// Report cardinality after the toggle.
        total_reported: usize,
    },

    /// The evaluation was submitted and scored.
    GameCompleted {
        /// Ground-truth correct slots.
        actual_correct: Vec<SlotIndex>,
        /// Slots the player claimed correct.
        self_reported: Vec<SlotIndex>,
        /// Final redeemed score.
        score: u32,
        /// Number of correct slots.
        correct_count: usize,
    },

    /// Results submission to the external sink failed (score kept locally).
    ResultsSubmitFailed {
        /// Error description from the sink.
        error: String,
    },
}
