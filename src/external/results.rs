//! Results Sink
//!
//! Final round results are submitted downstream exactly once, at
//! evaluation submission. The score is already computed locally, so a
//! failed submission degrades to a telemetry note and the player still
//! sees their score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::game::session::{GameSession, SessionId};
use crate::game::symbol::{Arrangement, SlotIndex, Symbol};
use crate::game::wager::Denomination;
use crate::GRID_SIZE;

/// Error from a results sink.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    /// The sink could not accept the results.
    #[error("results submission failed: {0}")]
    Unavailable(String),
}

/// Complete results of one finished round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResults {
    /// Session identifier.
    pub session_id: SessionId,
    /// Participant identifier.
    pub participant_id: String,
    /// Identifier of the prompt shown before the round.
    pub prompt_id: String,
    /// Round start time.
    pub start_time: DateTime<Utc>,
    /// Round end time (evaluation submission).
    pub end_time: DateTime<Utc>,
    /// The hidden target arrangement.
    pub original_positions: [Symbol; GRID_SIZE],
    /// The player's final arrangement.
    pub final_positions: Arrangement,
    /// Per-slot coin wagers.
    pub coin_placements: [Option<Denomination>; GRID_SIZE],
    /// Slots the player claimed correct, sorted.
    pub self_reported: Vec<SlotIndex>,
    /// Ground-truth correct slots, sorted.
    pub actual_correct: Vec<SlotIndex>,
    /// Redeemed score.
    pub score: u32,
    /// Whether the self-report matched the correct set exactly.
    pub honest_reporting: bool,
}

impl GameResults {
    /// Assemble results from a session whose evaluation was submitted.
    ///
    /// Returns `None` until `submit_evaluation` has run.
    pub fn from_session(session: &GameSession) -> Option<Self> {
        let evaluation = session.evaluation()?;
        Some(Self {
            session_id: session.id(),
            participant_id: session.participant_id().to_string(),
            prompt_id: session
                .prompt()
                .map(|p| p.id.clone())
                .unwrap_or_default(),
            start_time: session.started_at()?,
            end_time: session.ended_at()?,
            original_positions: *session.board().target(),
            final_positions: *session.board().player(),
            coin_placements: *session.ledger().placements(),
            self_reported: session.self_report().iter().copied().collect(),
            actual_correct: evaluation.actual_correct.iter().copied().collect(),
            score: evaluation.score,
            honest_reporting: evaluation.honesty,
        })
    }
}

/// Downstream consumer of final results.
#[allow(async_fn_in_trait)]
pub trait ResultsSink: Send + Sync {
    /// Accept one round's results.
    async fn submit(&self, results: &GameResults) -> Result<(), SubmitError>;
}

/// Sink that logs the results JSON instead of sending it anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingResultsSink;

impl ResultsSink for LoggingResultsSink {
    async fn submit(&self, results: &GameResults) -> Result<(), SubmitError> {
        let json = serde_json::to_string(results)
            .map_err(|err| SubmitError::Unavailable(err.to_string()))?;
        info!("game results: {json}");
        Ok(())
    }
}
