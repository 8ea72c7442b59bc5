//! Game Session and Phase Machine
//!
//! `GameSession` is the owned aggregate for one round: phase, board,
//! wager ledger, self-report, prompt, and timestamps. It is the only
//! component that sequences the others, and the only one aware of the
//! memorization countdown. Every phase transition emits a telemetry
//! record through the injected [`ActionRecorder`], fire-and-forget.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::rng::DeterministicRng;
use crate::game::board::{BoardModel, DropOutcome};
use crate::game::events::{ActionKind, ActionRecord, ActionRecorder};
use crate::game::score::{self, Evaluation};
use crate::game::symbol::{SlotIndex, Symbol};
use crate::game::wager::{Denomination, ToggleOutcome, WagerLedger};
use crate::{GRID_SIZE, MEMORIZE_TICKS};

// =============================================================================
// SESSION ID
// =============================================================================

/// Unique session identifier (UUID as bytes).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SessionId(pub [u8; 16]);

impl SessionId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(*uuid::Uuid::new_v4().as_bytes())
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(|u| Self(*u.as_bytes()))
    }

    /// Convert to UUID string.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

// =============================================================================
// PHASE
// =============================================================================

/// One stage of the fixed game lifecycle.
///
/// Transitions are one-directional:
/// `loading → start → memorize → place → rate → evaluate → done`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Waiting for the prompt text to arrive (or its fallback).
    #[default]
    Loading,
    /// Instructions shown; waiting for acknowledgement and game start.
    Start,
    /// Target arrangement visible; countdown running.
    Memorize,
    /// Player reconstructs the arrangement.
    Place,
    /// Player wagers coins on their confidence per slot.
    Rate,
    /// Player self-reports correct slots, then submits.
    Evaluate,
    /// Terminal: score emitted, completion signal fired.
    Done,
}

impl Phase {
    /// Phase name as it appears in telemetry.
    pub fn name(self) -> &'static str {
        match self {
            Phase::Loading => "loading",
            Phase::Start => "start",
            Phase::Memorize => "memorize",
            Phase::Place => "place",
            Phase::Rate => "rate",
            Phase::Evaluate => "evaluate",
            Phase::Done => "done",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// PROMPT
// =============================================================================

/// The textual prompt ("theory") shown to the participant before the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// Prompt identifier, recorded with the results.
    pub id: String,
    /// Prompt text.
    pub text: String,
}

impl Prompt {
    /// Fixed fallback substituted when the prompt source fails.
    /// The game must never be blocked by that dependency.
    pub fn fallback() -> Self {
        Self {
            id: "fallback".to_string(),
            text: "Welcome to the Memory Game! Test your memory and confidence.".to_string(),
        }
    }
}

// =============================================================================
// TRANSITION ERRORS
// =============================================================================

/// A gated transition was attempted without its gate condition.
///
/// These are caller errors, distinct from in-phase constraint rejections
/// (occupied-slot drops, exhausted coin stock) which are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// Operation is not valid in the current phase.
    #[error("operation not valid in phase {actual} (expected {expected})")]
    WrongPhase {
        /// Phase the operation requires.
        expected: Phase,
        /// Phase the session is actually in.
        actual: Phase,
    },

    /// The player has not confirmed reading the instructions.
    #[error("instructions have not been acknowledged")]
    InstructionsNotRead,

    /// Not every slot is occupied yet.
    #[error("board still has unplaced symbols")]
    BoardIncomplete,

    /// The self-report has not been submitted.
    #[error("self-report has not been submitted")]
    ReportNotSubmitted,

    /// The self-report was already submitted and is frozen.
    #[error("self-report already submitted")]
    AlreadySubmitted,
}

// =============================================================================
// GAME SESSION
// =============================================================================

/// One round of the memory-and-confidence game.
///
/// Mutated exclusively through the operations below; discarded once the
/// terminal score has been emitted. Not persisted by the engine.
pub struct GameSession {
    /// Session identifier.
    id: SessionId,
    /// Participant identifier (opaque recruitment-platform ID).
    participant_id: String,
    /// Current lifecycle phase.
    phase: Phase,
    /// Prompt shown to the participant.
    prompt: Option<Prompt>,
    /// Whether the player confirmed reading the instructions.
    instructions_read: bool,
    /// Memorization countdown, in remaining ticks.
    ticks_remaining: u32,
    /// Board: target and player arrangements.
    board: BoardModel,
    /// Coin inventory and wagers.
    ledger: WagerLedger,
    /// Slots the player claims are correct.
    self_report: BTreeSet<SlotIndex>,
    /// True once the self-report is frozen.
    report_submitted: bool,
    /// Evaluation result, set at submission.
    evaluation: Option<Evaluation>,
    /// Round start time.
    started_at: Option<DateTime<Utc>>,
    /// Round end time (evaluation submission).
    ended_at: Option<DateTime<Utc>>,
    /// Telemetry sink, best-effort.
    recorder: Arc<dyn ActionRecorder>,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("id", &self.id)
            .field("participant_id", &self.participant_id)
            .field("phase", &self.phase)
            .field("ticks_remaining", &self.ticks_remaining)
            .field("report_submitted", &self.report_submitted)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Create a new session in the `Loading` phase.
    pub fn new(
        id: SessionId,
        participant_id: impl Into<String>,
        recorder: Arc<dyn ActionRecorder>,
    ) -> Self {
        Self {
            id,
            participant_id: participant_id.into(),
            phase: Phase::Loading,
            prompt: None,
            instructions_read: false,
            ticks_remaining: 0,
            board: BoardModel::new(),
            ledger: WagerLedger::new(),
            self_report: BTreeSet::new(),
            report_submitted: false,
            evaluation: None,
            started_at: None,
            ended_at: None,
            recorder,
        }
    }

    // =========================================================================
    // Phase transitions
    // =========================================================================

    /// Loading → Start: the prompt (or its fallback) is available.
    ///
    /// Idempotent outside `Loading`; never blocks progression.
    pub fn prompt_ready(&mut self, prompt: Prompt) {
        if self.phase != Phase::Loading {
            return;
        }
        self.prompt = Some(prompt);
        self.transition(Phase::Start);
    }

    /// Set the instructions-read acknowledgement flag.
    pub fn set_instructions_read(&mut self, read: bool) {
        self.instructions_read = read;
    }

    /// Start → Memorize: shuffle a fresh target and reset all mutable state.
    ///
    /// Requires the acknowledgement flag. The reset covers board, ledger,
    /// self-report and score in one step; partial resets are never
    /// observable.
    pub fn start_round(&mut self, seed: u64, now: DateTime<Utc>) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Start)?;
        if !self.instructions_read {
            return Err(TransitionError::InstructionsNotRead);
        }

        let mut rng = DeterministicRng::new(seed);
        self.board.start_round(&mut rng);
        self.ledger.reset();
        self.self_report.clear();
        self.report_submitted = false;
        self.evaluation = None;
        self.started_at = Some(now);
        self.ended_at = None;
        self.ticks_remaining = MEMORIZE_TICKS;

        self.record(ActionKind::GameStart {
            initial_positions: *self.board.target(),
        });
        self.transition(Phase::Memorize);
        Ok(())
    }

    /// Advance the memorization countdown by one tick.
    ///
    /// The single authoritative decrement; fires Memorize → Place when the
    /// countdown reaches zero. No user action can shorten or extend it.
    /// Returns the remaining ticks.
    pub fn tick_countdown(&mut self) -> u32 {
        if self.phase != Phase::Memorize {
            return self.ticks_remaining;
        }
        self.ticks_remaining = self.ticks_remaining.saturating_sub(1);
        if self.ticks_remaining == 0 {
            self.transition(Phase::Place);
        }
        self.ticks_remaining
    }

    /// Place → Rate: requires every slot occupied.
    pub fn finish_placement(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Place)?;
        if !self.board.is_fully_placed() {
            return Err(TransitionError::BoardIncomplete);
        }
        self.transition(Phase::Rate);
        Ok(())
    }

    /// Rate → Evaluate: permitted at any wager state, including none.
    /// The minimum-correct threshold independently gates all reward.
    pub fn finish_rating(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Rate)?;
        self.transition(Phase::Evaluate);
        Ok(())
    }

    /// Freeze the self-report, score the round, and stamp the end time.
    ///
    /// The evaluation is computed locally and survives even if the caller
    /// fails to deliver it downstream.
    pub fn submit_evaluation(&mut self, now: DateTime<Utc>) -> Result<Evaluation, TransitionError> {
        self.expect_phase(Phase::Evaluate)?;
        if self.report_submitted {
            return Err(TransitionError::AlreadySubmitted);
        }

        let evaluation = score::evaluate(
            self.board.target(),
            self.board.player(),
            self.ledger.placements(),
            &self.self_report,
        );
        self.report_submitted = true;
        self.ended_at = Some(now);

        self.record(ActionKind::GameCompleted {
            actual_correct: evaluation.actual_correct.iter().copied().collect(),
            self_reported: self.self_report.iter().copied().collect(),
            score: evaluation.score,
            correct_count: evaluation.actual_correct.len(),
        });

        self.evaluation = Some(evaluation.clone());
        Ok(evaluation)
    }

    /// Evaluate → Done: terminal transition after the report is submitted.
    ///
    /// The external survey-code gate is the caller's concern; the engine
    /// only requires a submitted report.
    pub fn complete(&mut self) -> Result<(), TransitionError> {
        self.expect_phase(Phase::Evaluate)?;
        if !self.report_submitted {
            return Err(TransitionError::ReportNotSubmitted);
        }
        self.transition(Phase::Done);
        Ok(())
    }

    // =========================================================================
    // In-phase operations (silent no-ops outside their phase)
    // =========================================================================

    /// Begin dragging a symbol. Valid while placing or while rearranging
    /// during evaluation (before submission); ignored otherwise.
    pub fn begin_drag(&mut self, symbol: Symbol, source: Option<SlotIndex>) {
        match self.phase {
            Phase::Place => self.board.begin_drag(symbol, source),
            Phase::Evaluate if !self.report_submitted => {
                // Evaluation rearranging only moves already-placed symbols
                if source.is_some() {
                    self.board.begin_drag(symbol, source);
                }
            }
            _ => {}
        }
    }

    /// Drop the pending drag onto `to`.
    ///
    /// In `Place` this is plain board placement. In `Evaluate` (before
    /// submission) a swap carries the slots' coins along with the symbols.
    pub fn drop_on(&mut self, to: SlotIndex) -> DropOutcome {
        match self.phase {
            Phase::Place => self.board.drop_on(to),
            Phase::Evaluate if !self.report_submitted => {
                let from_icon = self
                    .board
                    .pending_drag()
                    .and_then(|drag| drag.source)
                    .and_then(|from| self.board.player()[from]);
                let outcome = self.board.drop_on(to);
                if let DropOutcome::Swapped { from, to } = outcome {
                    self.ledger.swap_slots(from, to);
                    self.record(ActionKind::PositionSwapped {
                        from_index: from,
                        to_index: to,
                        from_icon,
                        to_icon: self.board.player()[from],
                    });
                }
                outcome
            }
            _ => {
                self.board.cancel_drag();
                DropOutcome::Rejected
            }
        }
    }

    /// Toggle a coin wager; only meaningful while rating.
    pub fn toggle_coin(&mut self, slot: SlotIndex, denom: Denomination) -> ToggleOutcome {
        if self.phase != Phase::Rate {
            return ToggleOutcome::Rejected;
        }
        let outcome = self.ledger.toggle(slot, denom);
        match outcome {
            ToggleOutcome::Removed => self.record(ActionKind::CoinRemoved {
                position: slot,
                coin_value: denom,
            }),
            ToggleOutcome::Placed { previous } => self.record(ActionKind::CoinPlaced {
                position: slot,
                coin_value: denom,
                previous_coin: previous,
            }),
            ToggleOutcome::Rejected => {}
        }
        outcome
    }

    /// Mark or unmark a slot in the self-report.
    ///
    /// Mutable only while evaluating and before submission (the report is
    /// frozen afterward); ignored otherwise.
    pub fn toggle_report(&mut self, slot: SlotIndex) {
        if self.phase != Phase::Evaluate || self.report_submitted || slot >= GRID_SIZE {
            return;
        }
        let marked = if self.self_report.remove(&slot) {
            false
        } else {
            self.self_report.insert(slot);
            true
        };
        self.record(ActionKind::PositionReported {
            position: slot,
            marked,
            total_reported: self.self_report.len(),
        });
    }

    /// Note a failed downstream results submission (best-effort telemetry).
    pub fn report_submit_failure(&self, error: impl Into<String>) {
        self.record(ActionKind::ResultsSubmitFailed {
            error: error.into(),
        });
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Session identifier.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Participant identifier.
    pub fn participant_id(&self) -> &str {
        &self.participant_id
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Prompt shown to the participant, once loaded.
    pub fn prompt(&self) -> Option<&Prompt> {
        self.prompt.as_ref()
    }

    /// Whether the instructions were acknowledged.
    pub fn instructions_read(&self) -> bool {
        self.instructions_read
    }

    /// Remaining memorization ticks.
    pub fn ticks_remaining(&self) -> u32 {
        self.ticks_remaining
    }

    /// The board.
    pub fn board(&self) -> &BoardModel {
        &self.board
    }

    /// The wager ledger.
    pub fn ledger(&self) -> &WagerLedger {
        &self.ledger
    }

    /// The self-report set.
    pub fn self_report(&self) -> &BTreeSet<SlotIndex> {
        &self.self_report
    }

    /// Whether the self-report has been submitted (and frozen).
    pub fn is_report_submitted(&self) -> bool {
        self.report_submitted
    }

    /// Evaluation result, once submitted.
    pub fn evaluation(&self) -> Option<&Evaluation> {
        self.evaluation.as_ref()
    }

    /// Final score, once submitted.
    pub fn score(&self) -> Option<u32> {
        self.evaluation.as_ref().map(|e| e.score)
    }

    /// Round start time.
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Round end time.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// True once the session reached the terminal phase.
    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn expect_phase(&self, expected: Phase) -> Result<(), TransitionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(TransitionError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    /// Advance the phase, recording the transition. The record carries the
    /// pre-transition phase, matching the analysis pipeline's convention.
    fn transition(&mut self, to: Phase) {
        let from = self.phase;
        self.record(ActionKind::PhaseChange { from, to });
        self.phase = to;
    }

    fn record(&self, action: ActionKind) {
        self.recorder.record(ActionRecord {
            session_id: self.id,
            participant_id: self.participant_id.clone(),
            timestamp: Utc::now(),
            phase: self.phase,
            action,
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::recorder::MemoryRecorder;
    use crate::game::score;
    use crate::MIN_CORRECT_FOR_REWARD;

    fn session_with_recorder() -> (GameSession, Arc<MemoryRecorder>) {
        let recorder = Arc::new(MemoryRecorder::new());
        let session = GameSession::new(
            SessionId::new([7; 16]),
            "PARTICIPANT1",
            recorder.clone(),
        );
        (session, recorder)
    }

    /// Drive a session to the Place phase.
    fn session_at_place(seed: u64) -> (GameSession, Arc<MemoryRecorder>) {
        let (mut session, recorder) = session_with_recorder();
        session.prompt_ready(Prompt::fallback());
        session.set_instructions_read(true);
        session.start_round(seed, Utc::now()).unwrap();
        for _ in 0..MEMORIZE_TICKS {
            session.tick_countdown();
        }
        (session, recorder)
    }

    /// Place every pooled symbol left to right.
    fn fill_board(session: &mut GameSession) {
        for slot in 0..GRID_SIZE {
            let symbol = session.board().pool()[0];
            session.begin_drag(symbol, None);
            session.drop_on(slot);
        }
    }

    #[test]
    fn test_start_requires_acknowledgement() {
        let (mut session, _) = session_with_recorder();
        session.prompt_ready(Prompt::fallback());

        let err = session.start_round(1, Utc::now()).unwrap_err();
        assert_eq!(err, TransitionError::InstructionsNotRead);
        assert_eq!(session.phase(), Phase::Start);
    }

    #[test]
    fn test_start_requires_start_phase() {
        let (mut session, _) = session_with_recorder();
        session.set_instructions_read(true);

        let err = session.start_round(1, Utc::now()).unwrap_err();
        assert!(matches!(err, TransitionError::WrongPhase { .. }));
    }

    #[test]
    fn test_countdown_reaches_place_exactly_at_zero() {
        let (mut session, _) = session_with_recorder();
        session.prompt_ready(Prompt::fallback());
        session.set_instructions_read(true);
        session.start_round(3, Utc::now()).unwrap();

        assert_eq!(session.phase(), Phase::Memorize);
        assert_eq!(session.ticks_remaining(), MEMORIZE_TICKS);

        for expected in (0..MEMORIZE_TICKS).rev() {
            let remaining = session.tick_countdown();
            assert_eq!(remaining, expected);
        }
        assert_eq!(session.phase(), Phase::Place);

        // Stray tick after the phase has moved on is harmless
        assert_eq!(session.tick_countdown(), 0);
        assert_eq!(session.phase(), Phase::Place);
    }

    #[test]
    fn test_finish_placement_gated_on_full_board() {
        let (mut session, _) = session_at_place(11);

        let err = session.finish_placement().unwrap_err();
        assert_eq!(err, TransitionError::BoardIncomplete);

        fill_board(&mut session);
        session.finish_placement().unwrap();
        assert_eq!(session.phase(), Phase::Rate);
    }

    #[test]
    fn test_finish_rating_allowed_with_zero_wagers() {
        let (mut session, _) = session_at_place(11);
        fill_board(&mut session);
        session.finish_placement().unwrap();

        session.finish_rating().unwrap();
        assert_eq!(session.phase(), Phase::Evaluate);
    }

    #[test]
    fn test_coin_toggle_only_while_rating() {
        let (mut session, _) = session_at_place(11);

        assert_eq!(
            session.toggle_coin(0, Denomination::Twenty),
            ToggleOutcome::Rejected
        );

        fill_board(&mut session);
        session.finish_placement().unwrap();
        assert_eq!(
            session.toggle_coin(0, Denomination::Twenty),
            ToggleOutcome::Placed { previous: None }
        );
    }

    #[test]
    fn test_evaluate_swap_carries_coins() {
        let (mut session, _) = session_at_place(11);
        fill_board(&mut session);
        session.finish_placement().unwrap();
        session.toggle_coin(0, Denomination::Twenty);
        session.finish_rating().unwrap();

        let sym0 = session.board().player()[0].unwrap();
        let sym1 = session.board().player()[1].unwrap();

        session.begin_drag(sym0, Some(0));
        let outcome = session.drop_on(1);

        assert_eq!(outcome, DropOutcome::Swapped { from: 0, to: 1 });
        assert_eq!(session.board().player()[0], Some(sym1));
        assert_eq!(session.board().player()[1], Some(sym0));
        // The coin followed its symbol
        assert_eq!(session.ledger().placed(0), None);
        assert_eq!(session.ledger().placed(1), Some(Denomination::Twenty));
    }

    #[test]
    fn test_report_frozen_after_submission() {
        let (mut session, _) = session_at_place(11);
        fill_board(&mut session);
        session.finish_placement().unwrap();
        session.finish_rating().unwrap();

        session.toggle_report(0);
        session.toggle_report(2);
        assert_eq!(session.self_report(), &BTreeSet::from([0, 2]));

        session.submit_evaluation(Utc::now()).unwrap();

        session.toggle_report(4);
        assert_eq!(session.self_report(), &BTreeSet::from([0, 2]));

        let err = session.submit_evaluation(Utc::now()).unwrap_err();
        assert_eq!(err, TransitionError::AlreadySubmitted);
    }

    #[test]
    fn test_complete_requires_submitted_report() {
        let (mut session, _) = session_at_place(11);
        fill_board(&mut session);
        session.finish_placement().unwrap();
        session.finish_rating().unwrap();

        let err = session.complete().unwrap_err();
        assert_eq!(err, TransitionError::ReportNotSubmitted);

        session.submit_evaluation(Utc::now()).unwrap();
        session.complete().unwrap();
        assert!(session.is_done());
    }

    #[test]
    fn test_submitted_score_matches_pure_evaluation() {
        let (mut session, _) = session_at_place(23);
        fill_board(&mut session);
        session.finish_placement().unwrap();
        session.toggle_coin(0, Denomination::Twenty);
        session.toggle_coin(3, Denomination::Ten);
        session.finish_rating().unwrap();
        session.toggle_report(0);

        let expected = score::evaluate(
            session.board().target(),
            session.board().player(),
            session.ledger().placements(),
            session.self_report(),
        );
        let evaluation = session.submit_evaluation(Utc::now()).unwrap();

        assert_eq!(evaluation, expected);
        assert_eq!(session.score(), Some(expected.score));
        if evaluation.actual_correct.len() < MIN_CORRECT_FOR_REWARD {
            assert_eq!(evaluation.score, 0);
        }
        assert!(session.ended_at().is_some());
    }

    #[test]
    fn test_transitions_are_recorded() {
        let (mut session, recorder) = session_at_place(11);
        fill_board(&mut session);
        session.finish_placement().unwrap();

        let records = recorder.snapshot();
        let transitions: Vec<(Phase, Phase)> = records
            .iter()
            .filter_map(|r| match &r.action {
                ActionKind::PhaseChange { from, to } => Some((*from, *to)),
                _ => None,
            })
            .collect();

        assert_eq!(
            transitions,
            vec![
                (Phase::Loading, Phase::Start),
                (Phase::Start, Phase::Memorize),
                (Phase::Memorize, Phase::Place),
                (Phase::Place, Phase::Rate),
            ]
        );
        // Every record carries the session context
        for record in &records {
            assert_eq!(record.session_id, SessionId::new([7; 16]));
            assert_eq!(record.participant_id, "PARTICIPANT1");
        }
    }

    #[test]
    fn test_start_round_resets_wholesale() {
        let (mut session, _) = session_with_recorder();
        session.prompt_ready(Prompt::fallback());
        session.set_instructions_read(true);
        session.start_round(1, Utc::now()).unwrap();

        assert_eq!(session.board().occupied_count(), 0);
        assert_eq!(session.board().pool().len(), GRID_SIZE);
        assert!(session.self_report().is_empty());
        assert!(!session.is_report_submitted());
        assert_eq!(session.score(), None);
        assert!(session.started_at().is_some());
        assert!(session.ended_at().is_none());
    }

    #[test]
    fn test_same_seed_same_target() {
        let (session1, _) = session_at_place(42);
        let (session2, _) = session_at_place(42);
        assert_eq!(session1.board().target(), session2.board().target());
    }
}
