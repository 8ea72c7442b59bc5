//! Game Logic Module
//!
//! The full game semantics, deterministic and free of I/O.
//!
//! ## Module Structure
//!
//! - `symbol`: the fixed six-symbol alphabet and arrangement types
//! - `board`: target/player arrangements, swap-based placement
//! - `wager`: coin inventory and per-slot confidence wagers
//! - `score`: pure scoring and honesty evaluation
//! - `session`: session aggregate and phase state machine
//! - `events`: telemetry action records

pub mod board;
pub mod events;
pub mod score;
pub mod session;
pub mod symbol;
pub mod wager;

// Re-export key types
pub use board::{BoardModel, DragState, DropOutcome};
pub use events::{ActionKind, ActionRecord, ActionRecorder};
pub use score::{evaluate, Evaluation};
pub use session::{GameSession, Phase, Prompt, SessionId, TransitionError};
pub use symbol::{Arrangement, SlotIndex, Symbol};
pub use wager::{CoinButtonState, Denomination, ToggleOutcome, WagerLedger};
