//! # Memory Stakes Engine
//!
//! Deterministic memory-and-confidence game engine for behavioral experiments.
//! Participants memorize a spatial arrangement of symbols, reconstruct it,
//! wager coins on their confidence per position, then self-report which
//! positions they believe are correct.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MEMORY STAKES ENGINE                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  └── rng.rs      - Seeded Xorshift128+ PRNG, seed derivation │
//! │                                                              │
//! │  game/           - Game logic (deterministic, no I/O)        │
//! │  ├── symbol.rs   - Symbol alphabet and arrangements          │
//! │  ├── board.rs    - Target/player grids, swap-based placement │
//! │  ├── wager.rs    - Coin inventory and per-slot wagers        │
//! │  ├── score.rs    - Scoring and honesty evaluation            │
//! │  ├── session.rs  - Phase state machine and session aggregate │
//! │  └── events.rs   - Telemetry action records                  │
//! │                                                              │
//! │  external/       - Collaborators (non-deterministic)         │
//! │  ├── recorder.rs - Fire-and-forget action sinks              │
//! │  ├── prompt.rs   - Prompt fetch with fixed fallback          │
//! │  ├── results.rs  - Final results submission                  │
//! │  └── driver.rs   - Async orchestration, countdown timer      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The `core/` and `game/` modules contain the full game semantics and are
//! deterministic: given the same round seed and the same sequence of player
//! actions, every round produces identical board states and an identical
//! final score. Telemetry timestamps are the only wall-clock values in the
//! engine and never feed back into game state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod external;
pub mod game;

// Re-export commonly used types
pub use core::rng::DeterministicRng;
pub use game::board::BoardModel;
pub use game::score::Evaluation;
pub use game::session::{GameSession, Phase, SessionId};
pub use game::symbol::{Arrangement, Symbol};
pub use game::wager::{Denomination, WagerLedger};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of slots in an arrangement (and size of the symbol alphabet).
pub const GRID_SIZE: usize = 6;

/// Memorization countdown length, in timer ticks (one tick per second).
pub const MEMORIZE_TICKS: u32 = 3;

/// Minimum number of exactly-correct slots required before any wager pays out.
pub const MIN_CORRECT_FOR_REWARD: usize = 3;

/// Initial stock per coin denomination.
pub const COIN_STOCK: u32 = 2;
