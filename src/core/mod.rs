//! Core deterministic primitives.
//!
//! Everything in this module is free of system time, floating point, and
//! ambient randomness. Round outcomes must be reproducible from a seed alone.

pub mod rng;

// Re-export core types
pub use rng::{derive_round_seed, DeterministicRng};
