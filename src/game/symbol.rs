//! Symbol Alphabet and Arrangements
//!
//! The game uses a fixed alphabet of six symbols. An arrangement is an
//! ordered sequence of six slots, each holding a symbol or empty.

use serde::{Deserialize, Serialize};

use crate::GRID_SIZE;

/// A slot position within an arrangement (0..GRID_SIZE).
pub type SlotIndex = usize;

/// One symbol from the fixed six-symbol alphabet.
///
/// Equality is by value. Serializes as the display glyph so logged
/// arrangements are human-readable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// 🌟
    #[serde(rename = "🌟")]
    Star,
    /// 🌍
    #[serde(rename = "🌍")]
    Globe,
    /// 🌈
    #[serde(rename = "🌈")]
    Rainbow,
    /// 🎵
    #[serde(rename = "🎵")]
    Melody,
    /// 🎨
    #[serde(rename = "🎨")]
    Palette,
    /// 🌺
    #[serde(rename = "🌺")]
    Blossom,
}

impl Symbol {
    /// The full alphabet in canonical presentation order.
    pub const ALL: [Symbol; GRID_SIZE] = [
        Symbol::Star,
        Symbol::Globe,
        Symbol::Rainbow,
        Symbol::Melody,
        Symbol::Palette,
        Symbol::Blossom,
    ];

    /// Display glyph for this symbol.
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Star => "🌟",
            Symbol::Globe => "🌍",
            Symbol::Rainbow => "🌈",
            Symbol::Melody => "🎵",
            Symbol::Palette => "🎨",
            Symbol::Blossom => "🌺",
        }
    }

    /// Get a symbol from its alphabet index (0-5).
    pub fn from_index(index: usize) -> Option<Symbol> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// A mutable player arrangement: six slots, each a symbol or empty.
pub type Arrangement = [Option<Symbol>; GRID_SIZE];

/// An arrangement with no symbols placed.
pub const EMPTY_ARRANGEMENT: Arrangement = [None; GRID_SIZE];
