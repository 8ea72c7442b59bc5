//! Wager Ledger
//!
//! A finite inventory of coins in three denominations, wagered one per slot
//! on the reconstructed arrangement. Toggling the same coin on a slot
//! removes it; toggling a different one replaces it, returning the old coin
//! to stock first. Stock can never go negative.

use serde::{Deserialize, Serialize};

use crate::game::symbol::SlotIndex;
use crate::{COIN_STOCK, GRID_SIZE};

/// A coin face value. Serializes as the integer value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum Denomination {
    /// 20-point coin
    Twenty,
    /// 10-point coin
    Ten,
    /// 5-point coin
    Five,
}

impl Denomination {
    /// All denominations, highest first (presentation order).
    pub const ALL: [Denomination; 3] = [Denomination::Twenty, Denomination::Ten, Denomination::Five];

    /// Face value of this denomination.
    pub fn value(self) -> u32 {
        match self {
            Denomination::Twenty => 20,
            Denomination::Ten => 10,
            Denomination::Five => 5,
        }
    }

    fn index(self) -> usize {
        match self {
            Denomination::Twenty => 0,
            Denomination::Ten => 1,
            Denomination::Five => 2,
        }
    }
}

impl From<Denomination> for u32 {
    fn from(denom: Denomination) -> u32 {
        denom.value()
    }
}

impl TryFrom<u32> for Denomination {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            20 => Ok(Denomination::Twenty),
            10 => Ok(Denomination::Ten),
            5 => Ok(Denomination::Five),
            other => Err(format!("unknown coin denomination: {other}")),
        }
    }
}

/// Derived display state for one coin button on one slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoinButtonState {
    /// This slot currently holds this denomination.
    Selected,
    /// Not selected, stock remaining.
    Available,
    /// Not selected, stock exhausted.
    Unavailable,
}

/// What a toggle did to the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The coin was removed from the slot and returned to stock.
    Removed,
    /// The coin was placed, replacing `previous` if present.
    Placed {
        /// Coin that occupied the slot before, returned to stock.
        previous: Option<Denomination>,
    },
    /// Stock was exhausted; no state change.
    Rejected,
}

/// Coin inventory and per-slot wager map.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WagerLedger {
    /// Remaining stock, indexed parallel to `Denomination::ALL`.
    remaining: [u32; 3],
    /// Coin wagered on each slot, at most one per slot.
    placed: [Option<Denomination>; GRID_SIZE],
}

impl Default for WagerLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl WagerLedger {
    /// Create a ledger with full stock and no wagers.
    pub fn new() -> Self {
        Self {
            remaining: [COIN_STOCK; 3],
            placed: [None; GRID_SIZE],
        }
    }

    /// Return all placed coins to stock.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Toggle `denom` on `slot`.
    ///
    /// Same coin already there: remove it and refund stock. Different
    /// coin there: refund it, then place (stock permitting). Exhausted
    /// stock rejects the placement with no state change.
    pub fn toggle(&mut self, slot: SlotIndex, denom: Denomination) -> ToggleOutcome {
        if slot >= GRID_SIZE {
            return ToggleOutcome::Rejected;
        }

        if self.placed[slot] == Some(denom) {
            self.placed[slot] = None;
            self.remaining[denom.index()] += 1;
            return ToggleOutcome::Removed;
        }

        if self.remaining[denom.index()] == 0 {
            return ToggleOutcome::Rejected;
        }

        let previous = self.placed[slot];
        if let Some(old) = previous {
            self.remaining[old.index()] += 1;
        }
        self.placed[slot] = Some(denom);
        self.remaining[denom.index()] -= 1;
        ToggleOutcome::Placed { previous }
    }

    /// Derived button state for rendering; no side effects.
    pub fn button_state(&self, slot: SlotIndex, denom: Denomination) -> CoinButtonState {
        if self.placed.get(slot).copied().flatten() == Some(denom) {
            CoinButtonState::Selected
        } else if self.remaining[denom.index()] > 0 {
            CoinButtonState::Available
        } else {
            CoinButtonState::Unavailable
        }
    }

    /// Swap the wagers on two slots (coins follow their symbols when the
    /// player rearranges the board during evaluation).
    pub fn swap_slots(&mut self, a: SlotIndex, b: SlotIndex) {
        if a < GRID_SIZE && b < GRID_SIZE && a != b {
            self.placed.swap(a, b);
        }
    }

    /// Coin wagered on `slot`, if any.
    pub fn placed(&self, slot: SlotIndex) -> Option<Denomination> {
        self.placed.get(slot).copied().flatten()
    }

    /// Wager value on `slot`, zero if none.
    pub fn placed_value(&self, slot: SlotIndex) -> u32 {
        self.placed(slot).map(Denomination::value).unwrap_or(0)
    }

    /// Full per-slot wager map.
    pub fn placements(&self) -> &[Option<Denomination>; GRID_SIZE] {
        &self.placed
    }

    /// Remaining stock for a denomination.
    pub fn remaining(&self, denom: Denomination) -> u32 {
        self.remaining[denom.index()]
    }
}

// =============================================================================
// TESTS
// =============================================================================
