//! Board Model
//!
//! Owns the hidden target arrangement, the mutable player arrangement, and
//! the pool of symbols not yet placed. Placement is swap-based: a symbol
//! dragged from one slot onto another swaps the two occupants, so a full
//! board can be freely reorganized without an empty holding slot.

use serde::{Deserialize, Serialize};

use crate::core::rng::DeterministicRng;
use crate::game::symbol::{Arrangement, SlotIndex, Symbol, EMPTY_ARRANGEMENT};
use crate::GRID_SIZE;

/// A drag in progress: the symbol being carried and where it came from.
///
/// `source = None` marks a drag originating from the available-symbol pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragState {
    /// Symbol being dragged.
    pub symbol: Symbol,
    /// Origin slot, or `None` for a pool-origin drag.
    pub source: Option<SlotIndex>,
}

/// What a drop did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// A pool symbol was placed into an empty slot.
    Placed {
        /// Symbol that was placed.
        symbol: Symbol,
        /// Slot it was placed into.
        slot: SlotIndex,
    },
    /// Two slots exchanged occupants (destination may have been empty).
    Swapped {
        /// Origin slot of the drag.
        from: SlotIndex,
        /// Destination slot.
        to: SlotIndex,
    },
    /// The drop was rejected; board unchanged.
    Rejected,
}

/// The game board: target arrangement, player arrangement, and symbol pool.
///
/// Invariant: while placing, each alphabet symbol appears exactly once
/// across the player arrangement and the pool combined.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardModel {
    /// Hidden target arrangement, fixed for the round.
    target: [Symbol; GRID_SIZE],
    /// Player-built arrangement.
    player: Arrangement,
    /// Symbols not yet placed, in canonical presentation order.
    pool: Vec<Symbol>,
    /// Drag in progress, if any.
    dragging: Option<DragState>,
}

impl Default for BoardModel {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardModel {
    /// Create a board with the canonical alphabet as a placeholder target.
    ///
    /// `start_round` must be called before play; the phase machine never
    /// exposes a board that has not been through it.
    pub fn new() -> Self {
        Self {
            target: Symbol::ALL,
            player: EMPTY_ARRANGEMENT,
            pool: Symbol::ALL.to_vec(),
            dragging: None,
        }
    }

    /// Begin a fresh round: shuffle a new target and reset all mutable state.
    pub fn start_round(&mut self, rng: &mut DeterministicRng) {
        let mut target = Symbol::ALL;
        rng.shuffle(&mut target);
        self.target = target;
        self.player = EMPTY_ARRANGEMENT;
        self.pool = Symbol::ALL.to_vec();
        self.dragging = None;
    }

    /// Record the start of a drag. No board mutation happens yet.
    ///
    /// The claimed origin must match the board; a stale drag (symbol no
    /// longer where the caller thinks it is) is silently ignored.
    pub fn begin_drag(&mut self, symbol: Symbol, source: Option<SlotIndex>) {
        let valid = match source {
            Some(slot) => self.player.get(slot).copied().flatten() == Some(symbol),
            None => self.pool.contains(&symbol),
        };
        if valid {
            self.dragging = Some(DragState { symbol, source });
        }
    }

    /// Drop the pending drag onto `to`.
    ///
    /// - Pool-origin drag onto an empty slot: place, remove from pool.
    /// - Pool-origin drag onto an occupied slot: rejected.
    /// - Slot-origin drag: unconditional swap of the two occupants.
    /// - Dropping a slot onto itself: rejected (no self-swap event).
    ///
    /// The pending drag is cleared regardless of outcome.
    pub fn drop_on(&mut self, to: SlotIndex) -> DropOutcome {
        let Some(drag) = self.dragging.take() else {
            return DropOutcome::Rejected;
        };
        if to >= GRID_SIZE {
            return DropOutcome::Rejected;
        }

        match drag.source {
            Some(from) if from == to => DropOutcome::Rejected,
            Some(from) => {
                self.player.swap(from, to);
                DropOutcome::Swapped { from, to }
            }
            None => {
                if self.player[to].is_some() {
                    return DropOutcome::Rejected;
                }
                self.player[to] = Some(drag.symbol);
                self.pool.retain(|s| *s != drag.symbol);
                DropOutcome::Placed {
                    symbol: drag.symbol,
                    slot: to,
                }
            }
        }
    }

    /// Clear any pending drag without dropping it.
    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Swap the occupants of two slots directly (evaluate-phase rearranging).
    ///
    /// Returns false for out-of-range slots or a self-swap.
    pub fn swap(&mut self, a: SlotIndex, b: SlotIndex) -> bool {
        if a >= GRID_SIZE || b >= GRID_SIZE || a == b {
            return false;
        }
        self.player.swap(a, b);
        true
    }

    /// True once every slot is occupied; gates the place → rate transition.
    pub fn is_fully_placed(&self) -> bool {
        self.pool.is_empty()
    }

    /// The hidden target arrangement.
    pub fn target(&self) -> &[Symbol; GRID_SIZE] {
        &self.target
    }

    /// The player's arrangement.
    pub fn player(&self) -> &Arrangement {
        &self.player
    }

    /// Symbols still waiting in the pool.
    pub fn pool(&self) -> &[Symbol] {
        &self.pool
    }

    /// The drag currently in progress, if any.
    pub fn pending_drag(&self) -> Option<DragState> {
        self.dragging
    }

    /// Number of occupied player slots.
    pub fn occupied_count(&self) -> usize {
        self.player.iter().filter(|s| s.is_some()).count()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Assert the conservation invariant: each alphabet symbol appears
    /// exactly once across the player arrangement and the pool.
    fn assert_conservation(board: &BoardModel) {
        let mut seen: Vec<Symbol> = board.player.iter().flatten().copied().collect();
        seen.extend_from_slice(board.pool());
        seen.sort();
        let mut expected = Symbol::ALL;
        expected.sort();
        assert_eq!(seen, expected.to_vec());
    }

    fn placed_board(seed: u64) -> BoardModel {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(seed));
        for slot in 0..GRID_SIZE {
            let symbol = board.pool()[0];
            board.begin_drag(symbol, None);
            board.drop_on(slot);
        }
        board
    }

    #[test]
    fn test_target_is_permutation() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(7));

        let mut sorted = *board.target();
        sorted.sort();
        let mut expected = Symbol::ALL;
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn test_pool_placement_fills_empty_slot() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        board.begin_drag(Symbol::Star, None);
        let outcome = board.drop_on(2);

        assert_eq!(
            outcome,
            DropOutcome::Placed {
                symbol: Symbol::Star,
                slot: 2
            }
        );
        assert_eq!(board.player()[2], Some(Symbol::Star));
        assert!(!board.pool().contains(&Symbol::Star));
        assert_conservation(&board);
    }

    #[test]
    fn test_pool_drop_on_occupied_slot_rejected() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        board.begin_drag(Symbol::Star, None);
        board.drop_on(0);

        board.begin_drag(Symbol::Globe, None);
        let outcome = board.drop_on(0);

        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(board.player()[0], Some(Symbol::Star));
        assert!(board.pool().contains(&Symbol::Globe));
        assert_conservation(&board);
    }

    #[test]
    fn test_swap_between_occupied_slots() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        board.begin_drag(Symbol::Star, None);
        board.drop_on(0);
        board.begin_drag(Symbol::Globe, None);
        board.drop_on(1);

        board.begin_drag(Symbol::Star, Some(0));
        let outcome = board.drop_on(1);

        assert_eq!(outcome, DropOutcome::Swapped { from: 0, to: 1 });
        assert_eq!(board.player()[0], Some(Symbol::Globe));
        assert_eq!(board.player()[1], Some(Symbol::Star));
        assert_conservation(&board);
    }

    #[test]
    fn test_swap_onto_empty_slot_is_move() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        board.begin_drag(Symbol::Star, None);
        board.drop_on(0);

        board.begin_drag(Symbol::Star, Some(0));
        let outcome = board.drop_on(5);

        assert_eq!(outcome, DropOutcome::Swapped { from: 0, to: 5 });
        assert_eq!(board.player()[0], None);
        assert_eq!(board.player()[5], Some(Symbol::Star));
        assert_conservation(&board);
    }

    #[test]
    fn test_self_drop_is_noop() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        board.begin_drag(Symbol::Star, None);
        board.drop_on(3);

        board.begin_drag(Symbol::Star, Some(3));
        let outcome = board.drop_on(3);

        assert_eq!(outcome, DropOutcome::Rejected);
        assert_eq!(board.player()[3], Some(Symbol::Star));
        // Drag state must be cleared even on a rejected drop
        assert_eq!(board.pending_drag(), None);
    }

    #[test]
    fn test_drop_without_drag_rejected() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        assert_eq!(board.drop_on(0), DropOutcome::Rejected);
    }

    #[test]
    fn test_stale_drag_ignored() {
        let mut board = BoardModel::new();
        board.start_round(&mut DeterministicRng::new(1));

        // Claims Star sits at slot 0, but slot 0 is empty
        board.begin_drag(Symbol::Star, Some(0));
        assert_eq!(board.pending_drag(), None);
        assert_eq!(board.drop_on(1), DropOutcome::Rejected);
    }

    #[test]
    fn test_is_fully_placed() {
        let board = placed_board(99);
        assert!(board.is_fully_placed());
        assert_eq!(board.occupied_count(), GRID_SIZE);
    }

    #[test]
    fn test_start_round_resets_everything() {
        let mut board = placed_board(5);
        board.begin_drag(board.player()[0].unwrap(), Some(0));

        board.start_round(&mut DeterministicRng::new(6));

        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.pool().len(), GRID_SIZE);
        assert_eq!(board.pending_drag(), None);
    }

    proptest! {
        // The target is a permutation of the alphabet for every seed.
        #[test]
        fn prop_target_permutation(seed in any::<u64>()) {
            let mut board = BoardModel::new();
            board.start_round(&mut DeterministicRng::new(seed));

            let mut sorted = *board.target();
            sorted.sort();
            let mut expected = Symbol::ALL;
            expected.sort();
            prop_assert_eq!(sorted, expected);
        }

        // Conservation holds across any sequence of drops: the number of
        // occupied slots plus pooled symbols is always GRID_SIZE, and no
        // symbol is duplicated or lost.
        #[test]
        fn prop_drop_sequences_conserve_symbols(
            seed in any::<u64>(),
            ops in prop::collection::vec((0..3u8, 0..6usize, 0..6usize), 0..60),
        ) {
            let mut board = BoardModel::new();
            board.start_round(&mut DeterministicRng::new(seed));

            for (kind, a, b) in ops {
                match kind {
                    // Drag the next pooled symbol onto slot b
                    0 => {
                        if let Some(symbol) = board.pool().first().copied() {
                            board.begin_drag(symbol, None);
                            board.drop_on(b);
                        }
                    }
                    // Drag the occupant of slot a onto slot b
                    1 => {
                        if let Some(symbol) = board.player()[a] {
                            board.begin_drag(symbol, Some(a));
                            board.drop_on(b);
                        }
                    }
                    // Drop with no drag pending
                    _ => {
                        board.drop_on(b);
                    }
                }

                let occupied = board.occupied_count();
                prop_assert_eq!(occupied + board.pool().len(), GRID_SIZE);

                let mut seen: Vec<Symbol> =
                    board.player().iter().flatten().copied().collect();
                seen.extend_from_slice(board.pool());
                seen.sort();
                seen.dedup();
                prop_assert_eq!(seen.len(), GRID_SIZE);
            }
        }
    }
}
