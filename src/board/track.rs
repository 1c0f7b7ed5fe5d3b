//! The board: an ordered ring of cells with two homes.
//!
//! The board owns its cells exclusively and never grows, shrinks, or reorders
//! after construction. Movement is conceptually circular, but the ring has two
//! distinguished indices: `First`'s home at 0 and `Second`'s home at the
//! midpoint. The rules layer mutates occupancy through the crate-private cell
//! accessor; everything public here is a query.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::core::{BoardConfig, EngineError, EngineResult, PawnSlot, PawnState, Player};

/// The ring of cells.
///
/// ## Example
///
/// ```
/// use rust_ludo::board::Board;
/// use rust_ludo::core::{BoardConfig, PawnSlot, Player};
///
/// let config = BoardConfig::plain(40).unwrap();
/// let board = Board::build(&config).unwrap();
///
/// // Every pawn starts at its owner's home.
/// assert_eq!(board.locate_pawn(Player::First, PawnSlot::new(0)), Some(0));
/// assert_eq!(board.locate_pawn(Player::Second, PawnSlot::new(0)), Some(20));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a board from a validated configuration.
    ///
    /// Cell 0 becomes `First`'s home and cell `total / 2` becomes `Second`'s
    /// home; each holds its owner's four pawns `OnTrack` and is safe no
    /// matter what the configuration says. Every other cell takes its safety
    /// flag from the configuration.
    ///
    /// Construction is all-or-nothing: if the cell storage cannot be
    /// allocated, `EngineError::Allocation` is returned and no partial board
    /// exists.
    pub fn build(config: &BoardConfig) -> EngineResult<Self> {
        let total = config.total_cells();

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| EngineError::Allocation { requested: total })?;

        for index in 0..total {
            let cell = if index == config.home_index(Player::First) {
                Cell::home(Player::First)
            } else if index == config.home_index(Player::Second) {
                Cell::home(Player::Second)
            } else {
                Cell::open(config.is_safe(index))
            };
            cells.push(cell);
        }

        Ok(Self { cells })
    }

    /// Get the number of cells on the ring.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Get the ring midpoint, `total_cells / 2`.
    #[must_use]
    pub fn half(&self) -> usize {
        self.cells.len() / 2
    }

    /// Get a player's home cell index.
    #[must_use]
    pub fn home_index(&self, player: Player) -> usize {
        match player {
            Player::First => 0,
            Player::Second => self.half(),
        }
    }

    /// Get a cell by index.
    ///
    /// Panics if `index` is out of range; indices come from this board's own
    /// queries.
    #[must_use]
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Get a mutable cell for the rules layer.
    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// All cells in ring order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check whether a cell is safe (configured safe, or a home cell).
    #[must_use]
    pub fn is_safe(&self, index: usize) -> bool {
        self.cells[index].is_safe()
    }

    /// Find the cell where a pawn is `OnTrack`.
    ///
    /// Scans cells in ring order and returns the first (and only) match.
    /// A `Won` pawn is not found — check [`Board::pawn_state`] before relying
    /// on location.
    #[must_use]
    pub fn locate_pawn(&self, player: Player, slot: PawnSlot) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.state(player, slot).is_on_track())
    }

    /// Get a pawn's overall state: `Won` if parked at its home, `OnTrack` if
    /// it occupies some cell, `Absent` otherwise.
    #[must_use]
    pub fn pawn_state(&self, player: Player, slot: PawnSlot) -> PawnState {
        let home = self.cell(self.home_index(player)).state(player, slot);
        if home.is_won() {
            return PawnState::Won;
        }
        if self.locate_pawn(player, slot).is_some() {
            return PawnState::OnTrack;
        }
        PawnState::Absent
    }

    /// Count the cells where a pawn is `OnTrack`. Always 0 or 1 on a board
    /// mutated only through the rules layer; exposed for invariant checks.
    #[must_use]
    pub fn on_track_count(&self, player: Player, slot: PawnSlot) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.state(player, slot).is_on_track())
            .count()
    }
}
