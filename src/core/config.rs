//! Board configuration.
//!
//! Hosts load the cell count and safe-cell layout from wherever they like
//! (files, CLI, hardcoded presets — all out of scope here) and hand the
//! primitives to `BoardConfig`, which validates them once. A `BoardConfig`
//! that exists is always valid; `Board::build` never re-checks.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::player::Player;

/// Smallest legal board: two distinct homes plus a cell between them on
/// each side.
pub const MIN_TOTAL_CELLS: usize = 4;

/// Validated board configuration: cell count and safe-cell layout.
///
/// `total_cells` must be even (the second player's home sits at the exact
/// ring midpoint) and at least [`MIN_TOTAL_CELLS`]. The safety vector is
/// indexed by cell; home cells are safe regardless of what it says there.
///
/// ## Example
///
/// ```
/// use rust_ludo::core::{BoardConfig, Player};
///
/// let config = BoardConfig::from_safe_positions(40, &[5, 12, 33]).unwrap();
///
/// assert_eq!(config.total_cells(), 40);
/// assert_eq!(config.home_index(Player::Second), 20);
/// assert!(config.is_safe(12));
/// assert!(!config.is_safe(13));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    total_cells: usize,
    safe_cells: Vec<bool>,
}

impl BoardConfig {
    /// Create a configuration from a per-cell safety vector.
    ///
    /// The vector must have exactly `total_cells` entries.
    pub fn new(total_cells: usize, safe_cells: Vec<bool>) -> EngineResult<Self> {
        if total_cells < MIN_TOTAL_CELLS {
            return Err(EngineError::InvalidConfig("board is too small"));
        }
        if total_cells % 2 != 0 {
            return Err(EngineError::InvalidConfig("cell count must be even"));
        }
        if safe_cells.len() != total_cells {
            return Err(EngineError::InvalidConfig(
                "safe-cell vector length must equal the cell count",
            ));
        }

        Ok(Self {
            total_cells,
            safe_cells,
        })
    }

    /// Create a configuration from a list of safe cell positions.
    ///
    /// Positions outside `0..total_cells` are rejected.
    pub fn from_safe_positions(total_cells: usize, positions: &[usize]) -> EngineResult<Self> {
        if positions.iter().any(|&p| p >= total_cells) {
            return Err(EngineError::InvalidConfig(
                "safe-cell position outside the board",
            ));
        }

        let mut safe_cells = vec![false; total_cells];
        for &position in positions {
            safe_cells[position] = true;
        }
        Self::new(total_cells, safe_cells)
    }

    /// Create a configuration with no configured safe cells.
    ///
    /// Home cells are still safe — that is a board invariant, not
    /// configuration.
    pub fn plain(total_cells: usize) -> EngineResult<Self> {
        Self::new(total_cells, vec![false; total_cells])
    }

    /// Get the number of cells on the ring.
    #[must_use]
    pub fn total_cells(&self) -> usize {
        self.total_cells
    }

    /// Get the ring midpoint, `total_cells / 2`.
    #[must_use]
    pub fn half(&self) -> usize {
        self.total_cells / 2
    }

    /// Get a player's home cell index.
    #[must_use]
    pub fn home_index(&self, player: Player) -> usize {
        match player {
            Player::First => 0,
            Player::Second => self.half(),
        }
    }

    /// Check whether the configuration marks a cell safe.
    ///
    /// This reads the configured layout only; `Board` additionally forces
    /// both home cells safe.
    #[must_use]
    pub fn is_safe(&self, index: usize) -> bool {
        self.safe_cells.get(index).copied().unwrap_or(false)
    }
}
