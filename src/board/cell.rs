//! A single position on the track.
//!
//! A cell stores its safety flag and the state of all eight pawns with
//! respect to this position. Occupancy is written only by board construction
//! and the rules layer; everything else reads.

use serde::{Deserialize, Serialize};

use crate::core::{PawnSlot, PawnState, Player, PlayerMap};

/// One addressable position on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    safe: bool,
    occupancy: PlayerMap<[PawnState; PawnSlot::COUNT]>,
}

impl Cell {
    /// Create an unoccupied cell with the given safety flag.
    #[must_use]
    pub(crate) fn open(safe: bool) -> Self {
        Self {
            safe,
            occupancy: PlayerMap::with_default(),
        }
    }

    /// Create a home cell for `owner`: all four of the owner's pawns start
    /// `OnTrack` here, and home cells are safe regardless of configuration.
    #[must_use]
    pub(crate) fn home(owner: Player) -> Self {
        let mut cell = Self::open(true);
        cell.occupancy[owner] = [PawnState::OnTrack; PawnSlot::COUNT];
        cell
    }

    /// Check whether this cell is safe.
    #[must_use]
    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// Get the state of a pawn at this cell.
    #[must_use]
    pub fn state(&self, player: Player, slot: PawnSlot) -> PawnState {
        self.occupancy[player][slot.index()]
    }

    /// Set the state of a pawn at this cell.
    pub(crate) fn set_state(&mut self, player: Player, slot: PawnSlot, state: PawnState) {
        self.occupancy[player][slot.index()] = state;
    }

    /// Iterate over the slots of `player`'s pawns that are `OnTrack` here.
    pub fn on_track_slots(&self, player: Player) -> impl Iterator<Item = PawnSlot> + '_ {
        PawnSlot::all().filter(move |slot| self.state(player, *slot).is_on_track())
    }

    /// Check whether any of `player`'s pawns is `OnTrack` here.
    #[must_use]
    pub fn has_on_track(&self, player: Player) -> bool {
        self.on_track_slots(player).next().is_some()
    }
}
