//! Pawn identification and lifecycle state.
//!
//! ## PawnSlot
//!
//! Each player fields four pawns, addressed by slot index 0..=3. The slot is
//! derived from the pawn's symbol (see `core::symbols`) and is independent of
//! which player owns the pawn.
//!
//! ## PawnState
//!
//! A pawn is in exactly one of three states with respect to any given cell:
//! absent, on the track there, or parked as won at its owner's home.
//! `Won` is terminal — nothing but rebuilding the board clears it.

use serde::{Deserialize, Serialize};

/// Pawn slot index within a player's set of four pawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PawnSlot(u8);

impl PawnSlot {
    /// Number of pawns per player. Always 4.
    pub const COUNT: usize = 4;

    /// Create a new pawn slot.
    ///
    /// Panics if `slot` is not in 0..=3. Slots produced by the symbol table
    /// are always valid; this constructor is for tests and hosts that build
    /// slots directly.
    #[must_use]
    pub fn new(slot: u8) -> Self {
        assert!((slot as usize) < Self::COUNT, "Pawn slot must be 0..=3");
        Self(slot)
    }

    /// Get the raw slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all four slots in order.
    ///
    /// ```
    /// use rust_ludo::core::PawnSlot;
    ///
    /// let slots: Vec<_> = PawnSlot::all().collect();
    /// assert_eq!(slots.len(), 4);
    /// assert_eq!(slots[0], PawnSlot::new(0));
    /// ```
    pub fn all() -> impl Iterator<Item = PawnSlot> {
        (0..Self::COUNT as u8).map(PawnSlot)
    }
}

impl std::fmt::Display for PawnSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// Lifecycle state of a pawn at a cell.
///
/// State transitions:
/// - `Absent -> OnTrack`: board construction places each pawn at its home.
/// - `OnTrack -> OnTrack` (new cell): ordinary move or capture send-home.
/// - `OnTrack -> Won`: lap completion. Terminal; never reverted by movement
///   or capture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PawnState {
    /// The pawn is not at this cell.
    #[default]
    Absent,
    /// The pawn currently occupies this cell.
    OnTrack,
    /// The pawn has completed its lap and is parked at its owner's home.
    Won,
}

impl PawnState {
    /// Check whether this state is `OnTrack`.
    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, PawnState::OnTrack)
    }

    /// Check whether this state is `Won`.
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, PawnState::Won)
    }
}
