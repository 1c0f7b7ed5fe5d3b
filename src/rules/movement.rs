//! Movement: destination resolution, lap completion, move application.
//!
//! The two players experience the same physical ring asymmetrically.
//! `First`'s home sits at the ring origin, so its laps are detected purely by
//! the raw destination crossing `total_cells`. `Second`'s home sits at the
//! ring midpoint: a move starting before that home clamps to it, while a move
//! starting at or past it wraps around the origin like any ring walk.
//!
//! Destination and lap arithmetic are pure functions; only
//! [`apply_move`] touches the board.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{EngineError, EngineResult, PawnSlot, PawnState, Player};

/// Result of a resolved move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Cell the pawn left.
    pub src: usize,
    /// Unclipped destination, `src + amount`. May exceed the ring.
    pub raw_dest: usize,
    /// Cell the pawn ended on — its home index when the lap completed.
    pub dest: usize,
    /// Whether the move completed the pawn's lap.
    pub completed_lap: bool,
}

/// Resolve the final destination index for a raw destination.
///
/// `First` is returned unverified: its wrap is handled entirely by the lap
/// check. `Second` clamps to its home when starting before it, and wraps
/// modulo the ring when starting at or past it.
#[must_use]
pub fn final_destination(player: Player, total_cells: usize, src: usize, raw_dest: usize) -> usize {
    let half = total_cells / 2;
    match player {
        Player::First => raw_dest,
        Player::Second => {
            if src < half {
                raw_dest.min(half)
            } else if raw_dest >= total_cells {
                raw_dest % total_cells
            } else {
                raw_dest
            }
        }
    }
}

/// Decide whether a move completes the pawn's lap.
///
/// `First` completes iff the raw destination crossed the ring origin.
/// `Second` completes iff it reached its mid-ring home from before it, or
/// wrapped past the origin and cleared that home again. Landing exactly on
/// one's own home from the near side counts as completion.
#[must_use]
pub fn completes_lap(
    player: Player,
    total_cells: usize,
    src: usize,
    raw_dest: usize,
    final_dest: usize,
) -> bool {
    let half = total_cells / 2;
    match player {
        Player::First => raw_dest >= total_cells,
        Player::Second => {
            (src < half && final_dest >= half)
                || (raw_dest >= total_cells && final_dest >= half)
        }
    }
}

/// Move a pawn `amount` cells forward, mutating the board in place.
///
/// On lap completion the pawn is pinned `Won` at its own home cell and
/// written nowhere else; otherwise its source cell is cleared and it lands
/// `OnTrack` at the final destination.
///
/// Fails with `NotOnTrack` (and mutates nothing) if the pawn has no track
/// position — it has won, or was never placed.
pub fn apply_move(
    board: &mut Board,
    player: Player,
    slot: PawnSlot,
    amount: u32,
) -> EngineResult<MoveOutcome> {
    let src = board
        .locate_pawn(player, slot)
        .ok_or(EngineError::NotOnTrack { player, slot })?;

    let total_cells = board.total_cells();
    let raw_dest = src + amount as usize;
    let final_dest = final_destination(player, total_cells, src, raw_dest);
    let completed_lap = completes_lap(player, total_cells, src, raw_dest, final_dest);

    board.cell_mut(src).set_state(player, slot, PawnState::Absent);
    if completed_lap {
        let home = board.home_index(player);
        board.cell_mut(home).set_state(player, slot, PawnState::Won);
        tracing::debug!(%player, %slot, src, "pawn completed its lap");
        Ok(MoveOutcome {
            src,
            raw_dest,
            dest: home,
            completed_lap: true,
        })
    } else {
        board
            .cell_mut(final_dest)
            .set_state(player, slot, PawnState::OnTrack);
        Ok(MoveOutcome {
            src,
            raw_dest,
            dest: final_dest,
            completed_lap: false,
        })
    }
}
