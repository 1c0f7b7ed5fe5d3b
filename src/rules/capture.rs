//! Captures: effective traversal length, the capture walk, and send-home.
//!
//! A move captures every opposing `OnTrack` pawn on every cell the mover
//! traversed — not just the landing cell, and regardless of the cells'
//! safety flags. Captured pawns return to their own home `OnTrack`; they
//! never gain or lose `Won`.
//!
//! The traversed span is not simply `amount` cells long: near either home
//! the track is shorter than the ring, because a lap ends at the mover's
//! home. [`traversal_length`] reproduces that clipping, and
//! [`resolve_captures`] walks the clipped span.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::{PawnSlot, PawnState, Player};

/// One captured pawn: who was evicted and where it stood.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    /// Owner of the captured pawn.
    pub player: Player,
    /// Slot of the captured pawn.
    pub slot: PawnSlot,
    /// Cell the pawn was standing on when captured.
    pub cell: usize,
}

/// Captures from a single move. Rarely more than a couple.
pub type CaptureList = SmallVec<[Capture; 4]>;

/// Compute the number of cells a move actually traverses.
///
/// - `First` walks `amount` cells unless the move would cross the ring
///   boundary, in which case the walk stops there.
/// - `Second` starting before its home stops at the home; starting at or
///   past it, a move crossing the ring boundary adds the wrapped excess
///   back — the full second half-lap if the excess covers it, otherwise
///   just the leftover.
#[must_use]
pub fn traversal_length(player: Player, total_cells: usize, src: usize, amount: usize) -> usize {
    let half = total_cells / 2;
    match player {
        Player::First => {
            if src + amount >= total_cells {
                total_cells - src
            } else {
                amount
            }
        }
        Player::Second => {
            if src < half {
                if src + amount >= half {
                    half - src
                } else {
                    amount
                }
            } else if src + amount >= total_cells {
                let to_boundary = total_cells - src;
                let excess = amount - to_boundary;
                to_boundary + if excess >= half { half } else { excess }
            } else {
                amount
            }
        }
    }
}

/// Evict every opposing `OnTrack` pawn along the span a move traversed.
///
/// `src` and `amount` describe the move *before* it was applied. The walk
/// starts at `src + 1`; `First` stops at the ring boundary, `Second` wraps
/// to cell 0 and continues up to its home inclusive. Safety flags do not
/// shield traversed cells.
pub fn resolve_captures(
    board: &mut Board,
    mover: Player,
    src: usize,
    amount: usize,
) -> CaptureList {
    let total_cells = board.total_cells();
    let half = total_cells / 2;
    let opponent = mover.opponent();
    let places = traversal_length(mover, total_cells, src, amount);

    let mut captures = CaptureList::new();

    // First leg: forward from the source, stopping at the ring boundary.
    let first_leg_end = (src + places).min(total_cells - 1);
    for index in (src + 1)..=first_leg_end {
        capture_at(board, opponent, index, &mut captures);
    }

    // Wrapped leg: only the second player continues past the origin, and
    // never beyond its own home.
    let mut remaining = places - (first_leg_end - src);
    if remaining > 0 && mover == Player::Second {
        let mut index = 0;
        while remaining > 0 && index <= half {
            capture_at(board, opponent, index, &mut captures);
            remaining -= 1;
            index += 1;
        }
    }

    captures
}

/// Send a pawn back to its own home cell, `OnTrack`.
///
/// Clears the pawn at `at` and re-places it at its home. Never writes `Won`.
pub fn send_home(board: &mut Board, player: Player, slot: PawnSlot, at: usize) {
    let home = board.home_index(player);
    board.cell_mut(at).set_state(player, slot, PawnState::Absent);
    board
        .cell_mut(home)
        .set_state(player, slot, PawnState::OnTrack);
}

fn capture_at(board: &mut Board, opponent: Player, index: usize, captures: &mut CaptureList) {
    let slots: SmallVec<[PawnSlot; 4]> = board.cell(index).on_track_slots(opponent).collect();
    for slot in slots {
        send_home(board, opponent, slot, index);
        tracing::debug!(player = %opponent, %slot, cell = index, "pawn captured");
        captures.push(Capture {
            player: opponent,
            slot,
            cell: index,
        });
    }
}
