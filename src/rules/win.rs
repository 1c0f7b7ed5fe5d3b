//! Win detection and pawn movability.

use crate::board::Board;
use crate::core::{PawnSlot, Player};

/// Check whether either player has won.
///
/// A player has won iff all four of its pawns read `Won` at that player's
/// home cell — `Won` pawns are pinned there and nowhere else. If both
/// players somehow qualify, `First` is reported; that cannot arise under
/// correct play.
#[must_use]
pub fn check_win(board: &Board) -> Option<Player> {
    Player::all().find(|&player| {
        let home = board.cell(board.home_index(player));
        PawnSlot::all().all(|slot| home.state(player, slot).is_won())
    })
}

/// Check whether a pawn may still be moved.
///
/// A pawn is movable iff it has not `Won`; both `OnTrack` and `Absent`
/// pawns count as movable.
#[must_use]
pub fn is_movable(board: &Board, player: Player, slot: PawnSlot) -> bool {
    !board.pawn_state(player, slot).is_won()
}
