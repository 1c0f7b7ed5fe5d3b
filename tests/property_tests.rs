//! Property-based tests over the engine invariants.
//!
//! Random boards and random play sequences; after every play the board must
//! still satisfy the structural invariants of the game.

use proptest::prelude::*;

use rust_ludo::core::{BoardConfig, EngineError, PawnState, PawnSlot, Player};
use rust_ludo::rules::RaceEngine;

const SYMBOLS: [char; 8] = ['a', 'b', 'c', 'd', 'w', 'x', 'y', 'z'];

fn arb_total_cells() -> impl Strategy<Value = usize> {
    // Even, within the range real configurations use.
    (2usize..=30).prop_map(|n| n * 2)
}

fn arb_config() -> impl Strategy<Value = BoardConfig> {
    arb_total_cells()
        .prop_flat_map(|total| {
            (
                Just(total),
                proptest::collection::vec(any::<bool>(), total),
            )
        })
        .prop_map(|(total, safe)| BoardConfig::new(total, safe).unwrap())
}

proptest! {
    /// Construction: exactly 8 pawns OnTrack, 4 per player at its own home,
    /// and both homes safe regardless of the configured layout.
    #[test]
    fn construction_invariant(config in arb_config()) {
        let engine = RaceEngine::new(config).unwrap();
        let board = engine.board();

        let mut on_track = 0;
        for player in Player::all() {
            let home = board.home_index(player);
            for slot in PawnSlot::all() {
                prop_assert_eq!(board.locate_pawn(player, slot), Some(home));
                on_track += board.on_track_count(player, slot);
            }
        }
        prop_assert_eq!(on_track, 8);

        prop_assert!(board.is_safe(board.home_index(Player::First)));
        prop_assert!(board.is_safe(board.home_index(Player::Second)));
    }

    /// After any sequence of plays: every pawn is either OnTrack in exactly
    /// one cell, or Won and pinned at its home; Won never reverts; captures
    /// land at the victim's own home; play never fails except for the
    /// documented reasons.
    #[test]
    fn play_preserves_invariants(
        config in arb_config(),
        moves in proptest::collection::vec((0usize..8, 1u32..=6), 1..120),
    ) {
        let mut engine = RaceEngine::new(config).unwrap();
        let mut won: Vec<(Player, PawnSlot)> = Vec::new();

        for (pick, amount) in moves {
            let symbol = SYMBOLS[pick];
            let (player, slot) = engine.symbols().lookup(symbol).unwrap();

            match engine.play(symbol, amount) {
                Ok(outcome) => {
                    if outcome.completed_lap {
                        won.push((player, slot));
                    }
                    // Captured pawns are OnTrack at their own home.
                    for capture in &outcome.captures {
                        let home = engine.board().home_index(capture.player);
                        prop_assert_eq!(
                            engine.board().locate_pawn(capture.player, capture.slot),
                            Some(home)
                        );
                    }
                }
                Err(EngineError::NotOnTrack { .. }) => {
                    // Only pawns that already won are unplayable.
                    prop_assert!(won.contains(&(player, slot)));
                }
                Err(other) => prop_assert!(false, "unexpected engine error: {}", other),
            }

            // Structural invariants hold after every play.
            for player in Player::all() {
                let home = engine.board().home_index(player);
                for slot in PawnSlot::all() {
                    match engine.board().pawn_state(player, slot) {
                        PawnState::OnTrack => {
                            prop_assert_eq!(engine.board().on_track_count(player, slot), 1);
                            prop_assert!(!won.contains(&(player, slot)));
                        }
                        PawnState::Won => {
                            prop_assert_eq!(engine.board().on_track_count(player, slot), 0);
                            prop_assert_eq!(
                                engine.board().cell(home).state(player, slot),
                                PawnState::Won
                            );
                            prop_assert!(won.contains(&(player, slot)));
                        }
                        PawnState::Absent => prop_assert!(false, "engine lost a pawn"),
                    }
                }
            }
        }
    }

    /// Win detection triggers exactly when all four of a player's pawns
    /// have won, and reports that player.
    #[test]
    fn win_detection_matches_won_pawns(
        config in arb_config(),
        moves in proptest::collection::vec((0usize..8, 1u32..=6), 1..200),
    ) {
        let mut engine = RaceEngine::new(config).unwrap();

        for (pick, amount) in moves {
            let _ = engine.play(SYMBOLS[pick], amount);

            let expected = Player::all().find(|&player| {
                PawnSlot::all()
                    .all(|slot| engine.board().pawn_state(player, slot).is_won())
            });
            prop_assert_eq!(engine.winner(), expected);
        }
    }

    /// The engine records exactly the successful plays.
    #[test]
    fn history_matches_successful_plays(
        config in arb_config(),
        moves in proptest::collection::vec((0usize..8, 1u32..=6), 1..80),
    ) {
        let mut engine = RaceEngine::new(config).unwrap();
        let mut successes = 0u32;

        for (pick, amount) in moves {
            if engine.play(SYMBOLS[pick], amount).is_ok() {
                successes += 1;
            }
            prop_assert_eq!(engine.history().len() as u32, successes);
        }

        for (index, record) in engine.history().iter().enumerate() {
            prop_assert_eq!(record.sequence as usize, index);
        }
    }
}
