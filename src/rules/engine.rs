//! The engine facade: symbol-addressed plays over an owned board.
//!
//! `RaceEngine` is the seam callers talk to. It owns the board, the symbol
//! table, and the play history; one call to [`RaceEngine::play`] is one
//! logical move — movement first, then capture resolution over the traversed
//! span, exactly in that order. Everything else is a query.
//!
//! The engine is fully synchronous and single-writer: a multi-threaded host
//! must serialize calls per engine instance.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{
    BoardConfig, EngineError, EngineResult, PawnSlot, Player, SymbolTable,
};
use crate::rules::capture::{self, CaptureList};
use crate::rules::movement;
use crate::rules::win;

/// Result of one play, returned to the caller for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// Symbol of the moved pawn.
    pub symbol: char,
    /// Owner of the moved pawn.
    pub player: Player,
    /// Slot of the moved pawn.
    pub slot: PawnSlot,
    /// Cell the pawn left.
    pub from: usize,
    /// Cell the pawn ended on — its home when the lap completed.
    pub to: usize,
    /// Whether the pawn completed its lap and is now `Won`.
    pub completed_lap: bool,
    /// Opposing pawns evicted by this play.
    pub captures: CaptureList,
}

/// A play kept in the engine's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    /// Sequence number, starting at 0.
    pub sequence: u32,
    /// Move amount the caller supplied.
    pub amount: u32,
    /// What the play did.
    pub outcome: PlayOutcome,
}

/// The rules engine for one race.
///
/// ## Example
///
/// ```
/// use rust_ludo::core::BoardConfig;
/// use rust_ludo::rules::RaceEngine;
///
/// let config = BoardConfig::plain(40).unwrap();
/// let mut engine = RaceEngine::new(config).unwrap();
///
/// let outcome = engine.play('a', 5).unwrap();
/// assert_eq!((outcome.from, outcome.to), (0, 5));
/// assert_eq!(engine.locate('a').unwrap(), 5);
/// assert!(engine.winner().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RaceEngine {
    config: BoardConfig,
    symbols: SymbolTable,
    board: Board,
    history: Vector<PlayRecord>,
}

impl RaceEngine {
    /// Build an engine over a fresh board.
    pub fn new(config: BoardConfig) -> EngineResult<Self> {
        let board = Board::build(&config)?;
        Ok(Self {
            config,
            symbols: SymbolTable::standard(),
            board,
            history: Vector::new(),
        })
    }

    /// Get the board configuration.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the symbol table.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Get the play history, oldest first.
    ///
    /// The history is a persistent vector: cloning the engine (or the
    /// history itself) is O(1).
    #[must_use]
    pub fn history(&self) -> &Vector<PlayRecord> {
        &self.history
    }

    /// Find the cell a pawn currently occupies.
    ///
    /// Fails with `InvalidSymbol` for unknown symbols and `NotOnTrack` for
    /// pawns that have won or were never placed.
    pub fn locate(&self, symbol: char) -> EngineResult<usize> {
        let (player, slot) = self.symbols.lookup(symbol)?;
        self.board
            .locate_pawn(player, slot)
            .ok_or(EngineError::NotOnTrack { player, slot })
    }

    /// Check whether a pawn may still be moved (it has not won).
    pub fn is_movable(&self, symbol: char) -> EngineResult<bool> {
        let (player, slot) = self.symbols.lookup(symbol)?;
        Ok(win::is_movable(&self.board, player, slot))
    }

    /// Check whether either player has won.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        win::check_win(&self.board)
    }

    /// Execute one play: move the pawn, then resolve captures along the
    /// traversed span.
    ///
    /// `amount` comes from the caller's die and must be at least 1. On any
    /// error the board is untouched.
    pub fn play(&mut self, symbol: char, amount: u32) -> EngineResult<PlayOutcome> {
        let (player, slot) = self.symbols.lookup(symbol)?;
        if amount == 0 {
            return Err(EngineError::InvalidAmount(amount));
        }

        let moved = movement::apply_move(&mut self.board, player, slot, amount)?;
        let captures =
            capture::resolve_captures(&mut self.board, player, moved.src, amount as usize);

        tracing::debug!(
            %player,
            symbol = %symbol,
            amount,
            from = moved.src,
            to = moved.dest,
            completed_lap = moved.completed_lap,
            captured = captures.len(),
            "play applied"
        );

        let outcome = PlayOutcome {
            symbol,
            player,
            slot,
            from: moved.src,
            to: moved.dest,
            completed_lap: moved.completed_lap,
            captures,
        };

        let sequence = self.history.len() as u32;
        self.history.push_back(PlayRecord {
            sequence,
            amount,
            outcome: outcome.clone(),
        });

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PawnState;

    fn engine(total: usize) -> RaceEngine {
        RaceEngine::new(BoardConfig::plain(total).unwrap()).unwrap()
    }

    #[test]
    fn test_play_moves_and_records() {
        let mut engine = engine(40);

        let outcome = engine.play('a', 5).unwrap();

        assert_eq!(outcome.player, Player::First);
        assert_eq!((outcome.from, outcome.to), (0, 5));
        assert!(!outcome.completed_lap);
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.history()[0].amount, 5);
        assert_eq!(engine.history()[0].sequence, 0);
    }

    #[test]
    fn test_play_rejects_unknown_symbol() {
        let mut engine = engine(40);

        assert_eq!(engine.play('q', 3), Err(EngineError::InvalidSymbol('q')));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_play_rejects_zero_amount() {
        let mut engine = engine(40);

        assert_eq!(engine.play('a', 0), Err(EngineError::InvalidAmount(0)));
        // Board untouched.
        assert_eq!(engine.locate('a').unwrap(), 0);
    }

    #[test]
    fn test_play_captures_along_span() {
        let mut engine = engine(40);

        // Walk 'w' from Second's home around the wrap onto First's half,
        // then run 'a' through it.
        engine.play('w', 19).unwrap(); // 20 -> 39
        engine.play('w', 4).unwrap(); // 39 -> 3 (wrapped)
        let outcome = engine.play('a', 5).unwrap(); // span 1..=5 hits cell 3

        assert_eq!(outcome.captures.len(), 1);
        assert_eq!(outcome.captures[0].cell, 3);
        // 'w' is back home.
        assert_eq!(engine.locate('w').unwrap(), 20);
    }

    #[test]
    fn test_play_to_win() {
        let mut engine = engine(40);

        // A full lap for 'w': forward to the ring edge, wrap onto First's
        // half, then back up to its own home.
        engine.play('w', 19).unwrap(); // 20 -> 39
        engine.play('w', 4).unwrap(); // 39 -> 3 (wrapped, no lap)
        let outcome = engine.play('w', 17).unwrap(); // 3 -> 20, lap

        assert!(outcome.completed_lap);
        assert_eq!(outcome.to, 20);
        assert_eq!(
            engine.board().cell(20).state(Player::Second, outcome.slot),
            PawnState::Won
        );
        assert_eq!(engine.is_movable('w').unwrap(), false);
        assert_eq!(
            engine.play('w', 2),
            Err(EngineError::NotOnTrack {
                player: Player::Second,
                slot: PawnSlot::new(0),
            })
        );
    }

    #[test]
    fn test_winner_after_four_laps() {
        let mut engine = engine(8);

        // On an 8-cell board Second's pawns complete by moving 4 from home.
        for symbol in ['w', 'x', 'y', 'z'] {
            assert!(engine.winner().is_none());
            let outcome = engine.play(symbol, 8).unwrap();
            assert!(outcome.completed_lap);
        }

        assert_eq!(engine.winner(), Some(Player::Second));
    }

    #[test]
    fn test_locate_errors() {
        let engine = engine(40);

        assert_eq!(engine.locate('a').unwrap(), 0);
        assert_eq!(engine.locate('%'), Err(EngineError::InvalidSymbol('%')));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut engine = engine(40);
        engine.play('a', 3).unwrap();

        let snapshot = engine.clone();
        engine.play('a', 4).unwrap();

        assert_eq!(snapshot.locate('a').unwrap(), 3);
        assert_eq!(engine.locate('a').unwrap(), 7);
        assert_eq!(snapshot.history().len(), 1);
        assert_eq!(engine.history().len(), 2);
    }

    #[test]
    fn test_outcome_serialization() {
        let mut engine = engine(40);
        let outcome = engine.play('b', 6).unwrap();

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: PlayOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
