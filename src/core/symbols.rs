//! Pawn symbol alphabet and bidirectional lookup.
//!
//! Each pawn is addressed by a single character. `First` uses `'a'..='d'`,
//! `Second` uses `'w'..='z'`; the position within the alphabet determines the
//! slot, independent of the owner ('a' and 'w' are both slot 0).
//!
//! The table is built once and then queried immutably; all queries are pure.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use super::pawn::PawnSlot;
use super::player::{Player, PlayerMap};

/// Symbols of `First`'s pawns, slot order.
pub const FIRST_SYMBOLS: [char; PawnSlot::COUNT] = ['a', 'b', 'c', 'd'];

/// Symbols of `Second`'s pawns, slot order.
pub const SECOND_SYMBOLS: [char; PawnSlot::COUNT] = ['w', 'x', 'y', 'z'];

/// Bidirectional mapping between pawn symbols and (player, slot) pairs.
///
/// ## Example
///
/// ```
/// use rust_ludo::core::{PawnSlot, Player, SymbolTable};
///
/// let table = SymbolTable::standard();
///
/// assert_eq!(table.lookup('a').unwrap(), (Player::First, PawnSlot::new(0)));
/// assert_eq!(table.lookup('z').unwrap(), (Player::Second, PawnSlot::new(3)));
/// assert_eq!(table.symbol(Player::Second, PawnSlot::new(0)), 'w');
/// assert!(table.lookup('q').is_err());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymbolTable {
    by_symbol: FxHashMap<char, (Player, PawnSlot)>,
    by_pawn: PlayerMap<[char; PawnSlot::COUNT]>,
}

impl SymbolTable {
    /// Build the standard table: `'a'..='d'` for `First`, `'w'..='z'` for
    /// `Second`.
    #[must_use]
    pub fn standard() -> Self {
        let by_pawn = PlayerMap::new(|player| match player {
            Player::First => FIRST_SYMBOLS,
            Player::Second => SECOND_SYMBOLS,
        });

        let mut by_symbol = FxHashMap::default();
        for (player, symbols) in by_pawn.iter() {
            for (slot, &symbol) in PawnSlot::all().zip(symbols.iter()) {
                by_symbol.insert(symbol, (player, slot));
            }
        }

        Self { by_symbol, by_pawn }
    }

    /// Resolve a symbol to its (player, slot) pair.
    ///
    /// Returns `EngineError::InvalidSymbol` for characters outside both
    /// alphabets.
    pub fn lookup(&self, symbol: char) -> EngineResult<(Player, PawnSlot)> {
        self.by_symbol
            .get(&symbol)
            .copied()
            .ok_or(EngineError::InvalidSymbol(symbol))
    }

    /// Get the slot a symbol addresses, if it is a pawn symbol.
    #[must_use]
    pub fn slot(&self, symbol: char) -> Option<PawnSlot> {
        self.by_symbol.get(&symbol).map(|&(_, slot)| slot)
    }

    /// Get the player a symbol belongs to, if it is a pawn symbol.
    #[must_use]
    pub fn player(&self, symbol: char) -> Option<Player> {
        self.by_symbol.get(&symbol).map(|&(player, _)| player)
    }

    /// Check that a symbol names a pawn of the given player.
    #[must_use]
    pub fn is_valid(&self, symbol: char, player: Player) -> bool {
        self.player(symbol) == Some(player)
    }

    /// Get the symbol for a (player, slot) pair.
    #[must_use]
    pub fn symbol(&self, player: Player, slot: PawnSlot) -> char {
        self.by_pawn[player][slot.index()]
    }

    /// Get a player's four symbols in slot order.
    #[must_use]
    pub fn symbols(&self, player: Player) -> &[char; PawnSlot::COUNT] {
        &self.by_pawn[player]
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_all_symbols() {
        let table = SymbolTable::standard();

        for (i, &symbol) in FIRST_SYMBOLS.iter().enumerate() {
            let (player, slot) = table.lookup(symbol).unwrap();
            assert_eq!(player, Player::First);
            assert_eq!(slot.index(), i);
        }

        for (i, &symbol) in SECOND_SYMBOLS.iter().enumerate() {
            let (player, slot) = table.lookup(symbol).unwrap();
            assert_eq!(player, Player::Second);
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        let table = SymbolTable::standard();

        assert_eq!(table.lookup('e'), Err(EngineError::InvalidSymbol('e')));
        assert_eq!(table.lookup('A'), Err(EngineError::InvalidSymbol('A')));
        assert_eq!(table.lookup('1'), Err(EngineError::InvalidSymbol('1')));
    }

    #[test]
    fn test_slot_pairs_match_across_players() {
        // 'a'/'w' -> 0, 'b'/'x' -> 1, 'c'/'y' -> 2, 'd'/'z' -> 3
        let table = SymbolTable::standard();

        for (first, second) in FIRST_SYMBOLS.iter().zip(SECOND_SYMBOLS.iter()) {
            assert_eq!(table.slot(*first), table.slot(*second));
        }
    }

    #[test]
    fn test_is_valid_partitions_alphabets() {
        let table = SymbolTable::standard();

        assert!(table.is_valid('a', Player::First));
        assert!(!table.is_valid('a', Player::Second));
        assert!(table.is_valid('w', Player::Second));
        assert!(!table.is_valid('w', Player::First));
        assert!(!table.is_valid('k', Player::First));
        assert!(!table.is_valid('k', Player::Second));
    }

    #[test]
    fn test_round_trip() {
        let table = SymbolTable::standard();

        for player in Player::all() {
            for slot in PawnSlot::all() {
                let symbol = table.symbol(player, slot);
                assert_eq!(table.lookup(symbol).unwrap(), (player, slot));
            }
        }
    }

    #[test]
    fn test_symbols_accessor() {
        let table = SymbolTable::standard();

        assert_eq!(table.symbols(Player::First), &FIRST_SYMBOLS);
        assert_eq!(table.symbols(Player::Second), &SECOND_SYMBOLS);
    }
}
