//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The race is always contested by exactly two players. `Player` is a
//! two-variant enum rather than a numeric ID so that "the other player"
//! is total and match exhaustiveness is compiler-checked.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `[T; 2]` for O(1) access.
//! Supports iteration and indexing by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players in a race.
///
/// `First` owns the track origin (cell 0); `Second` owns the ring midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player 0 — home at cell 0.
    First,
    /// Player 1 — home at the ring midpoint.
    Second,
}

impl Player {
    /// Number of players in a race. Always 2.
    pub const COUNT: usize = 2;

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    /// Get the opposing player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Iterate over both players, `First` first.
    ///
    /// ```
    /// use rust_ludo::core::Player;
    ///
    /// let players: Vec<_> = Player::all().collect();
    /// assert_eq!(players, vec![Player::First, Player::Second]);
    /// ```
    pub fn all() -> impl Iterator<Item = Player> {
        [Player::First, Player::Second].into_iter()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per player.
/// Use `PlayerMap::new()` to create with a factory function,
/// or `PlayerMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use rust_ludo::core::{Player, PlayerMap};
///
/// // Create with factory
/// let mut score: PlayerMap<i32> = PlayerMap::new(|_| 0);
///
/// // Access by player
/// assert_eq!(score[Player::First], 0);
///
/// // Modify
/// score[Player::Second] = 3;
/// assert_eq!(score[Player::Second], 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `Player` for each entry.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::First), factory(Player::Second)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::all().zip(self.data.iter())
    }

    /// Iterate over (Player, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Player, &mut T)> {
        Player::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
