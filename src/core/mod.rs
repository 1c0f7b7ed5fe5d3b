//! Core engine types: players, pawns, symbols, configuration, dice, errors.
//!
//! This module contains the fundamental building blocks the board and rules
//! layers are built from. Everything here is plain data or pure lookup; the
//! board owns the mutable state.

pub mod config;
pub mod error;
pub mod pawn;
pub mod player;
pub mod rng;
pub mod symbols;

pub use config::{BoardConfig, MIN_TOTAL_CELLS};
pub use error::{EngineError, EngineResult};
pub use pawn::{PawnSlot, PawnState};
pub use player::{Player, PlayerMap};
pub use rng::{DiceRng, DiceRngState};
pub use symbols::{SymbolTable, FIRST_SYMBOLS, SECOND_SYMBOLS};
