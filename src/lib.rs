//! # rust-ludo
//!
//! A two-player pawn-race board game engine (a Ludo/Parchís variant).
//!
//! The engine owns the board state, advances pawns, resolves captures, and
//! detects victory. Everything around it — configuration loading, dice,
//! prompts, rendering — is a collaborator that feeds primitives in or reads
//! state back out.
//!
//! ## Design Principles
//!
//! 1. **One ring, two vantage points**: both players race the same physical
//!    ring, but their homes sit at index 0 and the midpoint, so movement and
//!    capture arithmetic differ per player. That asymmetry lives in exactly
//!    two places (`rules::movement`, `rules::capture`), nowhere else.
//!
//! 2. **Queries are free, mutation is narrow**: the board mutates only
//!    through `apply_move`, `resolve_captures`, and `send_home`. Everything
//!    public on `Board` and `Cell` is a read.
//!
//! 3. **Deterministic simulation**: no hidden randomness. `DiceRng` exists
//!    for hosts that want reproducible games; the engine itself never rolls.
//!
//! ## Modules
//!
//! - `core`: players, pawns, symbols, configuration, dice, errors
//! - `board`: cells and the ring they form
//! - `rules`: movement, captures, win detection, and the `RaceEngine` facade

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, DiceRng, DiceRngState, EngineError, EngineResult, PawnSlot, PawnState, Player,
    PlayerMap, SymbolTable, FIRST_SYMBOLS, MIN_TOTAL_CELLS, SECOND_SYMBOLS,
};

pub use crate::board::{Board, Cell};

pub use crate::rules::{Capture, CaptureList, MoveOutcome, PlayOutcome, PlayRecord, RaceEngine};
