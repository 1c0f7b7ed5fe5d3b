//! Domain rules over the board.
//!
//! ## Key Pieces
//!
//! - `movement`: destination resolution, lap completion, move application
//! - `capture`: traversed-span arithmetic and opposing-pawn eviction
//! - `win`: win detection and movability
//! - `engine`: `RaceEngine`, the symbol-addressed facade callers use
//!
//! The movement and capture functions operate on `(player, slot)` pairs and
//! are usable directly; the facade adds symbol resolution, amount
//! validation, and history.

pub mod capture;
pub mod engine;
pub mod movement;
pub mod win;

pub use capture::{Capture, CaptureList};
pub use engine::{PlayOutcome, PlayRecord, RaceEngine};
pub use movement::MoveOutcome;
