//! Engine error types.
//!
//! Every failure the engine reports is one of a small closed set; there are
//! no retries and no silent recovery. Impossible indices and other caller
//! contract violations are not represented here — the engine validates only
//! what it cannot assume (symbols, configuration, allocation, pawn presence,
//! and the facade-level move amount).

use super::pawn::PawnSlot;
use super::player::Player;

/// Errors surfaced by the race engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// Board construction could not allocate the cell storage.
    /// No partial board is produced.
    Allocation {
        /// Number of cells requested.
        requested: usize,
    },
    /// Board configuration rejected before construction.
    InvalidConfig(&'static str),
    /// The symbol does not belong to either player's alphabet.
    /// No mutation is performed.
    InvalidSymbol(char),
    /// The pawn is not `OnTrack` anywhere — it has won, or was never placed.
    /// Callers treat this as "move not applicable".
    NotOnTrack {
        /// Owner of the pawn.
        player: Player,
        /// Slot of the pawn.
        slot: PawnSlot,
    },
    /// The move amount must be at least 1.
    InvalidAmount(u32),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Allocation { requested } => {
                write!(f, "failed to allocate board storage for {requested} cells")
            }
            EngineError::InvalidConfig(reason) => {
                write!(f, "invalid board configuration: {reason}")
            }
            EngineError::InvalidSymbol(symbol) => {
                write!(f, "'{symbol}' is not a pawn symbol")
            }
            EngineError::NotOnTrack { player, slot } => {
                write!(f, "{player} pawn {slot} is not on the track")
            }
            EngineError::InvalidAmount(amount) => {
                write!(f, "move amount must be at least 1, got {amount}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            EngineError::Allocation { requested: 40 }.to_string(),
            "failed to allocate board storage for 40 cells"
        );
        assert_eq!(
            EngineError::InvalidSymbol('q').to_string(),
            "'q' is not a pawn symbol"
        );
        assert_eq!(
            EngineError::NotOnTrack {
                player: Player::Second,
                slot: PawnSlot::new(1),
            }
            .to_string(),
            "Player 1 pawn slot 1 is not on the track"
        );
        assert_eq!(
            EngineError::InvalidAmount(0).to_string(),
            "move amount must be at least 1, got 0"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(EngineError::InvalidSymbol('?'));
        assert!(err.to_string().contains("pawn symbol"));
    }
}
