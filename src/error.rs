//! Error types for the game core.
//!
//! Every error here is locally recoverable: the caller re-prompts or
//! ignores the input, and the session state is left untouched.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum IllegalMoveReason {
    /// Cell index outside 0-8.
    #[display("cell index out of range (must be 0-8)")]
    OutOfRange,
    /// Target cell is already occupied.
    #[display("cell is already occupied")]
    CellOccupied,
    /// The submitting side is not the side to move.
    #[display("not this player's turn")]
    NotYourTurn,
    /// The session is not accepting moves (finished or closed).
    #[display("session is not active")]
    SessionInactive,
}

/// Errors raised by the game core.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A move was rejected; the board is unchanged.
    #[display("illegal move: {_0}")]
    IllegalMove(IllegalMoveReason),
    /// Session configuration was not recognized; no session created.
    #[display("invalid configuration: {_0}")]
    InvalidConfiguration(#[error(not(source))] String),
}

impl From<IllegalMoveReason> for GameError {
    fn from(reason: IllegalMoveReason) -> Self {
        GameError::IllegalMove(reason)
    }
}
