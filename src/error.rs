//! Typed failures shared across the rules engine.
//!
//! Every failure is synchronous and local to the requested operation. Nothing
//! is retried and no `Position` is ever left partially updated: an operation
//! either returns a fresh value or fails before building one.

use std::fmt;

use crate::moves::Move;

/// A logic error raised by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate off the board or on a light (unplayable) square.
    InvalidCoordinate { x: u8, y: u8 },
    /// Asked for the captured square of a move that is not a jump.
    NotAJump(Move),
    /// Tried to promote an empty square.
    InvalidPromotion,
    /// Tried to apply a move absent from the current legal-move set.
    IllegalMove(Move),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate { x, y } => {
                write!(f, "invalid square ({x}, {y}): off board or not a dark square")
            }
            GameError::NotAJump(mv) => write!(f, "{mv} is not a jump"),
            GameError::InvalidPromotion => write!(f, "cannot promote an empty square"),
            GameError::IllegalMove(mv) => write!(f, "{mv} is not legal in this position"),
        }
    }
}

impl std::error::Error for GameError {}
