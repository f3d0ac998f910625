//! Move representation.
//!
//! A move is a start/end pair of playable squares. Whether it is a jump is
//! derived from the file distance: a simple step moves one file, a jump moves
//! two, and nothing else is ever generated.

use std::fmt;

use crate::coord::Coord;
use crate::error::GameError;

/// A move from one square to another. Equality is structural on the pair.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub start: Coord,
    pub end: Coord,
}

impl Move {
    pub fn new(start: Coord, end: Coord) -> Move {
        Move { start, end }
    }

    /// A jump crosses two files; a step crosses one.
    pub fn is_jump(&self) -> bool {
        (self.start.x() as i16 - self.end.x() as i16).abs() > 1
    }

    /// The square jumped over, i.e. the midpoint of start and end.
    ///
    /// Fails with `NotAJump` for a step. A degenerate hand-built "jump" whose
    /// midpoint lands on a light square surfaces `InvalidCoordinate`; moves
    /// produced by the generator always have a playable midpoint.
    pub fn captured_square(&self) -> Result<Coord, GameError> {
        if !self.is_jump() {
            return Err(GameError::NotAJump(*self));
        }
        Coord::new(
            (self.start.x() + self.end.x()) / 2,
            (self.start.y() + self.end.y()) / 2,
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
