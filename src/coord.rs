//! Board coordinates and square notation.
//!
//! Checkers is played only on the dark squares of the board: a square (x, y)
//! is playable iff both axes are in range and (x + y) is even. The 32 playable
//! squares map onto a dense array index so a full board fits in a 32-slot
//! array.
//!
//! Square notation follows the chess convention: file letter `a`-`h` (the x
//! axis) followed by rank digit `1`-`8` (y + 1), so `(1, 2)` prints as `b3`.

use std::fmt;

use crate::constants::BOARD_DIM;
use crate::error::GameError;

/// A playable (dark) square. Construction is validating, so a `Coord` held
/// anywhere in the engine is always on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Create a coordinate, rejecting off-board and light squares.
    pub fn new(x: u8, y: u8) -> Result<Coord, GameError> {
        if x < BOARD_DIM && y < BOARD_DIM && (x + y) % 2 == 0 {
            Ok(Coord { x, y })
        } else {
            Err(GameError::InvalidCoordinate { x, y })
        }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// Dense index of this square in a 32-slot board array.
    ///
    /// Each row holds four playable squares, so the mapping is x/2 + y*4.
    pub fn index(self) -> usize {
        (self.x / 2 + self.y * 4) as usize
    }

    /// The square displaced by (dx, dy), or `None` when the displacement
    /// leaves the board. Diagonal displacements preserve square parity, so
    /// the result of an in-range diagonal step or jump is always playable.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if (0..BOARD_DIM as i16).contains(&x) && (0..BOARD_DIM as i16).contains(&y) {
            Coord::new(x as u8, y as u8).ok()
        } else {
            None
        }
    }
}

/// All 32 playable squares, row-major: y ascending, then x ascending.
///
/// This order is load-bearing. Move generation walks it, so it fixes the
/// order of the legal-move list and therefore which child a search picks
/// when win ratios tie.
pub fn all_coords() -> impl Iterator<Item = Coord> {
    (0..BOARD_DIM).flat_map(|y| (0..BOARD_DIM).filter_map(move |x| Coord::new(x, y).ok()))
}

/// Parse square notation (e.g. `"b3"`) into a coordinate.
///
/// Returns `None` for malformed input or a light square.
pub fn parse_square(s: &str) -> Option<Coord> {
    let mut chars = s.trim().chars();
    let file = chars.next()?.to_ascii_lowercase();
    let rank = chars.next()?;
    if chars.next().is_some() || !file.is_ascii_lowercase() || !rank.is_ascii_digit() {
        return None;
    }
    let x = (file as u8).checked_sub(b'a')?;
    let y = (rank as u8 - b'0').checked_sub(1)?;
    Coord::new(x, y).ok()
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_dark_squares() {
        assert!(Coord::new(0, 0).is_ok());
        assert!(Coord::new(7, 7).is_ok());
        assert!(Coord::new(2, 4).is_ok());
    }

    #[test]
    fn test_new_rejects_light_and_off_board() {
        assert_eq!(
            Coord::new(1, 0),
            Err(GameError::InvalidCoordinate { x: 1, y: 0 })
        );
        assert_eq!(
            Coord::new(8, 0),
            Err(GameError::InvalidCoordinate { x: 8, y: 0 })
        );
        assert_eq!(
            Coord::new(0, 9),
            Err(GameError::InvalidCoordinate { x: 0, y: 9 })
        );
    }

    #[test]
    fn test_all_coords_enumeration() {
        let coords: Vec<Coord> = all_coords().collect();
        assert_eq!(coords.len(), 32);

        // Row-major order doubles as the index order
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(c.index(), i, "index mismatch at {c}");
        }

        // Restartable: a second iterator yields the same sequence
        let again: Vec<Coord> = all_coords().collect();
        assert_eq!(coords, again);
    }

    #[test]
    fn test_offset() {
        let c = Coord::new(2, 2).ok().unwrap();
        assert_eq!(c.offset(1, 1), Coord::new(3, 3).ok());
        assert_eq!(c.offset(-2, 2), Coord::new(0, 4).ok());
        assert_eq!(c.offset(-3, 0), None);
        assert_eq!(Coord::new(0, 0).ok().unwrap().offset(-1, 1), None);
        assert_eq!(Coord::new(7, 7).ok().unwrap().offset(1, -1), None);
    }

    #[test]
    fn test_parse_square_roundtrip() {
        for c in all_coords() {
            let s = c.to_string();
            assert_eq!(parse_square(&s), Some(c), "roundtrip failed for {s}");
        }
    }

    #[test]
    fn test_parse_square_rejects_garbage() {
        assert_eq!(parse_square(""), None);
        assert_eq!(parse_square("b"), None);
        assert_eq!(parse_square("b0"), None);
        assert_eq!(parse_square("i3"), None);
        assert_eq!(parse_square("a2"), None); // light square
        assert_eq!(parse_square("b33"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(0, 0).ok().unwrap().to_string(), "a1");
        assert_eq!(Coord::new(7, 7).ok().unwrap().to_string(), "h8");
        assert_eq!(Coord::new(1, 2).ok().unwrap().to_string(), "b3");
    }
}
