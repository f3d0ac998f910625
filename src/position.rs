//! Board state, move legality, move application, and win detection.
//!
//! A [`Position`] is an immutable snapshot: the 32 playable squares, the side
//! to move, and an optional mid-chain marker for a piece that just captured
//! and must keep capturing. Applying a move never edits a position in place;
//! it builds a new one.
//!
//! Legality is layered:
//! 1. A piece mid-capture-chain is the only piece allowed to move, and only
//!    by jumping again.
//! 2. Otherwise every step and jump of every owned piece is generated, and if
//!    any jump exists the whole list collapses to jumps. Captures are
//!    compulsory for the side as a whole, not per piece.

use std::fmt;

use crate::constants::{BACK_ROWS, BOARD_DIM, PLAYABLE_SQUARES};
use crate::coord::{Coord, all_coords};
use crate::error::GameError;
use crate::moves::Move;

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Forward direction along y. Black advances toward higher rows, White
    /// toward lower rows.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// The row on which this side's men are crowned.
    pub fn crowning_row(self) -> u8 {
        match self {
            Side::White => 0,
            Side::Black => BOARD_DIM - 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Contents of a playable square.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareOccupant {
    Empty,
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl SquareOccupant {
    /// The side owning this piece, or `None` for an empty square.
    pub fn side(self) -> Option<Side> {
        match self {
            SquareOccupant::Empty => None,
            SquareOccupant::WhiteMan | SquareOccupant::WhiteKing => Some(Side::White),
            SquareOccupant::BlackMan | SquareOccupant::BlackKing => Some(Side::Black),
        }
    }

    pub fn is_king(self) -> bool {
        match self {
            SquareOccupant::WhiteKing | SquareOccupant::BlackKing => true,
            SquareOccupant::Empty | SquareOccupant::WhiteMan | SquareOccupant::BlackMan => false,
        }
    }

    /// Crown a man. Kings promote to themselves; an empty square cannot be
    /// promoted.
    pub fn promote(self) -> Result<SquareOccupant, GameError> {
        match self {
            SquareOccupant::WhiteMan | SquareOccupant::WhiteKing => Ok(SquareOccupant::WhiteKing),
            SquareOccupant::BlackMan | SquareOccupant::BlackKing => Ok(SquareOccupant::BlackKing),
            SquareOccupant::Empty => Err(GameError::InvalidPromotion),
        }
    }

    fn symbol(self) -> char {
        match self {
            SquareOccupant::Empty => '.',
            SquareOccupant::WhiteMan => 'w',
            SquareOccupant::WhiteKing => 'W',
            SquareOccupant::BlackMan => 'b',
            SquareOccupant::BlackKing => 'B',
        }
    }
}

/// An immutable board state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    board: [SquareOccupant; PLAYABLE_SQUARES],
    turn: Side,
    jumping: Option<Coord>,
}

impl Position {
    /// The standard starting position: three rows of men per side, Black on
    /// rows 0..3, White on rows 5..8, Black to move.
    pub fn initial() -> Position {
        let mut board = [SquareOccupant::Empty; PLAYABLE_SQUARES];
        for c in all_coords() {
            if c.y() < BACK_ROWS {
                board[c.index()] = SquareOccupant::BlackMan;
            } else if c.y() >= BOARD_DIM - BACK_ROWS {
                board[c.index()] = SquareOccupant::WhiteMan;
            }
        }
        Position {
            board,
            turn: Side::Black,
            jumping: None,
        }
    }

    /// Build an arbitrary position, for problem setups and tests. Later
    /// entries overwrite earlier ones on the same square.
    pub fn from_pieces(turn: Side, pieces: &[(Coord, SquareOccupant)]) -> Position {
        let mut board = [SquareOccupant::Empty; PLAYABLE_SQUARES];
        for &(at, occ) in pieces {
            board[at.index()] = occ;
        }
        Position {
            board,
            turn,
            jumping: None,
        }
    }

    pub fn occupant(&self, at: Coord) -> SquareOccupant {
        self.board[at.index()]
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The piece that just captured and must keep capturing, if any.
    pub fn jumping(&self) -> Option<Coord> {
        self.jumping
    }
}

/// The complete legal-move list for the side to move.
///
/// The list is order-stable: pieces are visited in [`all_coords`] order, and
/// for each piece the forward direction precedes the backward one.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut moves = Vec::new();

    if let Some(from) = pos.jumping {
        piece_jumps(pos, from, &mut moves);
        return moves;
    }

    for from in all_coords() {
        if pos.occupant(from).side() != Some(pos.turn) {
            continue;
        }
        piece_moves(pos, from, &mut moves);
    }

    if moves.iter().any(Move::is_jump) {
        moves.retain(Move::is_jump);
    }
    moves
}

/// Whether `mv` is a legal simple step for the side to move: the start holds
/// one of its pieces, the destination is empty, the files differ by one, and
/// the row displacement matches the piece's forward direction (either
/// direction for a king).
pub fn is_legal_step(pos: &Position, mv: Move) -> bool {
    let occ = pos.occupant(mv.start);
    if occ.side() != Some(pos.turn) || pos.occupant(mv.end) != SquareOccupant::Empty {
        return false;
    }
    let dx = mv.end.x() as i16 - mv.start.x() as i16;
    let dy = mv.end.y() as i16 - mv.start.y() as i16;
    let fwd = pos.turn.forward() as i16;
    dx.abs() == 1 && (dy == fwd || (occ.is_king() && dy == -fwd))
}

/// Whether `mv` is a legal jump for the side to move: the step rule scaled by
/// two, plus the jumped square must hold an opposing piece. Checking only
/// that the destination is empty is not enough; the direction and the
/// opposing occupant are part of the rule.
pub fn is_legal_jump(pos: &Position, mv: Move) -> bool {
    let occ = pos.occupant(mv.start);
    if occ.side() != Some(pos.turn) || pos.occupant(mv.end) != SquareOccupant::Empty {
        return false;
    }
    let dx = mv.end.x() as i16 - mv.start.x() as i16;
    let dy = mv.end.y() as i16 - mv.start.y() as i16;
    let fwd = pos.turn.forward() as i16 * 2;
    if dx.abs() != 2 || !(dy == fwd || (occ.is_king() && dy == -fwd)) {
        return false;
    }
    match mv.captured_square() {
        Ok(mid) => pos.occupant(mid).side() == Some(pos.turn.opponent()),
        Err(_) => false,
    }
}

/// All candidate moves of one piece: forward steps and jumps, then backward
/// ones for a king.
fn piece_moves(pos: &Position, from: Coord, out: &mut Vec<Move>) {
    let occ = pos.occupant(from);
    let Some(side) = occ.side() else { return };
    direction_steps(pos, from, side.forward(), out);
    direction_jumps(pos, from, side.forward(), out);
    if occ.is_king() {
        direction_steps(pos, from, -side.forward(), out);
        direction_jumps(pos, from, -side.forward(), out);
    }
}

/// All jumps of one piece, forward then backward for a king. This is the
/// candidate set for a forced continuation.
fn piece_jumps(pos: &Position, from: Coord, out: &mut Vec<Move>) {
    let occ = pos.occupant(from);
    let Some(side) = occ.side() else { return };
    direction_jumps(pos, from, side.forward(), out);
    if occ.is_king() {
        direction_jumps(pos, from, -side.forward(), out);
    }
}

fn direction_steps(pos: &Position, from: Coord, dy: i8, out: &mut Vec<Move>) {
    for dx in [-1, 1] {
        if let Some(end) = from.offset(dx, dy) {
            let mv = Move::new(from, end);
            if is_legal_step(pos, mv) {
                out.push(mv);
            }
        }
    }
}

fn direction_jumps(pos: &Position, from: Coord, dy: i8, out: &mut Vec<Move>) {
    for dx in [-2, 2] {
        if let Some(end) = from.offset(dx, dy * 2) {
            let mv = Move::new(from, end);
            if is_legal_jump(pos, mv) {
                out.push(mv);
            }
        }
    }
}

/// Apply a move after validating it against [`legal_moves`].
///
/// This is the entry point for interactive callers; the search uses
/// [`apply_move_unchecked`] on moves it has just generated.
pub fn apply_move(pos: &Position, mv: Move) -> Result<Position, GameError> {
    if !legal_moves(pos).contains(&mv) {
        return Err(GameError::IllegalMove(mv));
    }
    Ok(apply_move_unchecked(pos, mv))
}

/// Apply a move drawn from [`legal_moves`] without re-validating it.
///
/// The occupant slides from start to end, a man reaching its far row is
/// crowned, and on a jump the captured square is emptied. If the landed piece
/// (after crowning, so a fresh king may chain backward) can jump again, the
/// turn stays with the mover and the landing square becomes the forced
/// continuation; otherwise the turn passes.
pub fn apply_move_unchecked(pos: &Position, mv: Move) -> Position {
    let mut board = pos.board;
    let occ = board[mv.start.index()];
    board[mv.start.index()] = SquareOccupant::Empty;

    let occ = match occ {
        SquareOccupant::WhiteMan if mv.end.y() == Side::White.crowning_row() => {
            SquareOccupant::WhiteKing
        }
        SquareOccupant::BlackMan if mv.end.y() == Side::Black.crowning_row() => {
            SquareOccupant::BlackKing
        }
        other => other,
    };
    board[mv.end.index()] = occ;

    if !mv.is_jump() {
        return Position {
            board,
            turn: pos.turn.opponent(),
            jumping: None,
        };
    }

    if let Ok(mid) = mv.captured_square() {
        board[mid.index()] = SquareOccupant::Empty;
    }
    let next = Position {
        board,
        turn: pos.turn,
        jumping: None,
    };
    let mut chain = Vec::new();
    piece_jumps(&next, mv.end, &mut chain);
    if chain.is_empty() {
        Position {
            turn: pos.turn.opponent(),
            ..next
        }
    } else {
        Position {
            jumping: Some(mv.end),
            ..next
        }
    }
}

/// The winning side, once the opponent has no pieces left. A side with pieces
/// but no legal move is not treated as having lost.
pub fn winner(pos: &Position) -> Option<Side> {
    let mut white = 0;
    let mut black = 0;
    for occ in &pos.board {
        match occ.side() {
            Some(Side::White) => white += 1,
            Some(Side::Black) => black += 1,
            None => {}
        }
    }
    if black == 0 {
        Some(Side::White)
    } else if white == 0 {
        Some(Side::Black)
    } else {
        None
    }
}

impl fmt::Display for Position {
    /// Render the board with Black's back row (rank 1) at the top and file
    /// letters along the bottom, matching square notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..BOARD_DIM {
            write!(f, "{} ", y + 1)?;
            for x in 0..BOARD_DIM {
                match Coord::new(x, y) {
                    Ok(c) => write!(f, "{} ", self.occupant(c).symbol())?,
                    Err(_) => write!(f, "  ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
