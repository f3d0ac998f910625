//! Interactive console front-end.
//!
//! A thin loop over the engine's request/response surface: render the board,
//! read the human (White) move in square notation, validate it against the
//! legal-move list, and answer with a searched move for Black. Multi-jump
//! chains need no special handling here, since the turn only passes once a
//! capture chain is exhausted.
//!
//! ## Example session
//!
//! ```text
//! engine plays c3 -> d4
//! your move (e.g. "d6 c5", or "quit"): d6 c5
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::constants::N_SIMS;
use crate::coord::parse_square;
use crate::mcts::mc_search;
use crate::moves::Move;
use crate::position::{Position, Side, apply_move, legal_moves, winner};

/// State of a human-vs-engine console game. The human plays White, the
/// engine plays Black.
pub struct ConsoleGame {
    pos: Position,
    n_sims: u32,
}

impl Default for ConsoleGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleGame {
    /// A fresh game from the standard starting position.
    pub fn new() -> ConsoleGame {
        Self::with_simulations(N_SIMS)
    }

    /// A fresh game with a custom playout budget per engine move.
    pub fn with_simulations(n_sims: u32) -> ConsoleGame {
        ConsoleGame {
            pos: Position::initial(),
            n_sims,
        }
    }

    /// Run the game loop until the game ends or the human quits.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            println!("\n{}\n", self.pos);

            if let Some(side) = winner(&self.pos) {
                println!("{side} wins");
                return Ok(());
            }
            let moves = legal_moves(&self.pos);
            if moves.is_empty() {
                println!("{} has no legal moves", self.pos.turn());
                return Ok(());
            }

            match self.pos.turn() {
                Side::Black => {
                    println!("thinking...");
                    let Some(mv) = mc_search(&self.pos, self.n_sims) else {
                        println!("{} has no legal moves", self.pos.turn());
                        return Ok(());
                    };
                    println!("engine plays {mv}");
                    self.pos = apply_move(&self.pos, mv).context("engine move rejected")?;
                }
                Side::White => {
                    print!("your move (e.g. \"d6 c5\", or \"quit\"): ");
                    io::stdout().flush()?;
                    let Some(line) = lines.next() else {
                        return Ok(());
                    };
                    let line = line?;
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    if input.eq_ignore_ascii_case("quit") {
                        return Ok(());
                    }
                    let Some(mv) = parse_move_input(input) else {
                        println!("could not read that; enter two squares like \"d6 c5\"");
                        continue;
                    };
                    match apply_move(&self.pos, mv) {
                        Ok(next) => self.pos = next,
                        Err(err) => {
                            println!("{err}");
                            print_legal_moves(&moves);
                        }
                    }
                }
            }
        }
    }
}

/// Parse a move typed as two squares, separated by whitespace or a dash.
pub fn parse_move_input(input: &str) -> Option<Move> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == '-').filter(|p| !p.is_empty());
    let start = parse_square(parts.next()?)?;
    let end = parse_square(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(Move::new(start, end))
}

fn print_legal_moves(moves: &[Move]) {
    let list: Vec<String> = moves.iter().map(Move::to_string).collect();
    println!("legal moves: {}", list.join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;

    fn coord(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn test_parse_move_input() {
        let expected = Move::new(coord(3, 5), coord(2, 4));
        assert_eq!(parse_move_input("d6 c5"), Some(expected));
        assert_eq!(parse_move_input("d6-c5"), Some(expected));
        assert_eq!(parse_move_input("  d6   c5 "), Some(expected));
    }

    #[test]
    fn test_parse_move_input_rejects_malformed() {
        assert_eq!(parse_move_input(""), None);
        assert_eq!(parse_move_input("d6"), None);
        assert_eq!(parse_move_input("d6 c5 b4"), None);
        assert_eq!(parse_move_input("d9 c5"), None);
        assert_eq!(parse_move_input("e6 c5"), None); // light square
    }
}
