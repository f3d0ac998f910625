//! Flat Monte-Carlo search.
//!
//! The engine values positions by outcome frequency alone: from the root it
//! repeatedly walks a uniformly random path of legal moves to a terminal
//! position and records, at every node the walk passed through, whether the
//! game ended in a Black win. After a fixed number of playouts the root child
//! with the best observed win ratio is the chosen move.
//!
//! The tree is grown along the playout paths themselves. Each node owns its
//! children exclusively; a child list is built on first visit, one child per
//! legal move, and never rebuilt. Trees are throwaway, built fresh for every
//! decision.

use crate::constants::N_SIMS;
use crate::moves::Move;
use crate::position::{Position, Side, apply_move_unchecked, legal_moves, winner};

/// A node in the playout tree.
pub struct BoardNode {
    pos: Position,
    mv: Option<Move>,
    wins: u32,
    sims: u32,
    children: Option<Vec<BoardNode>>,
}

impl BoardNode {
    /// Wrap a position as a tree node. `mv` is the move that produced it, or
    /// `None` for the root.
    pub fn new(pos: Position, mv: Option<Move>) -> BoardNode {
        BoardNode {
            pos,
            mv,
            wins: 0,
            sims: 0,
            children: None,
        }
    }

    /// Playouts recorded at this node.
    pub fn simulations(&self) -> u32 {
        self.sims
    }

    /// Black wins observed here divided by playouts recorded here, or -0.1
    /// for an unvisited node.
    pub fn win_ratio(&self) -> f64 {
        if self.sims > 0 {
            self.wins as f64 / self.sims as f64
        } else {
            -0.1
        }
    }

    /// Run one random playout through this node. Returns whether it ended in
    /// a Black win.
    ///
    /// A terminal node reports its outcome directly. A node whose side to
    /// move has no legal move reports a non-Black-win; neither touches the
    /// counters, which track only playouts that recursed through this node.
    pub fn simulate(&mut self) -> bool {
        if let Some(side) = winner(&self.pos) {
            return side == Side::Black;
        }
        if self.children.is_none() {
            self.children = Some(self.expand());
        }
        let Some(children) = self.children.as_mut() else {
            return false;
        };
        if children.is_empty() {
            return false;
        }
        let pick = fastrand::usize(..children.len());
        let win = children[pick].simulate();
        if win {
            self.wins += 1;
        }
        self.sims += 1;
        win
    }

    fn expand(&self) -> Vec<BoardNode> {
        legal_moves(&self.pos)
            .into_iter()
            .map(|mv| BoardNode::new(apply_move_unchecked(&self.pos, mv), Some(mv)))
            .collect()
    }

    /// The child move with the best win ratio. Ties resolve to the later
    /// child in move-generation order.
    pub fn best_move(&self) -> Option<Move> {
        self.children
            .as_ref()?
            .iter()
            .max_by(|a, b| {
                a.win_ratio()
                    .partial_cmp(&b.win_ratio())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .and_then(|child| child.mv)
    }
}

/// Search `pos` with the given playout budget and return the best move for
/// Black, or `None` when the game is over or the side to move is stuck.
///
/// Statistics are counted from Black's perspective, so the selection is only
/// meaningful with Black to move; that is the side this engine plays.
pub fn mc_search(pos: &Position, playouts: u32) -> Option<Move> {
    if winner(pos).is_some() {
        return None;
    }
    let mut root = BoardNode::new(pos.clone(), None);
    while root.sims < playouts {
        root.simulate();
        // A stuck root records nothing; bail out instead of spinning.
        if root.children.as_ref().is_some_and(|c| c.is_empty()) {
            return None;
        }
    }
    root.best_move()
}

/// Search with the fixed playout budget.
pub fn choose_move(pos: &Position) -> Option<Move> {
    mc_search(pos, N_SIMS)
}

/// Print per-child statistics of a searched root to stderr.
pub fn dump_children(root: &BoardNode) {
    for child in root.children.iter().flatten() {
        if let Some(mv) = child.mv {
            eprintln!(
                "move {mv} wins={} sims={} ratio={:.3}",
                child.wins,
                child.sims,
                child.win_ratio()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::Coord;
    use crate::position::SquareOccupant;

    fn coord(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn test_terminal_root_has_no_move() {
        let won = Position::from_pieces(
            Side::White,
            &[(coord(2, 2), SquareOccupant::BlackMan)],
        );
        assert_eq!(mc_search(&won, 100), None);
    }

    #[test]
    fn test_stuck_root_has_no_move() {
        // The black man is boxed in: its only step is occupied and the jump
        // over it would leave the board.
        let stuck = Position::from_pieces(
            Side::Black,
            &[
                (coord(0, 6), SquareOccupant::BlackMan),
                (coord(1, 7), SquareOccupant::WhiteMan),
            ],
        );
        assert!(legal_moves(&stuck).is_empty());
        assert_eq!(mc_search(&stuck, 100), None);
    }

    #[test]
    fn test_forced_move_is_returned() {
        fastrand::seed(7);
        // Black's lone man has exactly one legal move.
        let pos = Position::from_pieces(
            Side::Black,
            &[
                (coord(0, 6), SquareOccupant::BlackMan),
                (coord(2, 6), SquareOccupant::WhiteMan),
                (coord(4, 0), SquareOccupant::WhiteMan),
            ],
        );
        let moves = legal_moves(&pos);
        assert_eq!(moves.len(), 1);
        assert_eq!(mc_search(&pos, 50), Some(moves[0]));
    }

    #[test]
    fn test_counters_accumulate_at_root() {
        fastrand::seed(11);
        let pos = Position::initial();
        let mut root = BoardNode::new(pos, None);
        for _ in 0..20 {
            root.simulate();
        }
        assert_eq!(root.simulations(), 20);
        assert!(root.wins <= 20);
        let total: u32 = root
            .children
            .iter()
            .flatten()
            .map(BoardNode::simulations)
            .sum();
        // Every root playout recursed into exactly one child.
        assert_eq!(total, 20);
    }
}
