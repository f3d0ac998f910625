//! Search integration tests.
//!
//! The playouts are random, so these tests pin the RNG seed and use positions
//! whose outcome statistics are lopsided enough that the selection cannot
//! flip.

use checkers_rust::coord::Coord;
use checkers_rust::mcts::{choose_move, mc_search};
use checkers_rust::moves::Move;
use checkers_rust::position::{
    Position, Side, SquareOccupant, apply_move, legal_moves, winner,
};

fn coord(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

fn mv(sx: u8, sy: u8, ex: u8, ey: u8) -> Move {
    Move::new(coord(sx, sy), coord(ex, ey))
}

// =============================================================================
// Move selection
// =============================================================================

#[test]
fn test_search_prefers_the_winning_chain() {
    fastrand::seed(5);

    // Black to move has two jumps. c3 -> e5 forces a chain that sweeps both
    // white men and wins on the spot, so every playout through it is a Black
    // win. c5 -> e7 trades into a lost exchange and an uncertain endgame, so
    // its ratio stays below 1.
    let pos = Position::from_pieces(
        Side::Black,
        &[
            (coord(2, 2), SquareOccupant::BlackMan),
            (coord(2, 4), SquareOccupant::BlackMan),
            (coord(3, 3), SquareOccupant::WhiteMan),
            (coord(3, 5), SquareOccupant::WhiteMan),
        ],
    );
    assert_eq!(legal_moves(&pos), [mv(2, 2, 4, 4), mv(2, 4, 4, 6)]);

    let chosen = mc_search(&pos, 1000);
    assert_eq!(chosen, Some(mv(2, 2, 4, 4)));

    // And the chain really does win outright
    let mid = apply_move(&pos, mv(2, 2, 4, 4)).unwrap();
    assert_eq!(legal_moves(&mid), [mv(4, 4, 2, 6)]);
    let done = apply_move(&mid, mv(4, 4, 2, 6)).unwrap();
    assert_eq!(winner(&done), Some(Side::Black));
}

#[test]
fn test_choose_move_uses_the_fixed_budget() {
    fastrand::seed(17);
    let pos = Position::initial();
    let chosen = choose_move(&pos);
    let legal = legal_moves(&pos);
    assert!(chosen.is_some_and(|mv| legal.contains(&mv)));
}

#[test]
fn test_searched_moves_stay_legal_over_a_game() {
    fastrand::seed(9);
    let mut pos = Position::initial();
    for _ in 0..6 {
        if winner(&pos).is_some() || legal_moves(&pos).is_empty() {
            break;
        }
        let Some(mv) = mc_search(&pos, 150) else {
            break;
        };
        assert!(legal_moves(&pos).contains(&mv));
        pos = apply_move(&pos, mv).unwrap();
    }
}
