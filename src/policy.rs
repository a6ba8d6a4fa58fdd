//! Move-sampling policy and playout simulation.
//!
//! The solver treats move sampling as an opaque oracle: give it a board and
//! a color, get back a currently-legal point or `None` for "no move". This
//! module provides the implementations (uniform random sampling and a
//! pattern-weighted variant) plus a playout loop that runs a whole random
//! game under the last-mover-wins rule.

use crate::board::{Color, GoBoard, Point};
use crate::constants::max_playout_len;
use crate::patterns::pat3_match;

/// The sampling contract consumed by playout-style callers: a currently
/// legal point for the color, or `None` when the color has no move to offer.
pub type MovePolicy = fn(&mut GoBoard, Color) -> Option<Point>;

/// Every legal move for `color`, in index order.
pub fn legal_moves(board: &mut GoBoard, color: Color) -> Vec<Point> {
    let ko = board.ko_point();
    board
        .empty_points()
        .into_iter()
        .filter(|&p| Some(p) != ko && board.is_legal(p, color))
        .collect()
}

/// Legal moves that are worth sampling: filling one's own eye is never
/// useful in a playout.
fn candidate_moves(board: &mut GoBoard, color: Color) -> Vec<Point> {
    legal_moves(board, color)
        .into_iter()
        .filter(|&p| !board.is_eye(p, color))
        .collect()
}

/// Uniformly random sampling policy.
pub fn random_move(board: &mut GoBoard, color: Color) -> Option<Point> {
    let moves = candidate_moves(board, color);
    if moves.is_empty() {
        None
    } else {
        Some(moves[fastrand::usize(..moves.len())])
    }
}

/// Legal non-eye moves whose 3x3 neighborhood matches a known shape.
pub fn pattern_moves(board: &mut GoBoard, color: Color) -> Vec<Point> {
    let moves = candidate_moves(board, color);
    moves
        .into_iter()
        .filter(|&p| pat3_match(board, p, color))
        .collect()
}

/// Pattern-weighted sampling policy: prefer a random shape match, fall back
/// to uniform sampling.
pub fn policy_move(board: &mut GoBoard, color: Color) -> Option<Point> {
    let pats = pattern_moves(board, color);
    if !pats.is_empty() {
        return Some(pats[fastrand::usize(..pats.len())]);
    }
    random_move(board, color)
}

/// Play out the game with the given policy until the mover is stuck (or the
/// move cap is reached) and report the winner under the last-mover rule.
pub fn simulate(board: &mut GoBoard, policy: MovePolicy) -> Color {
    let limit = max_playout_len(board.size());
    for _ in 0..limit {
        let color = board.to_play();
        let Some(mv) = policy(board, color) else {
            break;
        };
        if board.play(mv, color).is_err() {
            break;
        }
    }
    board.winner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_moves_are_legal() {
        let mut board = GoBoard::new(5);
        for _ in 0..20 {
            let color = board.to_play();
            let Some(mv) = random_move(&mut board, color) else {
                break;
            };
            assert!(board.is_legal(mv, color));
            board.play(mv, color).unwrap();
        }
    }

    #[test]
    fn no_move_on_full_board() {
        let mut board = GoBoard::new(2);
        board.setup_stone(board.pt(1, 1), Color::Black);
        board.setup_stone(board.pt(1, 2), Color::Black);
        board.setup_stone(board.pt(2, 1), Color::Black);
        board.set_to_play(Color::White);
        // The only empty point would capture, which the probe rejects
        assert_eq!(random_move(&mut board, Color::White), None);
        assert_eq!(policy_move(&mut board, Color::White), None);
    }

    #[test]
    fn playout_terminates_with_a_winner() {
        let mut board = GoBoard::new(5);
        let winner = simulate(&mut board, random_move);
        assert!(!board.moves().is_empty());
        assert_eq!(winner, board.winner());
    }

    #[test]
    fn pattern_policy_yields_legal_moves() {
        let mut board = GoBoard::new(5);
        board.play(board.pt(3, 3), Color::Black).unwrap();
        board.play(board.pt(3, 4), Color::White).unwrap();
        let color = board.to_play();
        if let Some(mv) = policy_move(&mut board, color) {
            assert!(board.is_legal(mv, color));
        }
    }
}
