//! Exhaustive win/loss search.
//!
//! A depth-first boolean negamax over all legal moves: the side to move wins
//! iff some child position is a loss for the opponent. Positions are
//! memoized in a transposition cache keyed by board contents, and the whole
//! search runs against a wall-clock deadline. Running out of time is not an
//! error: it degrades into a conservative "loss" answer with the
//! `timed_out` flag raised so callers can tell a proof from a guess.
//!
//! The board is mutated in place: each candidate move is placed, searched,
//! and removed again before the next sibling is tried. Search moves go
//! through the no-capture legality probe, so undoing one never has to
//! restore more than a single cell.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Color, GoBoard, Point};
use crate::cache::{TranspositionTable, encode};

/// Outcome of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveResult {
    /// Can the asked color force a win from this position?
    pub win: bool,
    /// True if the deadline cut the search short; the verdict is then a
    /// conservative guess, not a proof.
    pub timed_out: bool,
    /// Winning first move for the side to move, when it has one.
    pub winning_move: Option<Point>,
    /// Nodes visited.
    pub nodes: u64,
}

struct Search {
    tt: TranspositionTable,
    deadline: Instant,
    winning_move: Option<Point>,
    timed_out: bool,
    nodes: u64,
}

impl Search {
    fn new(deadline: Instant) -> Self {
        Search {
            tt: TranspositionTable::new(),
            deadline,
            winning_move: None,
            timed_out: false,
            nodes: 0,
        }
    }

    /// Does the side to move win? Checked once per node, a deadline overrun
    /// is bounded by one node's legality scan.
    fn negamax(&mut self, board: &mut GoBoard) -> bool {
        self.nodes += 1;
        if Instant::now() > self.deadline {
            self.timed_out = true;
            return false;
        }
        let key = encode(board);
        if let Some(cached) = self.tt.lookup(key) {
            return cached;
        }
        let to_play = board.to_play();
        let mut have_move = false;
        for mv in board.empty_points() {
            if !board.is_legal(mv, to_play) {
                continue;
            }
            have_move = true;
            if self.search_move(board, mv, to_play) {
                self.winning_move = Some(mv);
                self.tt.store(key, true);
                return true;
            }
        }
        if !have_move {
            // Terminal: the last mover wins, so the stuck side loses
            let result = board.winner() == to_play;
            self.tt.store(key, result);
            return result;
        }
        self.tt.store(key, false);
        false
    }

    /// Same state machine with one preferred point tried first.
    fn negamax_single(&mut self, board: &mut GoBoard, candidate: Point) -> bool {
        self.nodes += 1;
        if Instant::now() > self.deadline {
            self.timed_out = true;
            return false;
        }
        let key = encode(board);
        if let Some(cached) = self.tt.lookup(key) {
            return cached;
        }
        let to_play = board.to_play();
        let mut have_move = false;
        if board.is_legal(candidate, to_play) {
            have_move = true;
            if self.search_move(board, candidate, to_play) {
                self.winning_move = Some(candidate);
                self.tt.store(key, true);
                return true;
            }
        }
        for mv in board.empty_points() {
            if mv == candidate || !board.is_legal(mv, to_play) {
                continue;
            }
            have_move = true;
            if self.search_move(board, mv, to_play) {
                self.winning_move = Some(mv);
                self.tt.store(key, true);
                return true;
            }
        }
        if !have_move {
            let result = board.winner() == to_play;
            self.tt.store(key, result);
            return result;
        }
        self.tt.store(key, false);
        false
    }

    /// Try one move: apply, search the reply, undo. The undo runs on every
    /// path, including when the reply proves this move wins.
    fn search_move(&mut self, board: &mut GoBoard, mv: Point, to_play: Color) -> bool {
        board.trial_play(mv, to_play);
        let opponent_wins = self.negamax(board);
        board.trial_undo(mv, to_play);
        !opponent_wins
    }
}

/// Solve the position for `color` within the given time budget.
///
/// When the board holds exactly one stone, the search is biased toward the
/// mirror image of that stone as its first candidate.
pub fn solve(board: &mut GoBoard, color: Color, budget: Duration) -> SolveResult {
    let candidate = board.lone_stone().map(|p| mirror_of(board, p));
    solve_inner(board, color, budget, candidate)
}

/// Solve the position for `color`, trying `candidate` before the generic
/// move enumeration.
pub fn solve_with_candidate(
    board: &mut GoBoard,
    color: Color,
    budget: Duration,
    candidate: Point,
) -> SolveResult {
    solve_inner(board, color, budget, Some(candidate))
}

fn solve_inner(
    board: &mut GoBoard,
    color: Color,
    budget: Duration,
    candidate: Option<Point>,
) -> SolveResult {
    let start = Instant::now();
    let mut search = Search::new(start + budget);
    debug!(size = board.size(), %color, ?budget, ?candidate, "solve start");
    let win_for_to_play = match candidate {
        Some(c) => search.negamax_single(board, c),
        None => search.negamax(board),
    };
    let win = win_for_to_play == (color == board.to_play());
    let result = SolveResult {
        win,
        timed_out: search.timed_out,
        // The last write before the root returns true is the root's own;
        // anything recorded on a losing search is a stale inner move.
        winning_move: if win_for_to_play {
            search.winning_move
        } else {
            None
        },
        nodes: search.nodes,
    };
    debug!(
        win = result.win,
        timed_out = result.timed_out,
        nodes = result.nodes,
        cached = search.tt.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "solve done"
    );
    result
}

/// The point diagonally opposite `point` through the board center.
pub fn mirror_of(board: &GoBoard, point: Point) -> Point {
    let (row, col) = board.coord(point);
    let size = board.size();
    board.pt(size + 1 - row, size + 1 - col)
}
