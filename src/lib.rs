//! Gosolve: an exhaustive win/loss solver for small Go boards.
//!
//! The board is a padded 1D grid with full capture, suicide, and
//! single-stone ko handling; the solver is a boolean negamax over all legal
//! moves, memoized through a position-keyed transposition cache and bounded
//! by a wall-clock deadline. Under the simplified terminal rule the player
//! who made the last move wins.
//!
//! ## Modules
//!
//! - [`constants`] - Size limits and sentinel values
//! - [`board`] - Board state, blocks, liberties, legality, play
//! - [`cache`] - Position encoding and the transposition table
//! - [`solver`] - Boolean negamax search with a time budget
//! - [`patterns`] - 3x3 shape matching
//! - [`policy`] - Move sampling and playout simulation
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use gosolve::board::{Color, GoBoard};
//! use gosolve::solver::solve;
//!
//! let mut board = GoBoard::new(3);
//! let result = solve(&mut board, Color::Black, Duration::from_secs(30));
//! assert!(!result.timed_out);
//! println!("black wins: {}", result.win);
//! ```

pub mod board;
pub mod cache;
pub mod constants;
pub mod patterns;
pub mod policy;
pub mod solver;
