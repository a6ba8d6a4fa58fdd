//! Board size limits and sentinel values.
//!
//! The board is a 1D array with a border ring; geometry that depends on the
//! runtime size (row stride, array length) lives on the board itself, so only
//! the fixed limits and sentinels are collected here.

/// Smallest supported board dimension.
pub const MIN_SIZE: usize = 2;

/// Largest supported board dimension.
///
/// The position key is a base-3 number with one digit per playable point;
/// 8x8 needs 3^64 as its highest weight, which still fits a u128 key.
pub const MAXSIZE: usize = 8;

/// Pass sentinel (index 0 is border, so it can never name a playable point).
pub const PASS: usize = 0;

/// Marker for "no liberty recorded" in the per-stone liberty hints.
pub const NULL_POINT: usize = usize::MAX;

/// Cap on playout length, in moves, for a given board dimension.
///
/// Three times the board area allows for captures and refills.
pub fn max_playout_len(size: usize) -> usize {
    size * size * 3
}
