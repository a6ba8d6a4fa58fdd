//! Position encoding and the transposition cache.
//!
//! A position is keyed by a base-3 number with one digit per playable point,
//! taken in index order: empty = 0, black = 1, white = 2. The key is a pure
//! function of the cell contents; ko state and move history are deliberately
//! not encoded. Keys for a fixed size are injective, and an 8x8 board (the
//! supported maximum) still fits a u128.
//!
//! The cache itself is a plain map from key to win/loss for the side to
//! move. Entries are never evicted; a fresh cache is created per top-level
//! solve so results never leak between independent searches.

use std::collections::HashMap;

use crate::board::GoBoard;

/// Compact integer identity of a board configuration.
pub type PositionKey = u128;

/// Encode the full board contents into a position key.
pub fn encode(board: &GoBoard) -> PositionKey {
    let mut key: PositionKey = 0;
    let mut weight: PositionKey = 1;
    for &p in board.points() {
        key += board.get_color(p) as PositionKey * weight;
        weight *= 3;
    }
    key
}

/// Memo table mapping position keys to search verdicts.
#[derive(Default)]
pub struct TranspositionTable {
    entries: HashMap<PositionKey, bool>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Previously stored verdict for the key, if any.
    pub fn lookup(&self, key: PositionKey) -> Option<bool> {
        self.entries.get(&key).copied()
    }

    pub fn store(&mut self, key: PositionKey, result: bool) {
        self.entries.insert(key, result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
