//! Go board representation and move execution.
//!
//! This module provides the core game logic:
//! - Board state as a 1D array with a border ring
//! - Connected-block discovery and liberty counting
//! - Legality probing and committed play with capture resolution
//! - Single-stone ko tracking
//!
//! The board is runtime-sized. Points are flat indices with row stride
//! `size + 1`: `point = row * (size + 1) + 1 + col` for 1-indexed row and
//! col. Index 0 and the border ring are never playable, which lets index 0
//! double as the pass sentinel.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::constants::{MAXSIZE, MIN_SIZE, NULL_POINT, PASS};

/// A point on the board, represented as an index into the 1D board array.
pub type Point = usize;

/// Contents of one cell of the padded grid.
///
/// Discriminants double as the base-3 digits of the position key
/// (border cells are never encoded).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    White = 2,
    Border = 3,
}

/// Stone color / side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(Color::Black),
            "w" | "white" => Ok(Color::White),
            other => Err(format!("unknown color: {other}")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Result of attempting to commit a move.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    /// Point is not empty
    #[error("illegal move: point not empty")]
    Occupied,
    /// Move retakes a single-stone ko
    #[error("illegal move: retakes ko")]
    Ko,
    /// Move would leave its own block without liberties
    #[error("illegal move: suicide")]
    Suicide,
}

/// A Go board of runtime size with a one-cell border ring.
pub struct GoBoard {
    size: usize,
    ns: usize,
    board: Vec<Cell>,
    /// On-board orthogonal neighbors per point, precomputed at reset.
    neighbors: Vec<Vec<Point>>,
    /// Playable points in index order, precomputed at reset.
    points: Vec<Point>,
    /// Last known liberty per stone; a stale entry is revalidated before use.
    liberty_of: Vec<Point>,
    current_player: Color,
    ko_recapture: Option<Point>,
    moves: Vec<Point>,
}

impl GoBoard {
    /// Create an empty board of the given dimension.
    ///
    /// # Panics
    /// If `size` is outside `MIN_SIZE..=MAXSIZE`.
    pub fn new(size: usize) -> Self {
        let mut board = GoBoard {
            size: 0,
            ns: 0,
            board: Vec::new(),
            neighbors: Vec::new(),
            points: Vec::new(),
            liberty_of: Vec::new(),
            current_player: Color::Black,
            ko_recapture: None,
            moves: Vec::new(),
        };
        board.reset(size);
        board
    }

    /// Reinitialize to an empty board of the given dimension.
    ///
    /// Rebuilds the grid, the neighbor lists, and the playable-point list;
    /// clears history and ko; Black moves first.
    ///
    /// # Panics
    /// If `size` is outside `MIN_SIZE..=MAXSIZE`.
    pub fn reset(&mut self, size: usize) {
        assert!(
            (MIN_SIZE..=MAXSIZE).contains(&size),
            "unsupported board size {size}"
        );
        self.size = size;
        self.ns = size + 1;
        // One border row above, shared border columns between rows, and
        // enough tail for the last row's south and diagonal neighbors.
        let maxpoint = self.ns * (self.ns + 1) + 2;
        self.board = vec![Cell::Border; maxpoint];
        for row in 1..=size {
            let start = self.row_start(row);
            for p in start..start + size {
                self.board[p] = Cell::Empty;
            }
        }
        self.neighbors = (0..maxpoint)
            .map(|p| {
                if self.board[p] == Cell::Border {
                    Vec::new()
                } else {
                    self.on_board_neighbors(p)
                }
            })
            .collect();
        self.points = (0..maxpoint)
            .filter(|&p| self.board[p] != Cell::Border)
            .collect();
        self.liberty_of = vec![NULL_POINT; maxpoint];
        self.current_player = Color::Black;
        self.ko_recapture = None;
        self.moves.clear();
    }

    fn row_start(&self, row: usize) -> Point {
        debug_assert!(row >= 1 && row <= self.size);
        row * self.ns + 2
    }

    fn on_board_neighbors(&self, point: Point) -> Vec<Point> {
        [point - 1, point + 1, point - self.ns, point + self.ns]
            .into_iter()
            .filter(|&nb| self.board[nb] != Cell::Border)
            .collect()
    }

    // -- Accessors --

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get_color(&self, point: Point) -> Cell {
        self.board[point]
    }

    pub fn to_play(&self) -> Color {
        self.current_player
    }

    pub fn ko_point(&self) -> Option<Point> {
        self.ko_recapture
    }

    /// Committed moves, in play order.
    pub fn moves(&self) -> &[Point] {
        &self.moves
    }

    /// Flat index of the (row, col) intersection, both 1-indexed.
    ///
    /// # Panics
    /// If row or col is outside `1..=size`.
    pub fn pt(&self, row: usize, col: usize) -> Point {
        assert!(row >= 1 && row <= self.size, "row {row} off board");
        assert!(col >= 1 && col <= self.size, "col {col} off board");
        row * self.ns + 1 + col
    }

    /// Inverse of [`pt`](Self::pt): (row, col) of a playable point.
    pub fn coord(&self, point: Point) -> (usize, usize) {
        debug_assert!(self.board[point] != Cell::Border);
        ((point - 1) / self.ns, (point - 1) % self.ns)
    }

    /// On-board orthogonal neighbors of a point (empty for border points).
    pub fn neighbors_of(&self, point: Point) -> &[Point] {
        &self.neighbors[point]
    }

    /// The four diagonal neighbors; may include border cells.
    pub fn diag_neighbors(&self, point: Point) -> [Point; 4] {
        [
            point - self.ns - 1,
            point - self.ns + 1,
            point + self.ns - 1,
            point + self.ns + 1,
        ]
    }

    /// All playable points in index order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The currently empty points, in index order.
    pub fn empty_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .copied()
            .filter(|&p| self.board[p] == Cell::Empty)
            .collect()
    }

    /// The single stone on the board, if exactly one has been placed.
    pub fn lone_stone(&self) -> Option<Point> {
        let mut stones = self
            .points
            .iter()
            .copied()
            .filter(|&p| self.board[p] != Cell::Empty);
        match (stones.next(), stones.next()) {
            (Some(p), None) => Some(p),
            _ => None,
        }
    }

    /// Winner under the last-mover-wins terminal rule: when the side to move
    /// is stuck, the player who made the last move has won.
    pub fn winner(&self) -> Color {
        self.current_player.opponent()
    }

    // -- Position setup (test positions, problems) --

    /// Place a stone without legality checking or capture resolution.
    ///
    /// # Panics
    /// If the point is not an empty playable point.
    pub fn setup_stone(&mut self, point: Point, color: Color) {
        assert!(
            self.board[point] == Cell::Empty,
            "setup_stone requires an empty point"
        );
        self.board[point] = color.cell();
        self.liberty_of[point] = NULL_POINT;
    }

    pub fn set_to_play(&mut self, color: Color) {
        self.current_player = color;
    }

    // -- Group and liberty engine --

    /// All stones connected to `stone` through same-colored neighbors.
    ///
    /// # Panics
    /// If `stone` does not hold a black or white stone.
    pub fn block_of(&self, stone: Point) -> Vec<Point> {
        let color = self.board[stone];
        assert!(
            color == Cell::Black || color == Cell::White,
            "block_of requires a stone"
        );
        let mut marker = vec![false; self.board.len()];
        let mut block = vec![stone];
        let mut stack = vec![stone];
        marker[stone] = true;
        while let Some(p) = stack.pop() {
            for &nb in &self.neighbors[p] {
                if self.board[nb] == color && !marker[nb] {
                    marker[nb] = true;
                    block.push(nb);
                    stack.push(nb);
                }
            }
        }
        block
    }

    /// True iff `point` has an immediately adjacent empty point.
    pub fn stone_has_liberty(&self, point: Point) -> bool {
        self.find_neighbor_of_color(point, Cell::Empty).is_some()
    }

    fn find_neighbor_of_color(&self, point: Point, color: Cell) -> Option<Point> {
        self.neighbors[point]
            .iter()
            .copied()
            .find(|&nb| self.board[nb] == color)
    }

    /// Some liberty of the block, or None if it has none.
    pub fn find_liberty(&self, block: &[Point]) -> Option<Point> {
        block
            .iter()
            .find_map(|&stone| self.find_neighbor_of_color(stone, Cell::Empty))
    }

    /// True iff the block has any liberty; refreshes the liberty hints of
    /// every stone in the block on success.
    pub fn has_liberty(&mut self, block: &[Point]) -> bool {
        match self.find_liberty(block) {
            Some(lib) => {
                for &stone in block {
                    self.liberty_of[stone] = lib;
                }
                true
            }
            None => false,
        }
    }

    /// Cheap pre-check before a full block scan: trust a recorded liberty if
    /// it is still empty, otherwise look at the stone's own neighbors.
    fn fast_liberty_check(&self, stone: Point) -> bool {
        let lib = self.liberty_of[stone];
        if lib != NULL_POINT && self.board[lib] == Cell::Empty {
            return true;
        }
        self.stone_has_liberty(stone)
    }

    /// Non-destructive capture probe: is the block on `stone` out of
    /// liberties? Used by the legality path, which must not mutate.
    pub fn detect_capture(&self, stone: Point) -> bool {
        if self.fast_liberty_check(stone) {
            return false;
        }
        self.find_liberty(&self.block_of(stone)).is_none()
    }

    /// Committing capture path: if the block on `stone` has no liberty,
    /// remove it and return the removed points.
    fn remove_block_if_dead(&mut self, stone: Point) -> Option<Vec<Point>> {
        if self.fast_liberty_check(stone) {
            return None;
        }
        let block = self.block_of(stone);
        if self.has_liberty(&block) {
            return None;
        }
        for &p in &block {
            self.board[p] = Cell::Empty;
        }
        Some(block)
    }

    // -- Surroundedness and eyes --

    /// True iff every on-board neighbor of the empty point holds `color`.
    pub fn is_surrounded(&self, point: Point, color: Color) -> bool {
        self.neighbors[point]
            .iter()
            .all(|&nb| self.board[nb] == color.cell())
    }

    /// Simple eye test: surrounded orthogonally by `color`, with at most one
    /// opponent diagonal in the center and none at the edge.
    pub fn is_eye(&self, point: Point, color: Color) -> bool {
        if !self.is_surrounded(point, color) {
            return false;
        }
        let opp = color.opponent().cell();
        let mut false_count = 0;
        let mut at_edge = 0;
        for d in self.diag_neighbors(point) {
            if self.board[d] == Cell::Border {
                at_edge = 1;
            } else if self.board[d] == opp {
                false_count += 1;
            }
        }
        false_count + at_edge <= 1
    }

    // -- Legality and play --

    /// Check whether `color` may play on `point`, without committing.
    ///
    /// The point is tentatively occupied and restored before every return,
    /// so the board is bit-identical afterwards. A move that would capture
    /// an opponent block is reported as illegal: the search plays a
    /// no-capture game, which is what keeps its one-cell undo sound.
    pub fn is_legal(&mut self, point: Point, color: Color) -> bool {
        if point == PASS {
            return false;
        }
        if self.board[point] != Cell::Empty {
            return false;
        }
        let opp = color.opponent();
        self.board[point] = color.cell();
        for i in 0..self.neighbors[point].len() {
            let nb = self.neighbors[point][i];
            if self.board[nb] == opp.cell() && self.detect_capture(nb) {
                self.board[point] = Cell::Empty;
                return false;
            }
        }
        if !self.stone_has_liberty(point) {
            let block = self.block_of(point);
            if self.find_liberty(&block).is_none() {
                self.board[point] = Cell::Empty;
                return false;
            }
        }
        self.board[point] = Cell::Empty;
        true
    }

    /// Commit a move of `color` on `point`.
    ///
    /// Resolves captures (removing dead opponent blocks), rejects suicide,
    /// tracks the single-stone ko point, appends to history, and flips the
    /// player to move. On failure the board is unchanged.
    ///
    /// # Panics
    /// If `point` is the pass sentinel or not a board index.
    pub fn play(&mut self, point: Point, color: Color) -> Result<(), IllegalMove> {
        assert!(
            point != PASS && point < self.board.len(),
            "play requires a board point"
        );
        if self.board[point] != Cell::Empty {
            return Err(IllegalMove::Occupied);
        }
        if self.ko_recapture == Some(point) {
            return Err(IllegalMove::Ko);
        }
        let opp = color.opponent();
        let in_enemy_eye = self.is_surrounded(point, opp);
        self.board[point] = color.cell();
        // A recycled capture point may carry a stale liberty hint
        self.liberty_of[point] = NULL_POINT;
        let mut single_captures = Vec::new();
        for i in 0..self.neighbors[point].len() {
            let nb = self.neighbors[point][i];
            if self.board[nb] == opp.cell() {
                if let Some(captured) = self.remove_block_if_dead(nb) {
                    if captured.len() == 1 {
                        single_captures.push(captured[0]);
                    }
                }
            }
        }
        if !self.stone_has_liberty(point) {
            let block = self.block_of(point);
            if self.find_liberty(&block).is_none() {
                self.board[point] = Cell::Empty;
                return Err(IllegalMove::Suicide);
            }
        }
        self.moves.push(point);
        self.ko_recapture = if in_enemy_eye && single_captures.len() == 1 {
            Some(single_captures[0])
        } else {
            None
        };
        self.current_player = opp;
        Ok(())
    }

    // -- Search support --

    /// Place a stone and flip the player, with no capture resolution.
    ///
    /// Only sound for moves that passed [`is_legal`](Self::is_legal), which
    /// never capture; paired with [`trial_undo`](Self::trial_undo).
    pub(crate) fn trial_play(&mut self, point: Point, color: Color) {
        debug_assert!(self.board[point] == Cell::Empty);
        self.board[point] = color.cell();
        self.liberty_of[point] = NULL_POINT;
        self.current_player = color.opponent();
    }

    /// Undo a [`trial_play`](Self::trial_play): empty the point, restore the
    /// player to move.
    pub(crate) fn trial_undo(&mut self, point: Point, color: Color) {
        debug_assert!(self.board[point] == color.cell());
        self.board[point] = Cell::Empty;
        self.current_player = color;
    }
}

impl fmt::Display for GoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            for col in 1..=self.size {
                let ch = match self.board[self.pt(row, col)] {
                    Cell::Black => 'X',
                    Cell::White => 'O',
                    _ => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse a coordinate string (e.g. "C2", "pass") for a board of `size`.
///
/// Columns use letters A.. skipping I, rows count from 1 at the bottom.
/// Returns `Some(PASS)` for "pass", None for anything unparsable or off
/// the board.
pub fn parse_coord(s: &str, size: usize) -> Option<Point> {
    if s.eq_ignore_ascii_case("pass") {
        return Some(PASS);
    }
    let bytes = s.as_bytes();
    if bytes.len() < 2 || !bytes[0].is_ascii_alphabetic() {
        return None;
    }
    let col_char = bytes[0].to_ascii_uppercase();
    let mut col = (col_char - b'A' + 1) as usize;
    // Skip the I column (Go convention, avoids confusion with J)
    if col_char > b'I' {
        col -= 1;
    }
    let row: usize = s[1..].parse().ok()?;
    if row < 1 || row > size || col < 1 || col > size {
        return None;
    }
    Some(row * (size + 1) + 1 + col)
}

/// Convert a point back to a coordinate string (e.g. "C2").
///
/// Returns "pass" for the pass sentinel.
pub fn str_coord(point: Point, size: usize) -> String {
    if point == PASS {
        return "pass".into();
    }
    let ns = size + 1;
    let row = (point - 1) / ns;
    let col = (point - 1) % ns;
    let mut c = (b'@' + col as u8) as char;
    if c >= 'I' {
        c = (c as u8 + 1) as char;
    }
    format!("{c}{row}")
}
