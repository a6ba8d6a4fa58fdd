//! 3x3 shape matching for move sampling.
//!
//! The shape set is the classic minimal Go pattern list (hane, cut, side
//! shapes). Each source pattern is a 9-character grid which gets expanded
//! over all rotations, reflections, color swaps, and wildcard fills into a
//! set of neighborhood codes; matching a point is then a single set probe.
//!
//! A neighborhood code packs the 8 cells around a point into a base-4
//! number from the mover's perspective: 0 = empty, 1 = own stone,
//! 2 = opponent stone, 3 = border.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::board::{Cell, Color, GoBoard, Point};

/// 3x3 pattern sources.
/// - `X`: the mover's stone, `O`: opponent, `.`: empty, `#`: border
/// - `x`: not the mover, `o`: not the opponent, `?`: anything
///
/// Row order: the row above the move point, the move point's own row,
/// the row below.
const PAT3_SRC: &[&str] = &[
    // hane - enclosing
    "XOX...???",
    // hane - non-cutting
    "XO....?.?",
    // hane - magari
    "XO?X..x.?",
    // generic diagonal attachment
    ".O.X.....",
    // cut1 (kiri) - unprotected cut
    "XO?O.o?o?",
    // cut1 (kiri) - peeped cut
    "XO?O.X???",
    // cut2 (de)
    "?X?O.Oooo",
    // cut keima
    "OX?o.O???",
    // side - chase
    "X.?O.?##?",
    // side - block cut
    "OX?X.O###",
    // side - block connection
    "?X?x.O###",
    // side - sagari
    "?XOx.x###",
    // side - cut
    "?OXX.O###",
];

static PAT3SET: OnceLock<HashSet<u16>> = OnceLock::new();

/// Does the 3x3 neighborhood of `point` match any pattern for `color` to
/// move? `point` itself is expected to be empty (the candidate move).
pub fn pat3_match(board: &GoBoard, point: Point, color: Color) -> bool {
    let set = PAT3SET.get_or_init(make_pat3set);
    set.contains(&neighborhood_code(board, point, color))
}

/// Base-4 code of the 8 cells surrounding `point`, from the perspective of
/// `color` to move. One digit per cell, the center contributes nothing.
pub fn neighborhood_code(board: &GoBoard, point: Point, color: Color) -> u16 {
    let ns = board.size() as isize + 1;
    let offsets: [isize; 9] = [
        ns - 1,
        ns,
        ns + 1,
        -1,
        0,
        1,
        -ns - 1,
        -ns,
        -ns + 1,
    ];
    let mut code: u32 = 0;
    let mut weight: u32 = 1;
    for (d, &off) in offsets.iter().enumerate() {
        if d == 4 {
            continue;
        }
        let cell = board.get_color((point as isize + off) as usize);
        let digit = match cell {
            Cell::Empty => 0,
            Cell::Border => 3,
            c if c == color.cell() => 1,
            _ => 2,
        };
        code += digit * weight;
        weight *= 4;
    }
    code as u16
}

/// Expand every source pattern over all symmetries into the code set.
fn make_pat3set() -> HashSet<u16> {
    let mut set = HashSet::new();
    for src in PAT3_SRC {
        let grid: [u8; 9] = src.as_bytes().try_into().unwrap();
        enumerate_rotations(&grid, &mut set);
    }
    set
}

fn enumerate_rotations(src: &[u8; 9], set: &mut HashSet<u16>) {
    let mut src = *src;
    enumerate_vertical(&src, set);
    rot90(&mut src);
    enumerate_vertical(&src, set);
}

fn enumerate_vertical(src: &[u8; 9], set: &mut HashSet<u16>) {
    let mut src = *src;
    enumerate_horizontal(&src, set);
    vertflip(&mut src);
    enumerate_horizontal(&src, set);
}

fn enumerate_horizontal(src: &[u8; 9], set: &mut HashSet<u16>) {
    let mut src = *src;
    enumerate_colors(&src, set);
    horizflip(&mut src);
    enumerate_colors(&src, set);
}

fn enumerate_colors(src: &[u8; 9], set: &mut HashSet<u16>) {
    let mut src = *src;
    expand_wildcards(&src, 0, set);
    swapcolor(&mut src);
    expand_wildcards(&src, 0, set);
}

/// Expand wildcards into concrete cells and record each resulting code.
fn expand_wildcards(src: &[u8; 9], i: usize, set: &mut HashSet<u16>) {
    if i == 9 {
        set.insert(grid_code(src));
        return;
    }
    let choices: &[u8] = match src[i] {
        b'?' => b"XO.#",
        b'x' => b"O.#",
        b'o' => b"X.#",
        _ => {
            expand_wildcards(src, i + 1, set);
            return;
        }
    };
    for &c in choices {
        let mut next = *src;
        next[i] = c;
        expand_wildcards(&next, i + 1, set);
    }
}

/// Code of a fully concrete 3x3 grid, same digit layout as
/// [`neighborhood_code`].
fn grid_code(src: &[u8; 9]) -> u16 {
    let mut code: u32 = 0;
    let mut weight: u32 = 1;
    for (d, &c) in src.iter().enumerate() {
        if d == 4 {
            continue;
        }
        let digit = match c {
            b'.' => 0,
            b'X' => 1,
            b'O' => 2,
            b'#' => 3,
            other => unreachable!("wildcard {other} left unexpanded"),
        };
        code += digit * weight;
        weight *= 4;
    }
    code as u16
}

fn swapcolor(src: &mut [u8; 9]) {
    for c in src.iter_mut() {
        *c = match *c {
            b'X' => b'O',
            b'O' => b'X',
            b'x' => b'o',
            b'o' => b'x',
            other => other,
        };
    }
}

fn horizflip(src: &mut [u8; 9]) {
    src.swap(0, 6);
    src.swap(1, 7);
    src.swap(2, 8);
}

fn vertflip(src: &mut [u8; 9]) {
    src.swap(0, 2);
    src.swap(3, 5);
    src.swap(6, 8);
}

fn rot90(src: &mut [u8; 9]) {
    let t = src[0];
    src[0] = src[2];
    src[2] = src[8];
    src[8] = src[6];
    src[6] = t;

    let t = src[1];
    src[1] = src[5];
    src[5] = src[7];
    src[7] = src[3];
    src[3] = t;
}
