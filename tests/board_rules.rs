//! Integration tests for the board rules: alternation, captures, suicide,
//! ko, and the purity of the legality probe.

use gosolve::board::{Cell, Color, GoBoard, IllegalMove, parse_coord};

/// Play a sequence of coordinates alternately, starting with Black.
fn setup_position(size: usize, moves: &[&str]) -> GoBoard {
    let mut board = GoBoard::new(size);
    for name in moves {
        let pt = parse_coord(name, size).unwrap_or_else(|| panic!("bad coordinate {name}"));
        let to_play = board.to_play();
        board
            .play(pt, to_play)
            .unwrap_or_else(|e| panic!("illegal setup move {name}: {e}"));
    }
    board
}

/// Set up a classic single-stone ko on a 4x4 board.
///
/// Black walls in the white stone at B2, White builds the matching wall
/// around C2, then Black captures at C2 leaving the recapture forbidden.
/// Position after the capture (rows 4 down to 1):
///
/// ```text
/// . . . .
/// . X O .
/// X . X O
/// X X O .
/// ```
fn setup_ko() -> GoBoard {
    setup_position(
        4,
        &["A2", "B2", "B3", "C3", "B1", "C1", "A1", "D2", "C2"],
    )
}

#[test]
fn current_player_alternates_strictly() {
    let mut board = GoBoard::new(4);
    let mut expected = Color::Black;
    for name in ["A1", "B2", "C3", "D4", "A3", "C1"] {
        assert_eq!(board.to_play(), expected);
        let pt = parse_coord(name, 4).unwrap();
        board.play(pt, expected).unwrap();
        expected = expected.opponent();
    }
    assert_eq!(board.moves().len(), 6);
}

#[test]
fn capture_empties_every_removed_point() {
    let board = setup_ko();
    // The white stone at B2 was captured by the final black move at C2
    let b2 = parse_coord("B2", 4).unwrap();
    assert_eq!(board.get_color(b2), Cell::Empty);
    let c2 = parse_coord("C2", 4).unwrap();
    assert_eq!(board.get_color(c2), Cell::Black);
}

#[test]
fn ko_recapture_rejected_while_other_moves_remain() {
    let mut board = setup_ko();
    let b2 = parse_coord("B2", 4).unwrap();
    assert_eq!(board.ko_point(), Some(b2));
    // Immediate recapture is the one forbidden move
    assert_eq!(board.play(b2, Color::White), Err(IllegalMove::Ko));
    // Any other legal point is still playable, and playing it lifts the ko
    let d4 = parse_coord("D4", 4).unwrap();
    board.play(d4, Color::White).unwrap();
    assert_eq!(board.ko_point(), None);
}

#[test]
fn capture_without_enemy_eye_sets_no_ko() {
    // Black captures a lone white corner stone whose point was not an eye
    let board = setup_position(3, &["B1", "A1", "A2"]);
    assert_eq!(board.get_color(parse_coord("A1", 3).unwrap()), Cell::Empty);
    assert_eq!(board.ko_point(), None);
}

#[test]
fn suicide_rejected_and_board_restored() {
    let mut board = setup_position(4, &["B1", "D4", "A2"]);
    // White at A1 has no liberty and captures nothing
    let a1 = parse_coord("A1", 4).unwrap();
    assert_eq!(board.play(a1, Color::White), Err(IllegalMove::Suicide));
    assert_eq!(board.get_color(a1), Cell::Empty);
    assert_eq!(board.to_play(), Color::White);
    assert_eq!(board.moves().len(), 3);
}

#[test]
fn committed_stone_always_has_a_liberty() {
    // After any successful play the mover's block has at least one liberty
    let mut board = GoBoard::new(4);
    for name in ["B2", "B3", "C2", "C3", "A2", "A3"] {
        let pt = parse_coord(name, 4).unwrap();
        let to_play = board.to_play();
        if board.play(pt, to_play).is_ok() {
            let block = board.block_of(pt);
            assert!(
                board.find_liberty(&block).is_some(),
                "block of {name} left without liberties"
            );
        }
    }
}

#[test]
fn legality_probe_is_pure() {
    let mut board = setup_position(4, &["B2", "B3", "C3", "C2", "A3"]);
    let snapshot: Vec<Cell> = board.points().iter().map(|&p| board.get_color(p)).collect();
    let player = board.to_play();
    let ko = board.ko_point();
    let history = board.moves().len();
    for p in board.points().to_vec() {
        board.is_legal(p, Color::Black);
        board.is_legal(p, Color::White);
    }
    let after: Vec<Cell> = board.points().iter().map(|&p| board.get_color(p)).collect();
    assert_eq!(snapshot, after, "probe left a trace on the board");
    assert_eq!(board.to_play(), player);
    assert_eq!(board.ko_point(), ko);
    assert_eq!(board.moves().len(), history);
}

#[test]
fn probe_and_commit_disagree_only_on_captures() {
    // The probe rejects capturing candidates (the search plays a no-capture
    // game); the committing path resolves the same capture.
    let mut board = setup_position(3, &["B1", "A1"]);
    let a2 = parse_coord("A2", 3).unwrap();
    assert!(!board.is_legal(a2, Color::Black));
    assert!(board.play(a2, Color::Black).is_ok());
    assert_eq!(board.get_color(parse_coord("A1", 3).unwrap()), Cell::Empty);
}
