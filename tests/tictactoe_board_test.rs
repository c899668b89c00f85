//! Tests for board state and terminal detection.

use tictactoe_ai::{Board, Coordinate, GameOutcome, Player};

fn board(notation: &str) -> Board {
    notation.parse().expect("valid board notation")
}

#[test]
fn test_every_line_is_detected() {
    let lines = [
        "XXX/.../...",
        ".../XXX/...",
        ".../.../XXX",
        "X../X../X..",
        ".X./.X./.X.",
        "..X/..X/..X",
        "X../.X./..X",
        "..X/.X./X..",
    ];
    for notation in lines {
        assert_eq!(board(notation).winner(), GameOutcome::Won(Player::X), "{}", notation);
        let flipped = notation.replace('X', "O");
        assert_eq!(board(&flipped).winner(), GameOutcome::Won(Player::O), "{}", flipped);
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    assert_eq!(board("XOX/XOO/OXX").winner(), GameOutcome::Tie);
    assert_eq!(board("OXO/OXX/XOO").winner(), GameOutcome::Tie);
}

#[test]
fn test_full_board_with_line_reports_win() {
    // Last move completed the anti-diagonal and filled the board
    assert_eq!(board("XOO/XOX/OXX").winner(), GameOutcome::Won(Player::O));
}

#[test]
fn test_open_board_without_line_is_ongoing() {
    assert_eq!(board("XO./.X./O..").winner(), GameOutcome::Ongoing);
    assert_eq!(Board::new(3).winner(), GameOutcome::Ongoing);
}

#[test]
fn test_open_cells_is_restartable() {
    let board = board("X.O/.X./...");
    let first: Vec<Coordinate> = board.open_cells().collect();
    let second: Vec<Coordinate> = board.open_cells().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]), "row-major order");
}

#[test]
fn test_occupied_cell_rejected_board_unchanged() {
    let mut board = board("X../.../...");
    let before = board.clone();
    let result = board.try_place(Coordinate::new(0, 0), Player::O);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("occupied"));
    assert_eq!(board, before);
}

#[test]
fn test_larger_board_uses_full_lines() {
    let mut board = Board::new(4);
    for y in 0..3 {
        board.place(Coordinate::new(3, y), Player::X);
    }
    assert_eq!(board.winner(), GameOutcome::Ongoing);
    board.place(Coordinate::new(3, 3), Player::X);
    assert_eq!(board.winner(), GameOutcome::Won(Player::X));
}
