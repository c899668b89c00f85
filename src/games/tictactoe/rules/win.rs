//! Win detection logic for tic-tac-toe.
//!
//! A line is a full row, a full column, or one of the two main diagonals.
//! On a 3x3 board these are the usual eight lines.

use super::super::{Board, Player, Square};

/// Returns the player owning every cell of the line, if any.
fn line_owner(board: &Board, mut cells: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
    let (x, y) = cells.next()?;
    let Square::Occupied(player) = board.square(x, y) else {
        return None;
    };
    cells
        .all(|(x, y)| board.square(x, y) == Square::Occupied(player))
        .then_some(player)
}

/// Checks if there is a winner on the board.
///
/// Rows and columns are checked pairwise by index, then the main diagonal,
/// then the anti-diagonal. Returns `Some(player)` for the first completed
/// line found, `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.dimension();

    for i in 0..n {
        // Rows
        if let Some(player) = line_owner(board, (0..n).map(|y| (i, y))) {
            return Some(player);
        }

        // Columns
        if let Some(player) = line_owner(board, (0..n).map(|x| (x, i))) {
            return Some(player);
        }
    }

    // Diagonals
    line_owner(board, (0..n).map(|k| (k, k)))
        .or_else(|| line_owner(board, (0..n).map(|k| (k, n - 1 - k))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Coordinate;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/.O./.O.".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_every_column() {
        for column in 0..3 {
            let mut board = Board::new(3);
            for x in 0..3 {
                board.place(Coordinate::new(x, column), Player::O);
            }
            assert_eq!(check_winner(&board), Some(Player::O), "column {}", column);
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O../.O./..O".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "..X/.X./X..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_four_by_four_requires_full_line() {
        let three: Board = "XXX./..../..../....".parse().unwrap();
        assert_eq!(check_winner(&three), None);

        let four: Board = "O.../O.../O.../O...".parse().unwrap();
        assert_eq!(check_winner(&four), Some(Player::O));
    }
}
