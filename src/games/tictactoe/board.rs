//! N×N board storage and terminal-state queries.

use super::action::GameError;
use super::rules;
use super::{Coordinate, GameOutcome, Player, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Default board dimension.
pub const DEFAULT_DIMENSION: usize = 3;

/// Largest dimension a game or parsed board accepts.
pub const MAX_DIMENSION: usize = 64;

/// Square N×N tic-tac-toe board.
///
/// The dimension is fixed for the lifetime of the board. Cells are stored
/// in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    /// Side length.
    dimension: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board of the given dimension.
    ///
    /// The dimension must be within `1..=MAX_DIMENSION`; use
    /// [`Board::try_new`] for untrusted sizes.
    #[instrument]
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            squares: vec![Square::Empty; dimension * dimension],
        }
    }

    /// Creates a new empty board after checking the dimension.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if the dimension is zero or
    /// larger than [`MAX_DIMENSION`].
    pub fn try_new(dimension: usize) -> Result<Self, GameError> {
        check_dimension(dimension)?;
        Ok(Self::new(dimension))
    }

    /// Returns the side length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.dimension.max(1))
    }

    /// Checks whether a coordinate lies on the board.
    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < self.dimension && at.y < self.dimension
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, at: Coordinate) -> Option<Square> {
        self.contains(at).then(|| self.squares[self.index(at)])
    }

    /// Checks if a square is empty. Out-of-bounds coordinates are never empty.
    pub fn is_empty(&self, at: Coordinate) -> bool {
        matches!(self.get(at), Some(Square::Empty))
    }

    /// Places a mark on an empty cell.
    ///
    /// The coordinate must be on the board and the cell must be empty; use
    /// [`Board::try_place`] when either is in doubt.
    pub fn place(&mut self, at: Coordinate, mark: Player) {
        debug_assert!(self.is_empty(at), "place on unavailable cell {}", at);
        let index = self.index(at);
        self.squares[index] = Square::Occupied(mark);
    }

    /// Resets a cell to empty.
    pub fn clear(&mut self, at: Coordinate) {
        let index = self.index(at);
        self.squares[index] = Square::Empty;
    }

    /// Places a mark after checking bounds and emptiness.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidCoordinate` if the coordinate is off the board.
    /// - `GameError::CellOccupied` if the cell already holds a mark; the board is left unchanged.
    #[instrument(skip(self), fields(dimension = self.dimension))]
    pub fn try_place(&mut self, at: Coordinate, mark: Player) -> Result<(), GameError> {
        self.check_bounds(at)?;
        if !self.is_empty(at) {
            return Err(GameError::CellOccupied(at));
        }
        self.place(at, mark);
        Ok(())
    }

    /// Returns an error if the coordinate is off the board.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidCoordinate` for out-of-bounds coordinates.
    pub fn check_bounds(&self, at: Coordinate) -> Result<(), GameError> {
        if self.contains(at) {
            Ok(())
        } else {
            Err(GameError::InvalidCoordinate {
                x: at.x,
                y: at.y,
                dimension: self.dimension,
            })
        }
    }

    /// Lazily yields every empty coordinate in row-major order.
    ///
    /// Recomputed on each call.
    pub fn open_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let dimension = self.dimension;
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(move |(index, _)| Coordinate::new(index / dimension, index % dimension))
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Evaluates the board: a completed line wins, otherwise a full board ties.
    pub fn winner(&self) -> GameOutcome {
        rules::outcome(self)
    }

    /// Number of squares occupied by the given player.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// Compact one-line notation, rows separated by `/`.
    pub fn notation(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|square| symbol(*square)).collect::<String>())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Square at `(x, y)` without a bounds check beyond slice indexing.
    pub(crate) fn square(&self, x: usize, y: usize) -> Square {
        self.squares[x * self.dimension + y]
    }

    fn index(&self, at: Coordinate) -> usize {
        at.x * self.dimension + at.y
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION)
    }
}

fn check_dimension(dimension: usize) -> Result<(), GameError> {
    if (1..=MAX_DIMENSION).contains(&dimension) {
        Ok(())
    } else {
        Err(GameError::InvalidConfiguration(format!(
            "board dimension must be between 1 and {}, got {}",
            MAX_DIMENSION, dimension
        )))
    }
}

/// Unchecked wire shape of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    dimension: usize,
    squares: Vec<Square>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        check_dimension(repr.dimension)
            .map_err(|err| GameError::InvalidBoard(err.to_string()))?;
        let expected = repr.dimension * repr.dimension;
        if repr.squares.len() != expected {
            return Err(GameError::InvalidBoard(format!(
                "{} squares for a {}x{} board, expected {}",
                repr.squares.len(),
                repr.dimension,
                repr.dimension,
                expected
            )));
        }
        Ok(Self {
            dimension: repr.dimension,
            squares: repr.squares,
        })
    }
}

fn symbol(square: Square) -> char {
    match square {
        Square::Empty => '.',
        Square::Occupied(Player::X) => 'X',
        Square::Occupied(Player::O) => 'O',
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let separator = vec!["-"; self.dimension].join("+");
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
                writeln!(f, "{}", separator)?;
            }
            let cells = row
                .iter()
                .map(|square| symbol(*square).to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", cells)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses rows separated by `/` or newlines.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace is ignored. The result must be square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect::<Vec<_>>();

        let dimension = rows.len();
        if dimension == 0 {
            return Err(GameError::InvalidBoard("no rows".to_string()));
        }
        if dimension > MAX_DIMENSION {
            return Err(GameError::InvalidBoard(format!(
                "{} rows, at most {} allowed",
                dimension, MAX_DIMENSION
            )));
        }

        let mut squares = Vec::with_capacity(dimension * dimension);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(GameError::InvalidBoard(format!(
                    "row {} has {} cells, expected {}",
                    index,
                    row.len(),
                    dimension
                )));
            }
            for c in row {
                squares.push(match c {
                    'X' | 'x' => Square::Occupied(Player::X),
                    'O' | 'o' => Square::Occupied(Player::O),
                    '.' | '_' | '-' => Square::Empty,
                    other => {
                        return Err(GameError::InvalidBoard(format!(
                            "unexpected character '{}'",
                            other
                        )));
                    }
                });
            }
        }

        Ok(Self { dimension, squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(3);
        assert_eq!(board.open_cells().count(), 9);
        assert_eq!(board.winner(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_open_cells_row_major() {
        let board: Board = "X../.O./...".parse().unwrap();
        let open: Vec<_> = board.open_cells().collect();
        assert_eq!(open[0], Coordinate::new(0, 1));
        assert_eq!(open[1], Coordinate::new(0, 2));
        assert_eq!(open[2], Coordinate::new(1, 0));
        assert_eq!(open.len(), 7);
    }

    #[test]
    fn test_place_then_clear_restores() {
        let mut board = Board::new(3);
        let before = board.clone();
        board.place(Coordinate::new(2, 1), Player::O);
        assert_eq!(board.get(Coordinate::new(2, 1)), Some(Square::Occupied(Player::O)));
        board.clear(Coordinate::new(2, 1));
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_place_out_of_bounds() {
        let mut board = Board::new(3);
        let result = board.try_place(Coordinate::new(3, 0), Player::X);
        assert!(matches!(
            result,
            Err(GameError::InvalidCoordinate { x: 3, y: 0, dimension: 3 })
        ));
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!(matches!(
            "XO/O/..".parse::<Board>(),
            Err(GameError::InvalidBoard(_))
        ));
        assert!(matches!("".parse::<Board>(), Err(GameError::InvalidBoard(_))));
        assert!(matches!("XZ./.../...".parse::<Board>(), Err(GameError::InvalidBoard(_))));
    }

    #[test]
    fn test_try_new_bounds_dimension() {
        assert!(Board::try_new(1).is_ok());
        assert!(Board::try_new(MAX_DIMENSION).is_ok());
        assert!(matches!(Board::try_new(0), Err(GameError::InvalidConfiguration(_))));
        assert!(matches!(
            Board::try_new(usize::MAX),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_deserialize_rejects_mismatched_squares() {
        let result = serde_json::from_str::<Board>(r#"{"dimension":3,"squares":[]}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Board>(r#"{"dimension":0,"squares":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_preserves_board() {
        let board: Board = "XO./.X./O..".parse().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.winner(), GameOutcome::Ongoing);
        assert_eq!(restored, board);
    }

    #[test]
    fn test_notation_round_trip() {
        let board: Board = "XO./_X_/O-.".parse().unwrap();
        assert_eq!(board.notation(), "XO./.X./O..");
        assert_eq!(board.notation().parse::<Board>().unwrap(), board);
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "XO./.X./...".parse().unwrap();
        assert_eq!(board.to_string(), "X|O|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.");
    }
}
