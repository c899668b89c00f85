//! Host-facing game: one board, a fixed mark assignment, and turn order.
//!
//! The host applies the human move, asks the engine for a reply, applies it,
//! and acts on the returned outcome. Rendering, pacing and notification stay
//! with the host.

use super::action::{GameError, Move};
use super::contracts::{Contract, MoveContract};
use super::minimax::{Minimax, ScoredMove};
use super::{Board, Coordinate, GameOutcome, MarkAssignment, OutcomeReport, Player, Side};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Which side opens each game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstTurn {
    /// The human always opens.
    Human,
    /// The engine always opens.
    Automated,
    /// The opening side swaps after every game.
    #[default]
    Alternate,
}

impl FirstTurn {
    /// Side that opens the game after one opened by `previous`.
    pub fn next_opener(self, previous: Side) -> Side {
        match self {
            FirstTurn::Human => Side::Human,
            FirstTurn::Automated => Side::Automated,
            FirstTurn::Alternate => previous.other(),
        }
    }
}

/// A single game between a human and the engine.
#[derive(Debug, Clone)]
pub struct Game {
    pub(super) board: Board,
    pub(super) marks: MarkAssignment,
    pub(super) opener: Side,
    pub(super) to_move: Side,
    pub(super) first_turn: FirstTurn,
    pub(super) history: Vec<Move>,
}

impl Game {
    /// Starts a game on an empty `dimension`×`dimension` board with the human to move.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if the marks are identical
    /// or the dimension is zero or above [`MAX_DIMENSION`](super::MAX_DIMENSION).
    #[instrument]
    pub fn new_game(dimension: usize, player_mark: Player, automated_mark: Player) -> Result<Self, GameError> {
        let marks = MarkAssignment::new(player_mark, automated_mark)?;
        Self::with_opener(dimension, marks, Side::Human, FirstTurn::Human)
    }

    /// Starts a game with an explicit opener and opening policy for later games.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if the dimension is zero or
    /// above [`MAX_DIMENSION`](super::MAX_DIMENSION).
    #[instrument]
    pub fn with_opener(
        dimension: usize,
        marks: MarkAssignment,
        opener: Side,
        first_turn: FirstTurn,
    ) -> Result<Self, GameError> {
        let board = Board::try_new(dimension)?;

        info!(dimension, human = %marks.human(), automated = %marks.automated(), %opener, "Starting game");
        Ok(Self {
            board,
            marks,
            opener,
            to_move: opener,
            first_turn,
            history: Vec::new(),
        })
    }

    /// Places the human mark at `(x, y)` and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidCoordinate` / `GameError::CellOccupied` for illegal cells.
    /// - `GameError::NotYourTurn` while the engine is to move.
    /// - `GameError::GameOver` once the game has ended.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, x: usize, y: usize) -> Result<GameOutcome, GameError> {
        self.apply(Side::Human, Coordinate::new(x, y))
    }

    /// Runs the search and returns where the engine would play.
    ///
    /// Returns `None` when the board has no open cells. The board is unchanged.
    #[instrument(skip(self))]
    pub fn choose_automated_move(&mut self) -> Option<Coordinate> {
        self.search().map(|best| best.coordinate)
    }

    /// Like [`Game::choose_automated_move`] but keeps the score.
    pub fn search(&mut self) -> Option<ScoredMove> {
        Minimax::new(self.marks).search(&mut self.board)
    }

    /// Places the automated mark at `(x, y)` and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Game::apply_human_move`], with the roles swapped.
    #[instrument(skip(self))]
    pub fn apply_automated_move(&mut self, x: usize, y: usize) -> Result<GameOutcome, GameError> {
        self.apply(Side::Automated, Coordinate::new(x, y))
    }

    /// Chooses and applies the engine's move.
    ///
    /// Returns `Ok(None)` if no cell is open.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NotYourTurn` or `GameError::GameOver` as for
    /// [`Game::apply_automated_move`].
    #[instrument(skip(self))]
    pub fn play_automated_turn(&mut self) -> Result<Option<(Coordinate, GameOutcome)>, GameError> {
        self.check_turn(Side::Automated)?;
        match self.choose_automated_move() {
            Some(at) => {
                let outcome = self.apply(Side::Automated, at)?;
                Ok(Some((at, outcome)))
            }
            None => Ok(None),
        }
    }

    /// Current outcome, recomputed from the board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.winner()
    }

    /// Returns true once a line is complete or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Terminal report for the host, or `None` while the game is ongoing.
    pub fn report(&self) -> Option<OutcomeReport> {
        OutcomeReport::from_outcome(self.outcome(), &self.marks)
    }

    /// Clears the board for a new game; the opener follows the opening policy.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let opener = self.first_turn.next_opener(self.opener);
        info!(%opener, "Restarting game");
        self.board = Board::new(self.board.dimension());
        self.history.clear();
        self.opener = opener;
        self.to_move = opener;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark assignment.
    pub fn marks(&self) -> &MarkAssignment {
        &self.marks
    }

    /// Returns the side that opened this game.
    pub fn opener(&self) -> Side {
        self.opener
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    fn check_turn(&self, side: Side) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if self.to_move != side {
            return Err(GameError::NotYourTurn(self.marks.mark_of(side)));
        }
        Ok(())
    }

    fn apply(&mut self, side: Side, at: Coordinate) -> Result<GameOutcome, GameError> {
        let action = Move::new(self.marks.mark_of(side), at);
        MoveContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.place(action.coordinate, action.player);
        self.history.push(action);
        self.to_move = side.other();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        let outcome = self.outcome();
        debug!(%action, %outcome, "Move applied");
        Ok(outcome)
    }
}
