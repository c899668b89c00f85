//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{GameError, Move};
use super::game::Game;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvariantViolation` describing every broken invariant.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: No line is complete and an open cell remains.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `GameError::GameOver` on a terminal board.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.is_over() {
            Err(GameError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The move's coordinate lies on the board.
pub struct InBounds;

impl InBounds {
    /// Fails with `GameError::InvalidCoordinate` when off the board.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        game.board().check_bounds(mov.coordinate)
    }
}

/// Precondition: The cell at the move's coordinate must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `GameError::CellOccupied` when the cell holds a mark.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if !game.board().is_empty(mov.coordinate) {
            Err(GameError::CellOccupied(mov.coordinate))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `GameError::NotYourTurn` when the other side is to move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if mov.player != game.marks().mark_of(game.to_move()) {
            Err(GameError::NotYourTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game is live, the cell is on the board and
/// empty, and it is the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition, in the order listed above.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        GameNotOver::check(game)?;
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Postconditions:
/// - Board remains monotonic
/// - Sides still alternate
/// - History remains consistent with board
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), GameError> {
        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
