//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search engine and the host share one definition
//! of a terminal position.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;

use super::{Board, GameOutcome};

/// Evaluates the board.
///
/// Completed lines take priority over the full-board scan, so a full
/// board containing a line reports the win rather than a tie.
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(player) = check_winner(board) {
        return GameOutcome::Won(player);
    }
    if is_full(board) {
        GameOutcome::Tie
    } else {
        GameOutcome::Ongoing
    }
}
