//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must only ever fill
/// empty cells and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new(game.board().dimension());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.coordinate) {
                return false;
            }
            reconstructed.place(mov.coordinate, mov.player);
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
