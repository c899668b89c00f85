//! History consistency invariant: one recorded move per marked cell.

use super::super::{Game, Player};
use super::Invariant;

/// Invariant: Each side's move count equals its marks on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let recorded = game.history().iter().filter(|m| m.player == player).count();
            recorded == game.board().count(player)
        })
    }

    fn description() -> &'static str {
        "Recorded moves match the marks on the board"
    }
}
