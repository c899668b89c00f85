//! Alternating turn invariant: the two sides take turns, opener first.

use super::super::Game;
use super::Invariant;

/// Invariant: Sides alternate turns.
///
/// The first recorded move belongs to the opener, consecutive moves never
/// share a mark, and the side to move matches the parity of the history.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let opener_mark = game.marks().mark_of(game.opener());

        if let Some(first) = history.first()
            && first.player != opener_mark
        {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let expected = if history.len() % 2 == 0 {
            game.opener()
        } else {
            game.opener().other()
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Sides alternate turns, starting with the opener"
    }
}
