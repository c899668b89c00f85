//! Core domain types for tic-tac-toe.

use super::action::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A cell address on an N×N board.
///
/// `x` is the outer (row) index and `y` the inner (column) index, so
/// row-major order means ascending `x`, then ascending `y`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({x}, {y})")]
pub struct Coordinate {
    /// Row index.
    pub x: usize,
    /// Column index.
    pub y: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Result of evaluating a board.
///
/// Derived from the board on demand, never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameOutcome {
    /// Open cells remain and no line is complete.
    #[display("Ongoing")]
    Ongoing,
    /// A player completed a line.
    #[display("Player {_0} wins")]
    Won(Player),
    /// The board is full with no completed line.
    #[display("Tie")]
    Tie,
}

impl GameOutcome {
    /// Returns true for a win or a tie.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won(player) => Some(*player),
            _ => None,
        }
    }
}

/// Which participant a mark belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human participant.
    Human,
    /// The engine-controlled participant.
    Automated,
}

impl Side {
    /// Returns the other side.
    pub fn other(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

/// The two marks reserved for one game.
///
/// The automated mark is always the maximizer from the search's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkAssignment {
    human: Player,
    automated: Player,
}

impl MarkAssignment {
    /// Creates an assignment, rejecting identical marks.
    ///
    /// # Errors
    ///
    /// Returns `GameError::InvalidConfiguration` if both sides share a mark.
    #[instrument]
    pub fn new(human: Player, automated: Player) -> Result<Self, GameError> {
        if human == automated {
            return Err(GameError::InvalidConfiguration(format!(
                "human and automated participants both use mark {}",
                human
            )));
        }
        Ok(Self { human, automated })
    }

    /// Assignment where the automated side takes the human's opponent mark.
    pub fn against(human: Player) -> Self {
        Self {
            human,
            automated: human.opponent(),
        }
    }

    /// Returns the human mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// Returns the automated mark.
    pub fn automated(&self) -> Player {
        self.automated
    }

    /// Returns the mark played by the given side.
    pub fn mark_of(&self, side: Side) -> Player {
        match side {
            Side::Human => self.human,
            Side::Automated => self.automated,
        }
    }

    /// Returns the side playing the given mark.
    pub fn side_of(&self, mark: Player) -> Side {
        if mark == self.automated {
            Side::Automated
        } else {
            Side::Human
        }
    }
}

/// Terminal signal handed to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum OutcomeReport {
    /// Board filled with no completed line.
    Tie,
    /// The engine completed a line.
    AutomatedWin,
    /// The human completed a line.
    PlayerWin,
}

impl OutcomeReport {
    /// Maps a terminal outcome to a report. Returns `None` while the game is ongoing.
    pub fn from_outcome(outcome: GameOutcome, marks: &MarkAssignment) -> Option<Self> {
        match outcome {
            GameOutcome::Ongoing => None,
            GameOutcome::Tie => Some(OutcomeReport::Tie),
            GameOutcome::Won(player) => Some(match marks.side_of(player) {
                Side::Automated => OutcomeReport::AutomatedWin,
                Side::Human => OutcomeReport::PlayerWin,
            }),
        }
    }

    /// Integer code used by hosts that signal outcomes numerically.
    ///
    /// `-1` tie, `1` automated win, `2` player win.
    pub fn code(self) -> i32 {
        match self {
            OutcomeReport::Tie => -1,
            OutcomeReport::AutomatedWin => 1,
            OutcomeReport::PlayerWin => 2,
        }
    }
}
