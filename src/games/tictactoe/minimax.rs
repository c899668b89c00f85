//! Exhaustive minimax search for the automated participant.
//!
//! The search explores every legal continuation to a terminal position.
//! Hypothetical moves are played directly on the caller's board and undone
//! before the next candidate, so the board is unchanged when a call returns.

use super::{Board, Coordinate, GameOutcome, MarkAssignment, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Score of a position from the automated participant's point of view.
pub type Score = i32;

/// Terminal score: automated participant completed a line.
pub const WIN: Score = 1;
/// Terminal score: human participant completed a line.
pub const LOSS: Score = -1;
/// Terminal score: full board, no line.
pub const TIE: Score = 0;

/// A candidate move with its guaranteed score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Where to play.
    pub coordinate: Coordinate,
    /// Score assuming optimal replies.
    pub score: Score,
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions evaluated, terminal or not.
    pub nodes: u64,
}

/// Minimax search engine.
///
/// Scores carry no depth discount: a win in one move and a win in five
/// score the same, and ties between candidates go to the row-major
/// earliest cell.
#[derive(Debug, Clone)]
pub struct Minimax {
    marks: MarkAssignment,
    stats: SearchStats,
}

impl Minimax {
    /// Creates an engine playing `marks.automated()` against `marks.human()`.
    pub fn new(marks: MarkAssignment) -> Self {
        Self {
            marks,
            stats: SearchStats::default(),
        }
    }

    /// Returns the mark assignment this engine searches for.
    pub fn marks(&self) -> &MarkAssignment {
        &self.marks
    }

    /// Returns counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks the automated participant's move.
    ///
    /// Returns `None` when the board has no open cells.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<Coordinate> {
        self.search(board).map(|best| best.coordinate)
    }

    /// Scores every open cell for the automated participant and returns the best.
    ///
    /// Candidates are tried in row-major order and replaced only by a strictly
    /// higher score.
    #[instrument(skip(self, board), fields(automated = %self.marks.automated(), open = board.open_cells().count()))]
    pub fn search(&mut self, board: &mut Board) -> Option<ScoredMove> {
        self.stats = SearchStats::default();

        let candidates: Vec<Coordinate> = board.open_cells().collect();
        let mut best: Option<ScoredMove> = None;

        for at in candidates {
            board.place(at, self.marks.automated());
            let score = self.evaluate(board, false);
            board.clear(at);

            trace!(coordinate = %at, score, "Scored candidate");

            if best.is_none_or(|b| score > b.score) {
                best = Some(ScoredMove { coordinate: at, score });
            }
        }

        match &best {
            Some(chosen) => debug!(
                coordinate = %chosen.coordinate,
                score = chosen.score,
                nodes = self.stats.nodes,
                "Search complete"
            ),
            None => debug!("No open cells"),
        }

        best
    }

    /// Returns the guaranteed score of `board` with the given side to move.
    ///
    /// `maximizing` means the automated participant moves next. Recursion
    /// stops only at terminal positions.
    pub fn evaluate(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.stats.nodes += 1;

        match board.winner() {
            GameOutcome::Won(player) => return self.terminal_score(player),
            GameOutcome::Tie => return TIE,
            GameOutcome::Ongoing => {}
        }

        let mark = if maximizing {
            self.marks.automated()
        } else {
            self.marks.human()
        };

        let candidates: Vec<Coordinate> = board.open_cells().collect();
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for at in candidates {
            board.place(at, mark);
            let score = self.evaluate(board, !maximizing);
            board.clear(at);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn terminal_score(&self, winner: Player) -> Score {
        if winner == self.marks.automated() {
            WIN
        } else {
            LOSS
        }
    }
}
