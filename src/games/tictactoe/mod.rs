//! Tic-tac-toe: board, rules, minimax opponent and the host-facing game.

mod action;
mod board;
mod contracts;
mod game;
mod minimax;
mod rules;
mod types;

pub mod invariants;

pub use action::{GameError, Move};
pub use board::{Board, DEFAULT_DIMENSION, MAX_DIMENSION};
pub use contracts::{CellIsEmpty, Contract, GameNotOver, InBounds, LegalMove, MoveContract, PlayersTurn};
pub use game::{FirstTurn, Game};
pub use minimax::{LOSS, Minimax, Score, ScoredMove, SearchStats, TIE, WIN};
pub use rules::{check_winner, is_draw, is_full, outcome};
pub use types::{Coordinate, GameOutcome, MarkAssignment, OutcomeReport, Player, Side, Square};

/// Alias for clarity at the host boundary.
pub type Mark = Player;
