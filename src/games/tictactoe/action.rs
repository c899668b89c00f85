//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! a participant's intent and can be validated independently of execution.

use super::{Coordinate, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{player} -> {coordinate}")]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell where the player places their mark.
    pub coordinate: Coordinate,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coordinate: Coordinate) -> Self {
        Self { player, coordinate }
    }
}

/// Error that can occur when configuring a game or applying a move.
///
/// Every variant is a caller-contract violation. None are recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The coordinate lies outside the board.
    #[display("Coordinate ({}, {}) is outside a {}x{} board", x, y, dimension, dimension)]
    InvalidCoordinate {
        /// Row index supplied.
        x: usize,
        /// Column index supplied.
        y: usize,
        /// Board dimension.
        dimension: usize,
    },

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Coordinate),

    /// The game setup is unusable.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(#[error(not(source))] String),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The given player is not the side to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Player),

    /// Board notation could not be parsed.
    #[display("Invalid board: {}", _0)]
    InvalidBoard(#[error(not(source))] String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}
