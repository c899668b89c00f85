//! Tic-tac-toe engine with an exhaustive minimax opponent.
//!
//! # Architecture
//!
//! - **Board**: N×N grid, mutation and terminal-state queries
//! - **Minimax**: exhaustive adversarial search for the automated side
//! - **Game**: host-facing turn handling, contracts and outcome reports
//! - **GameConfig**: TOML configuration for a series of games
//!
//! # Example
//!
//! ```
//! use tictactoe_ai::{Game, GameOutcome, Player};
//!
//! # fn example() -> Result<(), tictactoe_ai::GameError> {
//! let mut game = Game::new_game(3, Player::X, Player::O)?;
//! assert_eq!(game.apply_human_move(1, 1)?, GameOutcome::Ongoing);
//!
//! if let Some(reply) = game.choose_automated_move() {
//!     game.apply_automated_move(reply.x, reply.y)?;
//! }
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game_config;
mod games;

// Crate-level exports - Configuration
pub use game_config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, CellIsEmpty, Contract, Coordinate, DEFAULT_DIMENSION, FirstTurn, Game, GameError,
    GameNotOver, GameOutcome, InBounds, LOSS, LegalMove, MAX_DIMENSION, Mark, MarkAssignment, Minimax,
    Move, MoveContract, OutcomeReport, Player, PlayersTurn, Score, ScoredMove, SearchStats,
    Side, Square, TIE, WIN, check_winner, invariants, is_draw, is_full, outcome,
};
