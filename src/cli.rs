//! Command-line interface for tictactoe_ai.

use clap::{Parser, Subcommand};
use tictactoe_ai::Player;

/// Tic-tac-toe engine with an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe_ai")]
#[command(about = "Tic-tac-toe engine with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the engine's move for a board, e.g. "XX./OO./..."
    Solve {
        /// Board rows separated by '/'; X and O are marks, '.', '_' or '-' are empty
        board: String,

        /// Mark the engine plays
        #[arg(short, long, default_value = "O")]
        automated: Player,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the outcome of a board
    Outcome {
        /// Board rows separated by '/'
        board: String,
    },

    /// Let the engine play both sides
    Selfplay {
        /// Path to a TOML game config (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: u32,
    },
}
