//! Tictactoe AI - command-line front end
//!
//! Solves positions and runs engine-versus-engine games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tictactoe_ai::{
    Board, Coordinate, GameConfig, GameOutcome, MarkAssignment, Minimax, Player, Side,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            board,
            automated,
            json,
        } => run_solve(&board, automated, json),
        Command::Outcome { board } => run_outcome(&board),
        Command::Selfplay { config, games } => run_selfplay(config, games),
    }
}

/// Engine answer for a single position.
#[derive(Debug, Serialize)]
struct SolveReport {
    board: String,
    automated: Player,
    outcome: GameOutcome,
    best_move: Option<Coordinate>,
    score: Option<i32>,
    nodes: u64,
}

/// Print the engine's move for a board
#[instrument]
fn run_solve(board: &str, automated: Player, json: bool) -> Result<()> {
    let mut board: Board = board.parse().context("Failed to parse board")?;
    let outcome = board.winner();

    let mut engine = Minimax::new(MarkAssignment::against(automated.opponent()));
    let best = if outcome.is_terminal() {
        None
    } else {
        engine.search(&mut board)
    };

    let report = SolveReport {
        board: board.notation(),
        automated,
        outcome,
        best_move: best.map(|b| b.coordinate),
        score: best.map(|b| b.score),
        nodes: engine.stats().nodes,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board);
    match best {
        Some(best) => println!("{} plays {} (score {})", automated, best.coordinate, best.score),
        None => println!("No move ({})", outcome),
    }
    Ok(())
}

/// Print the outcome of a board
#[instrument]
fn run_outcome(board: &str) -> Result<()> {
    let board: Board = board.parse().context("Failed to parse board")?;
    println!("{}", board.winner());
    Ok(())
}

/// Let the engine play both sides
#[instrument]
fn run_selfplay(config: Option<std::path::PathBuf>, games: u32) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)?,
        None => GameConfig::default(),
    };

    let mut game = config.start()?;
    // Plays the human's mark with the human's interests at heart
    let mut stand_in = Minimax::new(MarkAssignment::against(game.marks().automated()));

    for round in 1..=games {
        info!(round, opener = %game.opener(), "Starting self-play game");

        while !game.is_over() {
            match game.to_move() {
                Side::Automated => {
                    game.play_automated_turn()?;
                }
                Side::Human => {
                    let mut board = game.board().clone();
                    let Some(at) = stand_in.choose_move(&mut board) else {
                        bail!("Board has no open cells but the game is not over");
                    };
                    game.apply_human_move(at.x, at.y)?;
                }
            }
            debug!(board = %game.board().notation(), "Position");
        }

        println!("Game {} ({} opened)\n{}", round, game.opener(), game.board());
        if let Some(report) = game.report() {
            println!("Result: {} (code {})\n", report, report.code());
        }

        game.restart();
    }

    Ok(())
}
