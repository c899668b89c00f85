//! Tests for the host-facing game.

use std::io::Write;
use tictactoe_ai::{
    Coordinate, FirstTurn, Game, GameConfig, GameError, GameOutcome, MAX_DIMENSION, MarkAssignment,
    OutcomeReport, Player, Side,
};

fn game() -> Game {
    Game::new_game(3, Player::X, Player::O).expect("valid setup")
}

#[test]
fn test_new_game_rejects_shared_mark() {
    let result = Game::new_game(3, Player::O, Player::O);
    assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
}

#[test]
fn test_new_game_rejects_zero_dimension() {
    let result = Game::new_game(0, Player::X, Player::O);
    assert!(matches!(result, Err(GameError::InvalidConfiguration(_))));
}

#[test]
fn test_new_game_rejects_oversized_dimension() {
    for dimension in [MAX_DIMENSION + 1, usize::MAX / 2, usize::MAX] {
        let result = Game::new_game(dimension, Player::X, Player::O);
        assert!(
            matches!(result, Err(GameError::InvalidConfiguration(_))),
            "dimension {}",
            dimension
        );
    }
}

#[test]
fn test_config_file_rejects_oversized_dimension() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dimension = {}", i64::MAX).unwrap();
    let config = GameConfig::from_file(file.path()).unwrap();
    assert!(matches!(config.start(), Err(GameError::InvalidConfiguration(_))));
}

#[test]
fn test_human_then_automated_turn() {
    let mut game = game();
    assert_eq!(game.to_move(), Side::Human);
    assert_eq!(game.apply_human_move(1, 1), Ok(GameOutcome::Ongoing));
    assert_eq!(game.to_move(), Side::Automated);

    let reply = game.choose_automated_move().expect("open cells");
    assert_eq!(game.board().open_cells().count(), 8, "search leaves board intact");
    assert_eq!(game.apply_automated_move(reply.x, reply.y), Ok(GameOutcome::Ongoing));
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_occupied_cell_leaves_game_unchanged() {
    let mut game = game();
    game.apply_human_move(0, 0).unwrap();
    game.apply_automated_move(1, 1).unwrap();

    let board = game.board().clone();
    let result = game.apply_human_move(1, 1);
    assert_eq!(result, Err(GameError::CellOccupied(Coordinate::new(1, 1))));
    assert_eq!(*game.board(), board);
    assert_eq!(game.to_move(), Side::Human);
    assert_eq!(game.history().len(), 2);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut game = game();
    let result = game.apply_human_move(3, 0);
    assert_eq!(
        result,
        Err(GameError::InvalidCoordinate { x: 3, y: 0, dimension: 3 })
    );
}

#[test]
fn test_out_of_turn_rejected() {
    let mut game = game();
    assert_eq!(game.apply_automated_move(0, 0), Err(GameError::NotYourTurn(Player::O)));
    game.apply_human_move(0, 0).unwrap();
    assert_eq!(game.apply_human_move(0, 1), Err(GameError::NotYourTurn(Player::X)));
}

#[test]
fn test_human_win_reported() {
    let mut game = game();
    game.apply_human_move(0, 0).unwrap();
    game.apply_automated_move(1, 0).unwrap();
    game.apply_human_move(0, 1).unwrap();
    game.apply_automated_move(1, 1).unwrap();
    assert_eq!(game.apply_human_move(0, 2), Ok(GameOutcome::Won(Player::X)));

    assert!(game.is_over());
    assert_eq!(game.report(), Some(OutcomeReport::PlayerWin));
    assert_eq!(game.report().map(OutcomeReport::code), Some(2));
    assert_eq!(game.apply_automated_move(2, 2), Err(GameError::GameOver));
}

#[test]
fn test_engine_survives_careless_human() {
    let mut game = game();
    // Human always takes the last open cell
    while !game.is_over() {
        let at = game.board().open_cells().last().expect("open cell");
        game.apply_human_move(at.x, at.y).unwrap();
        if !game.is_over() {
            game.play_automated_turn().unwrap().expect("engine has a move");
        }
    }
    assert!(matches!(
        game.report(),
        Some(OutcomeReport::AutomatedWin | OutcomeReport::Tie)
    ));
}

#[test]
fn test_restart_alternates_opener() {
    let marks = MarkAssignment::against(Player::X);
    let mut game = Game::with_opener(3, marks, Side::Human, FirstTurn::Alternate).unwrap();
    game.apply_human_move(1, 1).unwrap();

    game.restart();
    assert_eq!(game.opener(), Side::Automated);
    assert_eq!(game.to_move(), Side::Automated);
    assert!(game.history().is_empty());
    assert_eq!(game.board().open_cells().count(), 9);

    game.restart();
    assert_eq!(game.opener(), Side::Human);
}

#[test]
fn test_restart_keeps_fixed_opener() {
    let mut game = game();
    game.restart();
    assert_eq!(game.opener(), Side::Human);
}

#[test]
fn test_config_file_starts_game() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dimension = 3").unwrap();
    writeln!(file, "human_mark = \"O\"").unwrap();
    writeln!(file, "first_turn = \"automated\"").unwrap();

    let config = GameConfig::from_file(file.path()).unwrap();
    let game = config.start().unwrap();
    assert_eq!(game.marks().human(), Player::O);
    assert_eq!(game.marks().automated(), Player::X);
    assert_eq!(game.to_move(), Side::Automated);
}

#[test]
fn test_config_file_missing() {
    let err = GameConfig::from_file("does/not/exist.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_config_file_malformed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "dimension = \"three\"").unwrap();
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
