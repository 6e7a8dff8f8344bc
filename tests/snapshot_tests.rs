//! Snapshot tests - the render-facing view and its JSON form

use boom_tetris::core::{Game, GameConfig, GameSnapshot};
use boom_tetris::types::{GameMode, InputFrame, Scene, Shape, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

fn running_game() -> Game {
    let mut game = Game::new(GameConfig::with_seed(31)).unwrap();
    game.start(2, GameMode::FortyLines).unwrap();
    game.tick(&InputFrame::default(), TICK_MS);
    game
}

#[test]
fn test_default_snapshot_is_blank() {
    let snapshot = GameSnapshot::default();
    assert_eq!(snapshot.scene, Scene::MainMenu);
    assert!(snapshot.board.iter().flatten().all(|&c| c == 0));
    assert!(!snapshot.playable());
}

#[test]
fn test_snapshot_mirrors_game() {
    let game = running_game();
    let snapshot = game.snapshot();

    assert_eq!(snapshot.scene, Scene::InGame);
    assert_eq!(snapshot.mode, GameMode::FortyLines);
    assert_eq!(snapshot.level, 2);
    assert_eq!(snapshot.start_level, 2);
    assert_eq!(snapshot.seed, 31);
    assert_eq!(snapshot.next_shape, game.next_shape());
    assert_eq!(snapshot.elapsed_ms, TICK_MS);
    assert!(snapshot.playable());

    let active = snapshot.active.unwrap();
    assert_eq!(Some(active.cells), game.active_cells());
    assert_eq!(active.paint, active.shape.paint_index());
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let game = running_game();
    let mut snapshot = GameSnapshot::default();
    snapshot.board[0][0] = 9;
    snapshot.score = 77;

    game.snapshot_into(&mut snapshot);
    assert_eq!(snapshot, game.snapshot());

    snapshot.clear();
    assert_eq!(snapshot, GameSnapshot::default());
}

#[test]
fn test_snapshot_json_shape() {
    let game = running_game();
    let value = serde_json::to_value(game.snapshot()).unwrap();

    assert_eq!(value["scene"], "InGame");
    assert_eq!(value["mode"], "FortyLines");
    assert_eq!(value["board"].as_array().map(|rows| rows.len()), Some(BOARD_HEIGHT as usize));
    assert_eq!(
        value["board"][0].as_array().map(|row| row.len()),
        Some(BOARD_WIDTH as usize)
    );
    assert_eq!(value["active"]["cells"].as_array().map(|c| c.len()), Some(4));
    assert!(value["animation"].is_null());
    assert!(value["records"]["best_forty_lines_ms"].is_null());
}

#[test]
fn test_snapshot_json_roundtrip() {
    let game = running_game();
    let json = serde_json::to_string(&game.snapshot()).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game.snapshot());
}

#[test]
fn test_shape_names_in_json() {
    let json = serde_json::to_string(&Shape::O).unwrap();
    assert_eq!(json, "\"O\"");
}
