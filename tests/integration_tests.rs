//! Integration tests for the main game loop

use boom_tetris::core::{Game, GameConfig, GameError, Records};
use boom_tetris::input::KeyTracker;
use boom_tetris::types::{
    GameEvent, GameMode, GameOverReason, InputFrame, LogicalKey, Scene, TICK_MS,
};

fn started(seed: u32, level: u32) -> Game {
    let mut game = Game::new(GameConfig::with_seed(seed)).unwrap();
    game.start(level, GameMode::Normal).unwrap();
    game
}

/// Deterministic scripted input: a mix of holds and taps keyed off the frame number.
fn scripted(frame: u32) -> InputFrame {
    InputFrame {
        move_left: frame % 90 < 20,
        move_right: (45..60).contains(&(frame % 90)),
        soft_drop: frame % 120 > 80,
        rotate_cw: frame % 37 == 0,
        rotate_ccw: frame % 53 == 0,
        pause: false,
        restart: false,
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = Game::new(GameConfig::with_seed(12345)).unwrap();
    assert_eq!(game.scene(), Scene::MainMenu);

    game.start(0, GameMode::Normal).unwrap();
    assert_eq!(game.scene(), Scene::InGame);
    assert!(game.active().is_none());

    game.tick(&InputFrame::default(), TICK_MS);
    assert!(game.active().is_some());
    assert_eq!(game.elapsed_ms(), TICK_MS);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        das_ms: 0,
        ..GameConfig::default()
    };
    assert!(matches!(
        Game::new(config),
        Err(GameError::InvalidTiming { name: "das_ms" })
    ));
}

#[test]
fn test_same_seed_same_game() {
    let mut a = started(2024, 3);
    let mut b = started(2024, 3);
    for frame in 0..3000 {
        let input = scripted(frame);
        a.tick(&input, TICK_MS);
        b.tick(&input, TICK_MS);
        assert_eq!(a.events(), b.events(), "frame {frame}");
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_idle_game_tops_out() {
    let mut game = started(7, 9);
    let mut frames = 0;
    while game.scene() != Scene::GameOver {
        game.tick(&InputFrame::default(), TICK_MS);
        frames += 1;
        assert!(frames < 20_000, "game never ended");
    }
    assert_eq!(game.game_over_reason(), Some(GameOverReason::ToppedOut));
    assert!(game.events().contains(&GameEvent::GameOver {
        reason: GameOverReason::ToppedOut
    }));

    // Game over is terminal until the menu is re-entered.
    let board = game.board().clone();
    let elapsed = game.elapsed_ms();
    for frame in 0..100 {
        game.tick(&scripted(frame), TICK_MS);
    }
    assert_eq!(game.board(), &board);
    assert_eq!(game.elapsed_ms(), elapsed);

    game.return_to_menu();
    assert_eq!(game.scene(), Scene::MainMenu);
    assert!(game.board().is_empty());
    game.start(0, GameMode::Normal).unwrap();
    assert_eq!(game.scene(), Scene::InGame);
}

#[test]
fn test_holding_left_reaches_the_wall() {
    let mut game = started(5, 0);
    let hold_left = InputFrame {
        move_left: true,
        ..InputFrame::default()
    };
    let mut shifts = 0;
    for _ in 0..60 {
        game.tick(&hold_left, TICK_MS);
        shifts += game
            .events()
            .iter()
            .filter(|e| **e == GameEvent::Shifted)
            .count();
    }
    let cells = game.active_cells().unwrap();
    assert_eq!(cells.iter().map(|c| c.x).min(), Some(0));
    assert!(shifts >= 4);
}

#[test]
fn test_key_tracker_drives_game() {
    let mut game = started(8, 0);
    let mut tracker = KeyTracker::new();

    game.tick(&tracker.frame(TICK_MS), TICK_MS);
    let spawned = *game.active().unwrap();

    tracker.press(LogicalKey::MoveRight);
    game.tick(&tracker.frame(TICK_MS), TICK_MS);
    assert!(game.events().contains(&GameEvent::Shifted));
    assert_eq!(game.active().unwrap().position.x, spawned.position.x + 1);

    tracker.release(LogicalKey::MoveRight);
    tracker.press(LogicalKey::Pause);
    game.tick(&tracker.frame(TICK_MS), TICK_MS);
    assert_eq!(game.scene(), Scene::Paused);
}

#[test]
fn test_records_carry_between_games() {
    let mut game = Game::new(GameConfig::with_seed(3))
        .unwrap()
        .with_records(Records::new(1_000_000, Some(1)));
    game.start(0, GameMode::Normal).unwrap();
    game.tick(&InputFrame::default(), TICK_MS);
    assert_eq!(game.records().high_score, 1_000_000);

    game.return_to_menu();
    assert_eq!(game.records().best_forty_lines_ms, Some(1));
}

#[test]
fn test_next_shape_becomes_active() {
    let mut game = started(99, 5);
    let soft = InputFrame {
        soft_drop: true,
        ..InputFrame::default()
    };
    let mut spawns = 0;
    for _ in 0..5000 {
        let preview = game.next_shape();
        let had_piece = game.active().is_some();
        game.tick(&soft, TICK_MS);
        if game.scene() != Scene::InGame {
            break;
        }
        if !had_piece {
            if let Some(piece) = game.active() {
                assert_eq!(piece.shape, preview);
                spawns += 1;
            }
        }
    }
    assert!(spawns >= 5);
}
