//! Headless runner (default binary).
//!
//! Plays seeded games at the nominal frame rate with a random key driver and
//! prints a summary per game. Stands in for a windowed host: the same `Game`,
//! `KeyTracker` and tick loop, with no renderer attached.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use boom_tetris::core::{Game, GameConfig, Records, SimpleRng};
use boom_tetris::input::KeyTracker;
use boom_tetris::types::{
    GameMode, LogicalKey, Scene, DEFAULT_ARR_MS, DEFAULT_DAS_MS, TICK_MS,
};

/// Headless falling-block simulation.
#[derive(Debug, Parser)]
#[command(
    name = "boom-tetris",
    version,
    about = "Run seeded falling-block games headlessly with a random input driver."
)]
struct Args {
    /// Seed of the first game; later games use seed + 1, seed + 2, ...
    #[arg(long, default_value = "1", value_name = "N")]
    seed: u32,

    /// Number of games to play.
    #[arg(short, long, default_value = "1", value_name = "N")]
    games: u32,

    /// Level picked on the main menu (0-9).
    #[arg(short = 'l', long, default_value = "0", value_name = "N")]
    start_level: u32,

    /// normal (play until top out) or forty-lines (race to 40 lines).
    #[arg(short, long, default_value = "normal")]
    mode: ModeArg,

    /// Stop a game after this many frames.
    #[arg(long, default_value = "36000", value_name = "FRAMES")]
    frames: u32,

    /// Delayed auto shift in ms.
    #[arg(long, default_value_t = DEFAULT_DAS_MS, value_name = "MS")]
    das_ms: u32,

    /// Auto repeat rate in ms.
    #[arg(long, default_value_t = DEFAULT_ARR_MS, value_name = "MS")]
    arr_ms: u32,

    /// High score to start from, as loaded from a score file.
    #[arg(long, default_value = "0", value_name = "SCORE")]
    high_score: u32,

    /// Print each game's final snapshot as JSON instead of a summary line.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Normal,
    FortyLines,
}

impl From<ModeArg> for GameMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Normal => GameMode::Normal,
            ModeArg::FortyLines => GameMode::FortyLines,
        }
    }
}

/// Keys the driver presses; pause and restart are left alone.
const DRIVER_KEYS: [LogicalKey; 5] = [
    LogicalKey::MoveLeft,
    LogicalKey::MoveRight,
    LogicalKey::SoftDrop,
    LogicalKey::RotateCw,
    LogicalKey::RotateCcw,
];

/// Random key presses: taps rotations, holds movement and soft drop for a while.
struct RandomDriver {
    rng: SimpleRng,
    holding: Option<(LogicalKey, u32)>,
}

impl RandomDriver {
    fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed ^ 0x9e37_79b9),
            holding: None,
        }
    }

    fn drive(&mut self, tracker: &mut KeyTracker) {
        match self.holding {
            Some((key, frames_left)) if frames_left > 0 => {
                tracker.repeat(key);
                self.holding = Some((key, frames_left - 1));
                return;
            }
            Some((key, _)) => {
                tracker.release(key);
                self.holding = None;
            }
            None => {}
        }

        if self.rng.next_range(6) != 0 {
            return;
        }
        let key = DRIVER_KEYS[self.rng.next_range(DRIVER_KEYS.len() as u32) as usize];
        tracker.press(key);
        if key.is_level_triggered() {
            self.holding = Some((key, 2 + self.rng.next_range(40)));
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut records = Records::new(args.high_score, None);
    for index in 0..args.games {
        let config = GameConfig {
            seed: args.seed.wrapping_add(index),
            start_level: args.start_level,
            mode: args.mode.into(),
            das_ms: args.das_ms,
            arr_ms: args.arr_ms,
        };
        let game = play(config, records, args.frames)
            .with_context(|| format!("game {} (seed {})", index + 1, config.seed))?;
        records = *game.records();

        if args.json {
            println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
        } else {
            println!("{}", summary(index + 1, &game));
        }
    }

    info!(
        "records: high score {}, best forty lines {:?} ms",
        records.high_score, records.best_forty_lines_ms
    );
    Ok(())
}

fn play(config: GameConfig, records: Records, frames: u32) -> Result<Game> {
    let mut game = Game::new(config)?.with_records(records);
    game.start(config.start_level, config.mode)?;

    let mut tracker = KeyTracker::new();
    let mut driver = RandomDriver::new(config.seed);
    for _ in 0..frames {
        driver.drive(&mut tracker);
        let input = tracker.frame(TICK_MS);
        game.tick(&input, TICK_MS);
        if game.scene() == Scene::GameOver {
            break;
        }
    }
    Ok(game)
}

fn summary(number: u32, game: &Game) -> String {
    let outcome = match game.game_over_reason() {
        Some(reason) => format!("{reason:?}"),
        None => "FrameLimit".to_string(),
    };
    let ms = game.elapsed_ms();
    format!(
        "game {number}: seed {} {} score {} lines {} level {} time {}:{:02}.{:03}",
        game.seed(),
        outcome,
        game.score(),
        game.lines(),
        game.level(),
        ms / 60_000,
        (ms / 1000) % 60,
        ms % 1000
    )
}
