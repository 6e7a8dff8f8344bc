//! Game module - the top-level state machine
//!
//! [`Game`] owns the board, the active piece and every timing state machine, and
//! advances all of them once per host frame through [`Game::tick`]. Scenes:
//!
//! ```text
//! MainMenu --start--> InGame <--pause--> Paused
//!                       |
//!                  (top out / goal)
//!                       v
//!                    GameOver --return_to_menu--> MainMenu
//! ```
//!
//! Within an `InGame` tick the work happens in a fixed order: pause edge, restart
//! edge, clock, animation gate, spawn, rotation (ccw then cw), auto-shift (left
//! then right), gravity, lock. While any animation is queued the tick stops after
//! advancing it.

use arrayvec::ArrayVec;
use log::{debug, info};

use crate::animation::{Animation, AnimationQueue};
use crate::auto_shift::AutoShift;
use crate::board::Board;
use crate::config::{validate_start_level, GameConfig};
use crate::error::GameError;
use crate::gravity::{effective_gravity, gravity_for_level, GravityAccumulator};
use crate::piece::Tetromino;
use crate::records::Records;
use crate::resolver::{attempt_mutation, resolve_collision};
use crate::rng::ShapeGenerator;
use crate::scoring::ScoreBoard;
use crate::snapshot::{ActiveSnapshot, AnimationSnapshot, GameSnapshot};
use crate::types::{
    AnimationKind, GameEvent, GameMode, GameOverReason, InputFrame, Scene, Shape, Vec2,
    FORTY_LINES_GOAL,
};

/// Events raised during a single tick.
pub type GameEvents = ArrayVec<GameEvent, 16>;

/// Complete game session
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    scene: Scene,
    board: Board,
    active: Option<Tetromino>,
    generator: ShapeGenerator,
    scores: ScoreBoard,
    /// Base gravity for the current level, in cells per frame.
    gravity: f32,
    accumulator: GravityAccumulator,
    auto_shift: AutoShift,
    animations: AnimationQueue,
    elapsed_ms: u32,
    frame_count: u32,
    records: Records,
    events: GameEvents,
    game_over_reason: Option<GameOverReason>,
}

impl Game {
    /// Create a game sitting in the main menu.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            scene: Scene::MainMenu,
            board: Board::new(),
            active: None,
            generator: ShapeGenerator::new(config.seed),
            scores: ScoreBoard::new(config.start_level),
            gravity: gravity_for_level(config.start_level),
            accumulator: GravityAccumulator::new(),
            auto_shift: AutoShift::new(config.das_ms, config.arr_ms),
            animations: AnimationQueue::new(),
            elapsed_ms: 0,
            frame_count: 0,
            records: Records::default(),
            events: GameEvents::new(),
            game_over_reason: None,
        })
    }

    /// Seed the in-memory records, usually from the score file.
    pub fn with_records(mut self, records: Records) -> Self {
        self.records = records;
        self
    }

    /// Leave the main menu and begin a game.
    pub fn start(&mut self, start_level: u32, mode: GameMode) -> Result<(), GameError> {
        if self.scene != Scene::MainMenu {
            return Err(GameError::SceneTransition {
                action: "start",
                from: self.scene,
            });
        }
        validate_start_level(start_level)?;

        self.config.start_level = start_level;
        self.config.mode = mode;
        self.begin();
        debug!("game started: level {start_level}, mode {}", mode.as_str());
        Ok(())
    }

    /// Start over at the current start level and mode.
    pub fn reset(&mut self) {
        self.begin();
        debug!("game reset: level {}", self.config.start_level);
    }

    /// Abandon the current game. Nothing carries over except the records.
    pub fn return_to_menu(&mut self) {
        self.clear_session();
        self.scene = Scene::MainMenu;
        debug!("returned to main menu");
    }

    fn clear_session(&mut self) {
        self.board.clear();
        self.active = None;
        self.scores = ScoreBoard::new(self.config.start_level);
        self.gravity = gravity_for_level(self.config.start_level);
        self.accumulator.reset();
        self.auto_shift.reset();
        self.animations.clear();
        self.elapsed_ms = 0;
        self.frame_count = 0;
        self.game_over_reason = None;
    }

    fn begin(&mut self) {
        self.clear_session();
        self.generator.regenerate();
        self.scene = Scene::InGame;
    }

    /// Advance the game by one host frame.
    pub fn tick(&mut self, input: &InputFrame, elapsed_ms: u32) {
        self.events.clear();
        match self.scene {
            Scene::MainMenu | Scene::GameOver => {}
            Scene::Paused => {
                if input.restart {
                    self.reset();
                } else if input.pause {
                    self.scene = Scene::InGame;
                    debug!("resumed");
                }
            }
            Scene::InGame => self.tick_in_game(input, elapsed_ms),
        }
    }

    fn tick_in_game(&mut self, input: &InputFrame, elapsed_ms: u32) {
        if input.pause {
            self.auto_shift.reset();
            self.scene = Scene::Paused;
            debug!("paused");
            return;
        }
        if input.restart {
            self.reset();
            return;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        self.frame_count = self.frame_count.wrapping_add(1);

        if !self.animations.is_empty() {
            if let Some(done) = self.animations.advance(&mut self.board) {
                self.finish_animation(done);
            }
            return;
        }

        if self.active.is_none() && !self.spawn() {
            return;
        }
        let Some(mut piece) = self.active.take() else {
            return;
        };

        if input.rotate_ccw && !attempt_mutation(&mut piece, &self.board, Tetromino::spin_ccw) {
            self.push_event(GameEvent::Rotated);
        }
        if input.rotate_cw && !attempt_mutation(&mut piece, &self.board, Tetromino::spin_cw) {
            self.push_event(GameEvent::Rotated);
        }

        let pulses = self
            .auto_shift
            .update(input.move_left, input.move_right, elapsed_ms);
        if pulses.left && !attempt_mutation(&mut piece, &self.board, |p| p.translate(-1, 0)) {
            self.push_event(GameEvent::Shifted);
        }
        if pulses.right && !attempt_mutation(&mut piece, &self.board, |p| p.translate(1, 0)) {
            self.push_event(GameEvent::Shifted);
        }

        if !input.soft_drop {
            piece.soft_drop_height = 0;
        }
        let gravity = effective_gravity(self.gravity, input.soft_drop);
        if self.accumulator.advance(gravity) {
            // The landing attempt counts toward the soft-drop bonus too.
            if input.soft_drop {
                piece.soft_drop_height += 1;
            }
            if attempt_mutation(&mut piece, &self.board, |p| p.translate(0, 1)) {
                self.lock(piece);
                return;
            }
        }

        self.active = Some(piece);
    }

    /// Promote the previewed shape. Returns false (and ends the game) if it
    /// does not fit at the spawn anchor.
    fn spawn(&mut self) -> bool {
        let shape = self.generator.peek();
        let mut piece = Tetromino::new(shape);
        piece.save_state();
        if resolve_collision(&mut piece, &self.board) {
            self.end_game(GameOverReason::ToppedOut);
            return false;
        }

        self.generator.advance();
        self.accumulator.reset();
        self.active = Some(piece);
        debug!("spawned {}, next {}", shape.as_str(), self.generator.peek().as_str());
        true
    }

    fn lock(&mut self, piece: Tetromino) {
        self.board.commit(&piece.cells(), piece.paint());
        self.animations.push(Animation::lock_in(piece.position.y));
        self.push_event(GameEvent::Locked);

        let rows = self.board.full_rows();
        debug!(
            "locked {} at ({}, {}), {} full rows",
            piece.shape.as_str(),
            piece.position.x,
            piece.position.y,
            rows.len()
        );
        if rows.is_empty() {
            self.scores.apply_soft_drop(piece.soft_drop_height);
        } else {
            self.animations
                .push(Animation::line_dissolve(rows, piece.soft_drop_height));
        }
    }

    fn finish_animation(&mut self, done: Animation) {
        let Animation::LineDissolve {
            rows,
            soft_drop_height,
            ..
        } = done
        else {
            return;
        };

        self.board.compact_after_clear(&rows);
        let count = rows.len() as u32;
        let outcome = self.scores.apply_line_clear(count);
        self.scores.apply_soft_drop(soft_drop_height);
        self.push_event(GameEvent::LinesCleared { count });

        if outcome.leveled_up {
            let level = self.scores.level;
            self.gravity = gravity_for_level(level);
            self.push_event(GameEvent::LevelUp { level });
            info!("level up: {level}");
        }

        if self.config.mode == GameMode::FortyLines && self.scores.total_lines >= FORTY_LINES_GOAL {
            self.end_game(GameOverReason::GoalReached);
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.scene = Scene::GameOver;
        self.game_over_reason = Some(reason);
        self.active = None;
        self.animations.clear();
        self.auto_shift.reset();
        self.push_event(GameEvent::GameOver { reason });

        info!(
            "game over ({reason:?}): score {}, lines {}, level {}, {} ms",
            self.scores.score, self.scores.total_lines, self.scores.level, self.elapsed_ms
        );
        if self.records.record_score(self.scores.score) {
            info!("new high score: {}", self.scores.score);
        }
        if reason == GameOverReason::GoalReached && self.records.record_forty_lines(self.elapsed_ms)
        {
            info!("new best forty-lines time: {} ms", self.elapsed_ms);
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    /// Cells of the falling piece, for painting before it locks.
    pub fn active_cells(&self) -> Option<[Vec2; 4]> {
        self.active.map(|piece| piece.cells())
    }

    pub fn next_shape(&self) -> Shape {
        self.generator.peek()
    }

    pub fn score(&self) -> u32 {
        self.scores.score
    }

    pub fn level(&self) -> u32 {
        self.scores.level
    }

    /// Total lines cleared this game
    pub fn lines(&self) -> u32 {
        self.scores.total_lines
    }

    pub fn lines_this_level(&self) -> u32 {
        self.scores.lines_this_level
    }

    pub fn start_level(&self) -> u32 {
        self.config.start_level
    }

    /// Base gravity of the current level (cells per frame)
    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    /// Play time of the current game; stops while paused.
    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    /// Kind and progress of the animation currently playing.
    pub fn animation(&self) -> Option<(AnimationKind, f32)> {
        self.animations
            .head()
            .map(|animation| (animation.kind(), animation.progress()))
    }

    pub fn animations_pending(&self) -> usize {
        self.animations.len()
    }

    pub fn records(&self) -> &Records {
        &self.records
    }

    /// Events raised by the most recent tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over_reason
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next_shape = self.generator.peek();
        out.animation = self
            .animation()
            .map(|(kind, progress)| AnimationSnapshot { kind, progress });
        out.scene = self.scene;
        out.mode = self.config.mode;
        out.score = self.scores.score;
        out.level = self.scores.level;
        out.start_level = self.config.start_level;
        out.lines = self.scores.total_lines;
        out.lines_this_level = self.scores.lines_this_level;
        out.elapsed_ms = self.elapsed_ms;
        out.seed = self.generator.seed();
        out.records = self.records;
        out.game_over_reason = self.game_over_reason;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
