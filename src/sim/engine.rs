//! Fixed-cadence simulation step
//!
//! One [`Engine::tick`] runs, in order: due tail moves, pending steering
//! input, wraparound, head move, staggered tail scheduling, food collision
//! and self collision. The engine keeps its own virtual clock advanced by one
//! tick interval per tick; the driver only decides when to call `tick`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision;
use super::food::Food;
use super::geom::{Axis, BoundingBox, Vector};
use super::input::{Command, DirectionHandle};
use super::schedule::TailSchedule;
use super::snake::{Edge, Snake, TailMove};
use crate::config::GameConfig;
use crate::error::Result;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal until [`Engine::restart`]
    GameOver,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// The game was already over; nothing ran
    pub skipped: bool,
    /// Edge the head crossed this tick
    pub wrapped: Option<Edge>,
    pub ate_food: bool,
    /// The head ran into its tail this tick
    pub game_over: bool,
}

/// Read-only view handed to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub head: BoundingBox,
    pub tail: Vec<BoundingBox>,
    pub food: BoundingBox,
    pub game_over: bool,
}

pub struct Engine {
    config: GameConfig,
    pub snake: Snake,
    pub food: Food,
    phase: GamePhase,
    rng: Pcg32,
    /// Start time (ms) of the next tick
    clock_ms: u64,
    schedule: TailSchedule,
    input: DirectionHandle,
}

impl Engine {
    /// Build an engine and place the first food
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut snake = Snake::new(config.cell_size, config.max_tail_size);
        snake.vel = Vector::splat(config.velocity);

        let mut engine = Self {
            rng: Pcg32::seed_from_u64(config.seed),
            food: Food::new(config.cell_size),
            snake,
            phase: GamePhase::Running,
            clock_ms: 0,
            schedule: TailSchedule::new(),
            input: DirectionHandle::new(),
            config,
        };
        engine.place_food();

        log::info!(
            "Engine ready: field {}x{}, cell {}, tick {}ms, seed {}",
            engine.config.field_width,
            engine.config.field_height,
            engine.config.cell_size,
            engine.config.tick_interval_ms,
            engine.config.seed
        );
        Ok(engine)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Virtual time (ms) at which the next tick starts
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn pending_tail_moves(&self) -> &TailSchedule {
        &self.schedule
    }

    /// Writer for steering input; may be moved to another thread
    pub fn direction_handle(&self) -> DirectionHandle {
        self.input.clone()
    }

    /// Queue a raw steering command for the next tick
    pub fn change_direction(&self, input: &str) -> Result<Command> {
        self.input.submit_str(input)
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickReport {
        if self.phase == GamePhase::GameOver {
            return TickReport {
                skipped: true,
                ..Default::default()
            };
        }

        let now = self.clock_ms;
        let interval = self.config.tick_interval_ms;

        for due in self.schedule.drain_due(now) {
            self.snake.apply_tail_move(due.segment, due.action);
        }

        if let Some(command) = self.input.take() {
            self.snake.change_direction(command);
        }

        let mut report = TickReport {
            wrapped: self.wrap_edges(),
            ..Default::default()
        };

        if let Some(heading) = self.snake.heading() {
            self.snake.step_head(heading);
            // A wrap tick already moved the tail with the edge-teleport
            if report.wrapped.is_none() {
                self.schedule
                    .stagger(now, interval, self.snake.tail.len(), TailMove::Step(heading));
            }
        }

        if collision::food_hit(&self.snake, &self.food) {
            self.grow();
            report.ate_food = true;
        } else if let Some(segment) = collision::self_hit(&self.snake) {
            self.phase = GamePhase::GameOver;
            report.game_over = true;
            log::info!(
                "Game over: head {:?} hit tail segment {} (length {})",
                self.snake.pos(),
                segment,
                self.snake.tail.len()
            );
        }

        log::trace!("t={}ms head={:?} tail={}", now, self.snake.pos(), self.snake.tail.len());
        self.clock_ms = now.saturating_add(interval);
        report
    }

    /// Start a new run; only has an effect once the game is over
    pub fn restart(&mut self) -> bool {
        if self.phase != GamePhase::GameOver {
            return false;
        }

        self.schedule.clear();
        self.input.clear();
        self.snake.reset(self.config.velocity);
        self.clock_ms = 0;
        self.phase = GamePhase::Running;
        self.place_food();

        log::info!("Game restarted");
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            head: self.snake.head,
            tail: self.snake.tail.clone(),
            food: self.food.rect,
            game_over: self.is_game_over(),
        }
    }

    /// Teleport the head across the field when it has left it moving outward
    ///
    /// Every tail segment is snapped to one boundary value on the crossed
    /// axis at the same time.
    fn wrap_edges(&mut self) -> Option<Edge> {
        let (w, h) = (self.config.field_width, self.config.field_height);
        let pos = self.snake.pos();
        let size = self.snake.head.size;
        let dir = self.snake.direction;

        let (edge, head_to, tail_to) = if pos.x > w - size.x && dir.x == 1 {
            (Edge::Right, -size.x, w)
        } else if pos.x < 0 && dir.x == -1 {
            (Edge::Left, w, -size.x)
        } else if pos.y > h - size.y && dir.y == 1 {
            (Edge::Bottom, -size.y, h)
        } else if pos.y < 0 && dir.y == -1 {
            (Edge::Top, h, -size.y)
        } else {
            return None;
        };

        self.snake.set_position(edge.axis(), head_to);
        let action = TailMove::Edge {
            edge,
            value: tail_to,
        };
        for segment in 0..self.snake.tail.len() {
            self.snake.apply_tail_move(segment, action);
        }

        log::debug!("Wrapped across {:?} edge to {:?}", edge, self.snake.pos());
        Some(edge)
    }

    /// Add a segment on the head's cell and move the food
    fn grow(&mut self) {
        let segment = self.snake.add_tail_segment();
        let pos = self.snake.pos();
        self.snake.set_tail_segment_position(segment, Axis::X, pos.x);
        self.snake.set_tail_segment_position(segment, Axis::Y, pos.y);
        self.place_food();
        log::debug!(
            "Ate food at {:?}, tail length {}, next food at {:?}",
            pos,
            self.snake.tail.len(),
            self.food.pos()
        );
    }

    fn place_food(&mut self) {
        self.food.place_randomly(
            &mut self.rng,
            self.config.field_width,
            self.config.field_height,
            self.config.cell_size,
        );
    }
}
