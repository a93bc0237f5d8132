use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::direction::Direction;
use super::particles::{Particle, create_burst, update_particles};
use super::{
    BOARD_HEIGHT, BOARD_WIDTH, BURST_SIZE, CELL_SIZE, COLUMNS, FOOD_SCORE, INITIAL_SNAKE,
    MOVE_INTERVAL, ROWS,
};
use crate::error::GameError;

/// Top-left corner of a grid cell, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// One cell further in `direction`, with toroidal wrap applied.
    pub fn stepped(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: wrap(self.x + dx * CELL_SIZE, BOARD_WIDTH),
            y: wrap(self.y + dy * CELL_SIZE, BOARD_HEIGHT),
        }
    }
}

// Only coordinates strictly past the extent wrap to 0, so the column at
// `extent` itself is reachable for one move.
fn wrap(coord: i32, extent: i32) -> i32 {
    if coord < 0 {
        extent - CELL_SIZE
    } else if coord > extent {
        0
    } else {
        coord
    }
}

/// Player requests gathered for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub turn: Option<Direction>,
    pub restart: bool,
}

impl TickInput {
    pub fn turn(direction: Direction) -> Self {
        Self {
            turn: Some(direction),
            restart: false,
        }
    }

    pub fn restart() -> Self {
        Self {
            turn: None,
            restart: true,
        }
    }
}

/// Events produced by one call to [`GameState::advance`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickResult {
    pub moved: bool,
    pub ate_food: bool,
    pub game_over_triggered: bool,
    pub restarted: bool,
    /// Where the eaten food was, if a particle burst was spawned this tick.
    pub burst: Option<Cell>,
}

/// Read-only view handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub snake: &'a [Cell],
    pub food: Cell,
    pub score: u32,
    pub game_over: bool,
    pub particles: &'a [Particle],
}

pub struct GameState {
    snake: Vec<Cell>,
    /// Heading of the last executed move.
    direction: Direction,
    next_direction: Direction,
    food: Cell,
    grow: bool,
    score: u32,
    game_over: bool,
    particles: Vec<Particle>,
    since_last_move: Duration,
    rng: StdRng,
}

impl GameState {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Same as [`GameState::new`], but every food position and particle burst
    /// is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        let mut state = Self {
            snake: INITIAL_SNAKE.to_vec(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: INITIAL_SNAKE[0],
            grow: false,
            score: 0,
            game_over: false,
            particles: Vec::new(),
            since_last_move: Duration::ZERO,
            rng,
        };
        state.place_food();
        state
    }

    /// Builds a game around an arbitrary snake, head first.
    pub fn from_snake(
        snake: Vec<Cell>,
        direction: Direction,
        food: Cell,
        seed: u64,
    ) -> Result<Self, GameError> {
        if snake.is_empty() {
            return Err(GameError::EmptySnake);
        }
        Ok(Self {
            snake,
            direction,
            next_direction: direction,
            food,
            grow: false,
            score: 0,
            game_over: false,
            particles: Vec::new(),
            since_last_move: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Runs one frame. While the game is over only a restart request has any
    /// effect; otherwise the snake moves once `MOVE_INTERVAL` has elapsed
    /// and particles are updated every call.
    pub fn advance(&mut self, input: TickInput, elapsed: Duration) -> TickResult {
        let mut result = TickResult::default();

        if self.game_over {
            if input.restart {
                self.restart();
                result.restarted = true;
            }
            return result;
        }

        if let Some(direction) = input.turn {
            self.steer(direction);
        }

        self.since_last_move = self.since_last_move.saturating_add(elapsed);
        if self.since_last_move >= MOVE_INTERVAL {
            self.since_last_move = Duration::ZERO;
            self.step(&mut result);
            if self.game_over {
                return result;
            }
        }

        update_particles(&mut self.particles);
        result
    }

    pub fn restart(&mut self) {
        self.snake = INITIAL_SNAKE.to_vec();
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.grow = false;
        self.score = 0;
        self.game_over = false;
        self.particles.clear();
        self.since_last_move = Duration::ZERO;
        self.place_food();
        info!("game restarted, food at {:?}", self.food);
    }

    fn steer(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = direction;
        }
    }

    fn step(&mut self, result: &mut TickResult) {
        self.direction = self.next_direction;
        let new_head = self.head().stepped(self.direction);

        // Checked against the whole body, tail included
        if self.snake.contains(&new_head) {
            self.game_over = true;
            result.game_over_triggered = true;
            info!("collision at {new_head:?}, final score {}", self.score);
            return;
        }

        if new_head == self.food {
            self.grow = true;
            let eaten = self.food;
            self.particles.extend(create_burst(
                eaten.x as f32,
                eaten.y as f32,
                BURST_SIZE,
                &mut self.rng,
            ));
            self.place_food();
            self.score += FOOD_SCORE;
            result.ate_food = true;
            result.burst = Some(eaten);
            debug!("food eaten at {eaten:?}, score {}", self.score);
        }

        self.snake.insert(0, new_head);
        if self.grow {
            self.grow = false;
        } else {
            self.snake.pop();
        }
        result.moved = true;
    }

    /// Any cell on the board may be picked, including ones under the snake.
    fn place_food(&mut self) {
        self.food = Cell::new(
            self.rng.random_range(0..COLUMNS) * CELL_SIZE,
            self.rng.random_range(0..ROWS) * CELL_SIZE,
        );
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: &self.snake,
            food: self.food,
            score: self.score,
            game_over: self.game_over,
            particles: &self.particles,
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn snake(&self) -> &[Cell] {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
