//! Core snake simulation: movement, collision, growth and particle effects.
//!
//! Nothing in here touches the window, the keyboard or the audio device.

use std::time::Duration;

pub mod direction;
pub mod particles;
pub mod state;

pub use direction::Direction;
pub use particles::{Particle, Rgba, create_burst, update_particles};
pub use state::{Cell, GameState, Snapshot, TickInput, TickResult};

// Board geometry, in logical pixels
pub const BOARD_WIDTH: i32 = 640;
pub const BOARD_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;
pub const COLUMNS: i32 = BOARD_WIDTH / CELL_SIZE;
pub const ROWS: i32 = BOARD_HEIGHT / CELL_SIZE;

/// Minimum real time between two snake moves.
pub const MOVE_INTERVAL: Duration = Duration::from_millis(100);
pub const FOOD_SCORE: u32 = 10;

/// Head first, spaced one cell apart, facing `Direction::Right`.
pub const INITIAL_SNAKE: [Cell; 3] = [
    Cell::new(BOARD_WIDTH / 2 - CELL_SIZE, BOARD_HEIGHT / 2),
    Cell::new(BOARD_WIDTH / 2 - CELL_SIZE * 2, BOARD_HEIGHT / 2),
    Cell::new(BOARD_WIDTH / 2 - CELL_SIZE * 3, BOARD_HEIGHT / 2),
];

// Particle bursts
pub const BURST_SIZE: usize = 30;
pub const PARTICLE_LIFE: u32 = 30;
pub const PARTICLE_MAX_SPEED: f32 = 1.25;
pub const PARTICLE_COLOR: Rgba = Rgba::new(255, 215, 0, 255);
