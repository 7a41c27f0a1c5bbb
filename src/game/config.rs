use std::time::Duration;

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

use super::action::Direction;
use super::state::Position;

/// Side length of the square play field, centered at the origin
pub const GRID_SIZE: i32 = 200;
pub const POINTS_PER_FOOD: u32 = 10;
/// Number of food items kept on the board
pub const FOOD_COUNT: usize = 5;
pub const FOOD_SIZE: f32 = 1.2;
/// Minimum planar distance between two food items
pub const MIN_FOOD_DISTANCE: f64 = 20.0;
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);
pub const BOOST_MULTIPLIER: u32 = 10;
/// How long the collision flag stays raised after a wrap
pub const COLLISION_FLASH: Duration = Duration::from_millis(500);
/// Rejection-sampling attempts per food slot before the separation check is dropped
pub const MAX_FOOD_ATTEMPTS: u32 = 10_000;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the grid; coordinates range over [-grid_size/2, grid_size/2]
    pub grid_size: i32,
    pub points_per_food: u32,
    pub food_count: usize,
    /// Food radius; the capture box is food_size + 2 on each axis
    pub food_size: f32,
    pub min_food_distance: f64,
    /// Time between ticks without boost
    pub tick_interval: Duration,
    /// Tick frequency multiplier while boost is held
    pub boost_multiplier: u32,
    pub collision_flash: Duration,
    /// Initial body, head first
    pub initial_snake: Vec<Position>,
    pub initial_direction: Direction,
    pub max_food_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            points_per_food: POINTS_PER_FOOD,
            food_count: FOOD_COUNT,
            food_size: FOOD_SIZE,
            min_food_distance: MIN_FOOD_DISTANCE,
            tick_interval: TICK_INTERVAL,
            boost_multiplier: BOOST_MULTIPLIER,
            collision_flash: COLLISION_FLASH,
            initial_snake: vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
            ],
            initial_direction: Direction::Right,
            max_food_attempts: MAX_FOOD_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom grid size
    pub fn new(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Half the grid extent; the wrap boundary on every axis
    pub fn half_extent(&self) -> i32 {
        self.grid_size / 2
    }

    /// Half-width of the axis-aligned box in which the head captures a food item
    pub fn capture_radius(&self) -> f32 {
        self.food_size + 2.0
    }

    /// Reject configurations the engine cannot run
    pub fn validate(&self) -> Result<()> {
        if self.grid_size <= 0 {
            bail!("grid size must be positive, got {}", self.grid_size);
        }
        if self.food_count == 0 {
            bail!("food count must be at least 1");
        }
        if self.boost_multiplier == 0 {
            bail!("boost multiplier must be at least 1");
        }
        if self.tick_interval.is_zero() {
            bail!("tick interval must be non-zero");
        }
        if self.capture_radius() <= 0.0 {
            bail!("capture size must be positive, got {}", self.capture_radius());
        }
        if self.initial_snake.is_empty() {
            bail!("initial snake needs at least one segment");
        }
        let half = self.half_extent();
        for segment in &self.initial_snake {
            if segment.y != 0 {
                bail!("initial snake segment {:?} is off the ground plane", segment);
            }
            if segment.x.abs() > half || segment.z.abs() > half {
                bail!("initial snake segment {:?} is outside the grid", segment);
            }
        }
        Ok(())
    }
}
