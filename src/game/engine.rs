use anyhow::Result;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{
    config::GameConfig,
    food::{find_food_hit, generate_foods, try_replace_food},
    state::{GameState, Position, Snake},
};

/// Information about a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate food this step (slot replaced, score and length updated)
    pub ate_food: bool,
    /// Food slot whose capture box the head entered, even if it could not be replaced
    pub food_hit: Option<usize>,
    /// Whether the head crossed a boundary and was wrapped to the opposite edge
    pub wrapped: bool,
}

impl StepInfo {
    /// A food item was touched but its single replacement attempt failed
    pub fn replacement_rejected(&self) -> bool {
        self.food_hit.is_some() && !self.ate_food
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration.
    ///
    /// Fails if the configuration does not pass [`GameConfig::validate`].
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::from_entropy(),
        })
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to initial state
    pub fn reset(&mut self) -> GameState {
        let snake = Snake::new(
            self.config.initial_snake.clone(),
            self.config.initial_direction,
        );
        let foods = generate_foods(&mut self.rng, &self.config);

        GameState::new(snake, foods, self.config.grid_size)
    }

    /// Execute one tick of the game.
    ///
    /// There is no terminal state: walls wrap and the body may cross itself.
    pub fn step(&mut self, state: &mut GameState) -> StepInfo {
        let half = self.config.half_extent();
        let moved = state
            .snake
            .head()
            .moved_in_direction(state.snake.direction);
        let (new_head, wrapped) = wrap_position(moved, half);
        debug_assert!(state.is_in_bounds(new_head));

        if wrapped {
            debug!("head wrapped from {:?} to {:?}", moved, new_head);
        }

        let food_hit = find_food_hit(new_head, &state.foods, self.config.capture_radius());

        let ate_food = match food_hit {
            Some(index) => {
                let replaced =
                    try_replace_food(&mut self.rng, &mut state.foods, index, &self.config);
                if replaced {
                    state.score += self.config.points_per_food;
                    debug!(
                        "food {} eaten at {:?}, respawned at {:?}, score {}",
                        index, new_head, state.foods[index], state.score
                    );
                } else {
                    debug!("food {} touched but replacement was rejected", index);
                }
                replaced
            }
            None => false,
        };

        state.snake.advance(new_head, ate_food);
        state.steps += 1;

        StepInfo {
            ate_food,
            food_hit,
            wrapped,
        }
    }
}

/// Teleport a coordinate that left `[-half, half]` to the opposite edge.
///
/// Each axis is handled on its own; a diagonal exit wraps both.
pub fn wrap_position(pos: Position, half: i32) -> (Position, bool) {
    let (x, wrapped_x) = wrap_axis(pos.x, half);
    let (z, wrapped_z) = wrap_axis(pos.z, half);

    (Position { x, y: pos.y, z }, wrapped_x || wrapped_z)
}

fn wrap_axis(value: i32, half: i32) -> (i32, bool) {
    if value > half {
        (-half, true)
    } else if value < -half {
        (half, true)
    } else {
        (value, false)
    }
}
