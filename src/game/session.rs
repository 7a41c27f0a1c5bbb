//! A running game: engine, state, tick clock and collision flag in one
//! object that the frame loop owns and advances explicitly.

use std::time::Duration;

use anyhow::Result;
use log::debug;

use super::{
    action::Direction,
    clock::SimulationClock,
    config::GameConfig,
    engine::{GameEngine, StepInfo},
    flash::CollisionFlash,
    snapshot::Snapshot,
    state::GameState,
};

pub struct GameSession {
    engine: GameEngine,
    state: GameState,
    clock: SimulationClock,
    flash: CollisionFlash,
    /// Simulated time, the sum of every delta passed to `advance`
    elapsed: Duration,
}

impl GameSession {
    /// Start a session; the configuration is validated first
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(Self::from_engine(GameEngine::new(config)?))
    }

    /// Session with reproducible food placement
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Ok(Self::from_engine(GameEngine::with_seed(config, seed)?))
    }

    fn from_engine(mut engine: GameEngine) -> Self {
        let config = engine.config();
        let clock = SimulationClock::new(config.tick_interval, config.boost_multiplier);
        let flash = CollisionFlash::new(config.collision_flash);
        let state = engine.reset();

        Self {
            engine,
            state,
            clock,
            flash,
            elapsed: Duration::ZERO,
        }
    }

    /// Advance by one rendered frame.
    ///
    /// Runs at most one tick, and only when the clock says one is due.
    /// Returns the tick's report if one ran.
    pub fn advance(&mut self, delta: Duration) -> Option<StepInfo> {
        self.elapsed += delta;
        self.flash.update(self.elapsed);

        if !self.clock.advance(delta) {
            return None;
        }

        let info = self.engine.step(&mut self.state);
        if info.wrapped {
            self.flash.trigger(self.elapsed);
        }

        Some(info)
    }

    /// Request a new heading; reversals are ignored
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.state.snake.turn(direction)
    }

    pub fn set_boost(&mut self, boosted: bool) {
        self.clock.set_boost(boosted);
    }

    pub fn is_boosted(&self) -> bool {
        self.clock.is_boosted()
    }

    pub fn is_colliding(&self) -> bool {
        self.flash.is_active()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.state.snake.body.clone(),
            foods: self.state.foods.clone(),
            score: self.state.score,
            steps: self.state.steps,
            direction: self.state.snake.direction,
            colliding: self.flash.is_active(),
            boosted: self.clock.is_boosted(),
        }
    }

    /// Start a fresh game; the boost state follows the held key and is kept
    pub fn restart(&mut self) {
        debug!("restarting at score {}", self.state.score);
        self.state = self.engine.reset();
        self.clock.reset();
        self.flash.cancel();
    }
}
