//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A [`GameSession`] is advanced once per rendered frame and hands out
//! [`Snapshot`]s for drawing.

pub mod action;
pub mod clock;
pub mod config;
pub mod engine;
pub mod flash;
pub mod food;
pub mod session;
pub mod snapshot;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use clock::SimulationClock;
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo};
pub use flash::CollisionFlash;
pub use session::GameSession;
pub use snapshot::Snapshot;
pub use state::{GameState, Position, Snake};
