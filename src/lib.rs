//! snake3d - a wrap-around snake game on a 200x200 grid
//!
//! This library provides:
//! - The simulation core (game module): fixed-step clock, tick engine,
//!   food placement and the session object the frame loop drives
//! - Keyboard mapping (input module)
//! - TUI rendering of per-frame snapshots (render module)
//! - Play statistics (metrics module)
//! - The interactive terminal mode (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
