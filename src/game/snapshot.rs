use serde::Serialize;

use super::action::Direction;
use super::state::Position;

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    /// Body segments, head first
    pub segments: Vec<Position>,
    pub foods: Vec<Position>,
    pub score: u32,
    pub steps: u32,
    pub direction: Direction,
    /// Raised for a short time after the head wraps around an edge
    pub colliding: bool,
    pub boosted: bool,
}

impl Snapshot {
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
