use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A position on the game grid.
///
/// Gameplay happens on the ground plane, so `y` stays 0 for every entity the
/// engine creates; it is carried so snapshots map directly onto 3D scene
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    /// Position on the ground plane
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, y: 0, z }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y,
            z: self.z + dz,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dz) = direction.delta();
        self.moved_by(dx, dz)
    }

    /// Euclidean distance on the (x, z) plane
    pub fn planar_distance(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dz = f64::from(self.z - other.z);
        (dx * dx + dz * dz).sqrt()
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0. Segments may overlap.
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a snake from explicit segments, head first
    pub fn new(body: Vec<Position>, direction: Direction) -> Self {
        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Request a new heading.
    ///
    /// A reversal of the current heading is rejected and leaves the snake
    /// untouched. Returns whether the heading changed.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) || self.direction == direction {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Prepend `new_head` and drop the tail, or keep the tail when `grow` is set.
    ///
    /// Growing leaves every old segment in place, so the length increases by one.
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        let old_tail = self.body.pop();

        if grow {
            if let Some(tail) = old_tail {
                self.body.push(tail);
            }
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Food slots; a consumed item is replaced in place so indices are stable
    pub foods: Vec<Position>,
    pub grid_size: i32,
    pub score: u32,
    pub steps: u32,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, foods: Vec<Position>, grid_size: i32) -> Self {
        Self {
            snake,
            foods,
            grid_size,
            score: 0,
            steps: 0,
        }
    }

    /// Check if a position is within the grid bounds (inclusive on both edges)
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let half = self.grid_size / 2;
        (-half..=half).contains(&pos.x) && (-half..=half).contains(&pos.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn initial_snake() -> Snake {
        Snake::new(
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
            Direction::Right,
        )
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(5, 4));
        assert_eq!(pos.moved_by(3, 3).y, 0);
    }

    #[test]
    fn test_planar_distance() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.planar_distance(&b), 5.0);
        assert_eq!(b.planar_distance(&a), 5.0);

        // y never contributes
        let lifted = Position { x: 3, y: 40, z: 4 };
        assert_eq!(a.planar_distance(&lifted), 5.0);
    }

    #[test]
    fn test_snake_movement() {
        let mut snake = initial_snake();

        // Move without growing
        snake.advance(Position::new(1, 0), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(1, 0));
        assert_eq!(snake.tail(), Position::new(1, 0));

        // Move with growing keeps the old tail
        snake.advance(Position::new(2, 0), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(2, 0));
        assert_eq!(snake.tail(), Position::new(1, 0));
    }

    #[test]
    fn test_turn_rejects_reversal() {
        let mut snake = initial_snake();

        assert!(!snake.turn(Direction::Left));
        assert_eq!(snake.direction, Direction::Right);

        assert!(snake.turn(Direction::Up));
        assert_eq!(snake.direction, Direction::Up);

        // Repeating the current heading is a no-op
        assert!(!snake.turn(Direction::Up));
        assert!(!snake.turn(Direction::Down));
        assert_eq!(snake.direction, Direction::Up);
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(initial_snake(), vec![Position::new(10, 10)], 200);

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(100, -100)));
        assert!(!state.is_in_bounds(Position::new(101, 0)));
        assert!(!state.is_in_bounds(Position::new(0, -101)));
    }
}
