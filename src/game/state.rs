use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::action::Direction;
use super::food::Food;

/// A cell on the game grid, as (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if any segment, head included, sits on the position
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Push a new head; drop the tail unless growing
    pub fn advance_to(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
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

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    /// Snake left the grid
    Wall,
    /// Snake hit an obstacle
    Obstacle,
    /// Snake hit a trap
    Trap,
    /// Snake hit itself
    SelfCollision,
    /// The time challenge countdown ran out
    TimeUp,
    /// No free cell was left for the food
    NoSpace,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameOverReason::Wall => "hit the wall",
            GameOverReason::Obstacle => "hit an obstacle",
            GameOverReason::Trap => "stepped on a trap",
            GameOverReason::SelfCollision => "bit itself",
            GameOverReason::TimeUp => "ran out of time",
            GameOverReason::NoSpace => "ran out of room",
        };
        f.write_str(text)
    }
}

/// Complete session state
///
/// Created once per program run and reinitialized in place by
/// [`GameEngine::reset`](super::engine::GameEngine::reset).
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub obstacles: HashSet<Position>,
    pub traps: HashSet<Position>,
    pub food: Food,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub level: u32,
    pub tick_interval_ms: u64,
    pub remaining_time_secs: u32,
    pub paused: bool,
    /// Steering request waiting for the next tick
    pub queued_direction: Option<Direction>,
    /// Ticks completed in the current session
    pub ticks: u64,
}

impl GameState {
    /// Create a bare state with no obstacles or traps
    pub fn new(snake: Snake, food: Food, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            obstacles: HashSet::new(),
            traps: HashSet::new(),
            food,
            grid_width,
            grid_height,
            score: 0,
            level: 1,
            tick_interval_ms: 200,
            remaining_time_secs: 60,
            paused: false,
            queued_direction: None,
            ticks: 0,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if anything at all sits on the position
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.snake.occupies(pos)
            || self.obstacles.contains(&pos)
            || self.traps.contains(&pos)
            || self.food.position == pos
    }
}
