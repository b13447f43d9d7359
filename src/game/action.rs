/// Direction the snake can move
///
/// Discriminants go clockwise starting from Right, so opposite directions are
/// always two apart modulo four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right = 0,
    Down = 1,
    Left = 2,
    Up = 3,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
    ];

    /// Numeric encoding (0: right, 1: down, 2: left, 3: up)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Decode a direction, wrapping any value modulo four
    pub fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }

    /// The direction pointing the other way
    pub fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
        }
    }
}

/// Request fed into the game by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Steer towards a direction (ignored if it would reverse the snake)
    Move(Direction),
    /// Suspend or resume tick advancement
    TogglePause,
}
