use rand::Rng;
use rand::seq::SliceRandom;

use super::state::Position;

/// Behavioral variant of the food currently on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodType {
    /// +10 points
    Normal,
    /// +20 points
    DoublePoints,
    /// Lengthens the tick interval
    SlowTimer,
    /// Shortens the tick interval, down to the configured floor
    SpeedUp,
    /// Flips the snake's direction of travel
    ReverseControls,
}

impl FoodType {
    pub const ALL: [FoodType; 5] = [
        FoodType::Normal,
        FoodType::DoublePoints,
        FoodType::SlowTimer,
        FoodType::SpeedUp,
        FoodType::ReverseControls,
    ];

    /// Pick a food type uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        *Self::ALL.choose(rng).unwrap_or(&FoodType::Normal)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodType::Normal => "Normal",
            FoodType::DoublePoints => "Double",
            FoodType::SlowTimer => "Slow",
            FoodType::SpeedUp => "Fast",
            FoodType::ReverseControls => "Reverse",
        }
    }
}

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
    pub kind: FoodType,
}

impl Food {
    pub fn new(position: Position, kind: FoodType) -> Self {
        Self { position, kind }
    }
}
