//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The front end drives it by calling [`GameEngine::advance_tick`] on its own clock.

pub mod action;
pub mod config;
pub mod engine;
pub mod food;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, GameOver, TickResult};
pub use food::{Food, FoodType};
pub use state::{GameOverReason, GameState, Position, Snake};
