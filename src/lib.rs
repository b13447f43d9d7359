//! Level Snake - a terminal Snake game with food effects and level progression
//!
//! This library provides:
//! - Core game logic (game module), free of I/O so it can be driven by tests
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - Append-only score log (scores module)
//! - The interactive event loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod scores;
