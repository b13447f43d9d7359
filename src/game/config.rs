use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::Position;

/// Configuration for the game
///
/// Every field has a default, so a JSON file only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Edge length of one grid cell in pixels
    pub cell_size_px: u32,
    /// Playfield edge length at level 1, in pixels
    pub base_size_px: u32,
    /// Playfield growth per level, in pixels (applied from level 2 on)
    pub growth_px_per_level: u32,

    /// Cell the snake starts on after every reset
    pub origin: Position,

    /// Tick interval at the start of a session
    pub initial_tick_ms: u64,
    /// SpeedUp food never pushes the interval below this
    pub min_tick_ms: u64,
    /// Added by SlowTimer food
    pub slow_timer_step_ms: u64,
    /// Removed by SpeedUp food
    pub speed_up_step_ms: u64,

    /// Points awarded by Normal food
    pub normal_points: u32,
    /// Points awarded by DoublePoints food
    pub double_points: u32,
    /// Level L is complete once the score reaches L times this
    pub points_per_level: u32,

    pub obstacles_per_level: usize,
    pub traps_per_level: usize,

    /// Countdown shown in the status line
    pub remaining_time_secs: u32,
    /// End the session when the countdown reaches zero
    pub time_challenge: bool,

    /// Silence the terminal bell on food and game over
    pub mute: bool,

    /// Random draws per placement before falling back to a free-cell scan
    pub max_spawn_attempts: usize,
    /// Seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 20,
            base_size_px: 400,
            growth_px_per_level: 50,
            origin: Position::new(5, 5),
            initial_tick_ms: 200,
            min_tick_ms: 50,
            slow_timer_step_ms: 50,
            speed_up_step_ms: 20,
            normal_points: 10,
            double_points: 20,
            points_per_level: 100,
            obstacles_per_level: 5,
            traps_per_level: 3,
            remaining_time_secs: 60,
            time_challenge: false,
            mute: false,
            max_spawn_attempts: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Read a configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.cell_size_px == 0 {
            bail!("cell_size_px must be positive");
        }
        let (width, height) = self.grid_size_for_level(1);
        if self.origin.x < 0
            || self.origin.y < 0
            || self.origin.x >= width as i32
            || self.origin.y >= height as i32
        {
            bail!(
                "origin ({}, {}) lies outside the {}x{} base grid",
                self.origin.x,
                self.origin.y,
                width,
                height
            );
        }
        if self.min_tick_ms == 0 || self.min_tick_ms > self.initial_tick_ms {
            bail!(
                "min_tick_ms ({}) must be in 1..=initial_tick_ms ({})",
                self.min_tick_ms,
                self.initial_tick_ms
            );
        }
        if self.points_per_level == 0 {
            bail!("points_per_level must be positive");
        }
        let needed = self.obstacles_per_level + self.traps_per_level + 2;
        if width * height < needed {
            bail!(
                "base grid {}x{} cannot hold the snake, food and {} hazards",
                width,
                height,
                needed - 2
            );
        }
        if self.max_spawn_attempts == 0 {
            bail!("max_spawn_attempts must be positive");
        }
        Ok(())
    }

    /// Grid dimensions in cells for a level
    ///
    /// Level 1 uses the base size; level L >= 2 uses base + L * growth pixels.
    pub fn grid_size_for_level(&self, level: u32) -> (usize, usize) {
        let size_px = if level <= 1 {
            self.base_size_px
        } else {
            self.base_size_px + level * self.growth_px_per_level
        };
        let cells = (size_px / self.cell_size_px) as usize;
        (cells, cells)
    }

    pub fn obstacle_count(&self, level: u32) -> usize {
        level as usize * self.obstacles_per_level
    }

    pub fn trap_count(&self, level: u32) -> usize {
        level as usize * self.traps_per_level
    }

    /// Score needed to leave the given level
    pub fn level_threshold(&self, level: u32) -> u32 {
        level * self.points_per_level
    }
}
