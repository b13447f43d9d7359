//! Append-only score log
//!
//! Each finished session adds one line holding the decimal score. The file is
//! never read back.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_SCORE_FILE: &str = "highscores.txt";

#[derive(Debug, Clone)]
pub struct ScoreLog {
    path: PathBuf,
}

impl ScoreLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `score` followed by a newline, creating the file if needed
    pub fn append(&self, score: u32) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open score log {:?}", self.path))?;
        writeln!(file, "{}", score)
            .with_context(|| format!("Failed to append to score log {:?}", self.path))?;
        Ok(())
    }
}
