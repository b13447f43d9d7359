use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use level_snake::game::GameConfig;
use level_snake::modes::HumanMode;
use level_snake::scores::{DEFAULT_SCORE_FILE, ScoreLog};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "level_snake")]
#[command(version, about = "Snake with food effects, obstacles, traps and levels")]
struct Cli {
    /// JSON file overriding any subset of the game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,

    /// File that receives one line per finished game
    #[arg(long, default_value = DEFAULT_SCORE_FILE)]
    score_file: PathBuf,

    /// Log output (the terminal is taken by the game)
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    /// End each game when the countdown reaches zero
    #[arg(long)]
    time_challenge: bool,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,
}

fn init_logging(path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.time_challenge {
        config.time_challenge = true;
    }
    if cli.mute {
        config.mute = true;
    }
    config.validate()?;

    let mut human_mode = HumanMode::new(config, ScoreLog::new(cli.score_file));
    human_mode.run().await?;

    Ok(())
}
