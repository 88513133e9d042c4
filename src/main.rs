//! Terminal maze runner (default binary).
//!
//! Loads a digit map, checks that the terminal can show it, then hands the
//! terminal to the game until the goal is reached or `q` is pressed.
//! This is the only place the process exits with a failure status.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_maze::game::{Controller, Settings};

/// Walk from the start tile to the goal with w/a/s/d; q quits.
#[derive(Parser, Debug)]
#[command(name = "tui-maze", version)]
struct Args {
    /// Map file: one row per line, digits 0-4 (empty, wall, start marker, goal, player)
    map: PathBuf,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let settings = Settings::from_env();
    init_logging(&settings)?;

    let outcome = Controller::new().play(&args.map)?;
    info!(?outcome, "exiting");
    Ok(())
}

/// Send logs to the configured file. The terminal belongs to the game, so
/// without a log file nothing is recorded.
fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("couldn't open log file {}", path.display()))?;

    let filter = EnvFilter::try_new(&settings.log_filter)
        .with_context(|| format!("invalid log filter {:?}", settings.log_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
