//! Console binary for the Hatchway dungeon game.
//!
//! Wires the traversal engine to a terminal: the player picks actions at
//! a numbered prompt on stdin, narration goes to stdout, and the run's
//! history is written to a CSV file when the game ends.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `hatchway-config.yaml`
//! 2. Initialize structured logging (tracing, to stderr)
//! 3. Load the dungeon map
//! 4. Create the player at the entrance
//! 5. Run the traversal with the console prompt and narrator
//! 6. Export the history
//! 7. Log the result

mod console;
mod error;
mod history_csv;
mod map_loader;
mod narrator;

use std::io;
use std::path::Path;

use hatchway_core::config::GameConfig;
use hatchway_core::history::HistorySink;
use hatchway_core::player::PlayerState;
use hatchway_core::traversal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::console::ConsoleChoiceSource;
use crate::error::EngineError;
use crate::history_csv::CsvHistorySink;
use crate::narrator::ConsoleNarrator;

/// Application entry point for the Hatchway game.
///
/// # Errors
///
/// Returns an error if configuration, the map, the traversal, or the
/// history export fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging is not up yet, so this is reported below.
    let (config, from_file) = load_config()?;

    // 2. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    info!("hatchway starting");
    info!(
        from_file,
        player = config.player.name,
        required_experience = config.player.required_experience,
        time_budget = %config.player.time_budget,
        map = %config.map.path.display(),
        history = %config.history.path.display(),
        "Configuration loaded"
    );

    // 3. Load the map.
    let root = map_loader::load_map(&config.map.path).map_err(EngineError::from)?;

    // 4. Create the player.
    let mut player = PlayerState::new(
        config.player.name.as_str(),
        config.player.required_experience,
        config.player.time_budget,
    );

    // 5. Run the traversal.
    let stdin = io::stdin();
    let mut choices = ConsoleChoiceSource::new(stdin.lock(), io::stdout());
    let mut narrator = ConsoleNarrator::new(io::stdout());
    let outcome = traversal::run_traversal(&root, &mut player, &mut choices, &mut narrator)
        .map_err(EngineError::from)?;

    // 6. Export the history.
    let mut sink = CsvHistorySink::new(config.history.path.as_path());
    sink.export(player.name(), player.history())
        .map_err(EngineError::from)?;
    println!(
        "Game history of player \"{}\" saved to file: {}",
        player.name(),
        sink.path().display()
    );

    // 7. Log the result.
    info!(
        reason = %outcome.reason,
        victory = outcome.reason.is_victory(),
        experience = outcome.experience,
        remaining_time = %outcome.remaining_time,
        choices_made = outcome.choices_made,
        "hatchway shutdown complete"
    );

    Ok(())
}

/// Load configuration from `hatchway-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
/// When it is absent, defaults are used with environment overrides still
/// applied. The flag reports whether the file was read.
fn load_config() -> Result<(GameConfig, bool), EngineError> {
    let config_path = Path::new("hatchway-config.yaml");
    if config_path.exists() {
        Ok((GameConfig::from_file(config_path)?, true))
    } else {
        let mut config = GameConfig::default();
        config.apply_env_overrides();
        Ok((config, false))
    }
}
