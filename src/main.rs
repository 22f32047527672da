//! Restroom Rush main entry point.
//!
//! Runs one shift of the restroom simulation headless:
//! - **bevy_ecs** for the entity-component-system world and schedule
//! - **configparser** for `config.ini`, overridden by command line flags
//! - **serde_json** for custom level catalogs
//!
//! The built-in janitor bot plays unless `--no-autopilot` is given, in which
//! case nobody cleans and the shift shows how the facility decays on its own.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level 3 --seed 42
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use restroomrush::game::run_headless;
use restroomrush::resources::gameconfig::GameConfig;
use restroomrush::resources::levelcatalog::LevelCatalog;

/// Restroom Rush: keep the public restroom running for a whole shift.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Level to play (1-based, clamped into the catalog).
    #[arg(long)]
    level: Option<i64>,

    /// Random seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many simulated seconds.
    #[arg(long, value_name = "SECONDS")]
    max_seconds: Option<f32>,

    /// Simulation ticks per simulated second.
    #[arg(long)]
    tick_rate: Option<u32>,

    /// Do not let the janitor bot play.
    #[arg(long)]
    no_autopilot: bool,

    /// JSON level catalog replacing the built-in levels.
    #[arg(long, value_name = "PATH")]
    levels: Option<PathBuf>,

    /// Print the available levels and exit.
    #[arg(long)]
    list_levels: bool,

    /// Write the level catalog as JSON and exit.
    #[arg(long, value_name = "PATH")]
    dump_levels: Option<PathBuf>,
}

fn load_config(cli: &Cli) -> Result<GameConfig, String> {
    let mut config = GameConfig::with_path(&cli.config);
    if cli.config.exists() {
        config.load_from_file()?;
    } else {
        info!("No config at {:?}, using defaults", cli.config);
    }

    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(max_seconds) = cli.max_seconds {
        config.max_seconds = max_seconds;
    }
    if let Some(tick_rate) = cli.tick_rate {
        if tick_rate == 0 {
            return Err("--tick-rate must be positive".to_string());
        }
        config.tick_rate = tick_rate;
    }
    if cli.no_autopilot {
        config.autopilot = false;
    }
    if let Some(levels) = &cli.levels {
        config.levels_path = Some(levels.clone());
    }
    Ok(config)
}

fn load_catalog(config: &GameConfig) -> Result<LevelCatalog, String> {
    match &config.levels_path {
        Some(path) => LevelCatalog::load_from_file(path)
            .map_err(|e| format!("Failed to load levels from {:?}: {}", path, e)),
        None => Ok(LevelCatalog::builtin()),
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;
    let catalog = load_catalog(&config)?;

    if cli.list_levels {
        for (i, level) in catalog.levels.iter().enumerate() {
            println!(
                "{}. {} ({} modules, {} angry visitors allowed)",
                i + 1,
                level.name,
                level.modules.len(),
                level.loss_count
            );
        }
        return Ok(());
    }

    if let Some(path) = &cli.dump_levels {
        catalog
            .save_to_file(path)
            .map_err(|e| format!("Failed to write levels to {:?}: {}", path, e))?;
        println!("Levels written to {}", path.display());
        return Ok(());
    }

    let report = run_headless(config, catalog);
    println!("{}", report);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
