//! FitFizz - local wellness tracker
//!
//! Command-line front end over the FitFizz store: accounts, session, and
//! per-user BMI, report, and feedback history.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod state;

use config::AppConfig;
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "fitfizz", version, about = "Local wellness tracker")]
struct Cli {
    /// Directory holding the database and config.toml
    #[arg(long, env = "FITFIZZ_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Command,
}

fn main() {
    let cli = Cli::parse();

    let resolved = AppState::data_path(cli.data_dir)
        .and_then(|dir| AppConfig::load(&dir).map(|config| (dir, config)));

    // Initialize logging
    let default_filter = resolved
        .as_ref()
        .map(|(_, config)| config.log_filter.clone())
        .unwrap_or_else(|_| AppConfig::default().log_filter);
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .init();

    let (data_dir, config) = match resolved {
        Ok(resolved) => resolved,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let state = match AppState::open(&data_dir, &config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::run(&state, cli.command) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
