mod app;
mod command;

use std::{
    fs::{self, OpenOptions},
    io,
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::Parser;
use grocery_core::{config::AppConfig, cook_book};
use tracing::info;
use tracing_subscriber::{prelude::*, EnvFilter};

const LOG_FILE: &str = "grocery-helper.log";

/// Plan meals from a cook book and build a combined shopping list.
#[derive(Debug, Parser)]
#[command(name = "grocery-helper", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter (overrides the configured level; RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    init_logging(&config)?;

    let mut session = app::Session::new(cook_book::builtin()?);
    let stdin = io::stdin();
    session.run(&mut stdin.lock(), &mut io::stdout().lock())?;

    info!(
        planned = session.meal_plan().len(),
        listed = ?session.shopping_list().map(|list| list.len()),
        "exiting"
    );
    Ok(())
}

/// Log to a file only; stdout carries the interactive prompt.
fn init_logging(config: &AppConfig) -> Result<()> {
    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create {}", config.log_dir.display()))?;
    let log_path = config.log_dir.join(LOG_FILE);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.log_level)
            .with_context(|| format!("invalid log level '{}'", config.log_level))?,
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .compact()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
