//! Gradebook — Entry Point
//!
//! Wiring sequence:
//! 1. Resolve and load gradebook.toml (defaults if absent)
//! 2. Init tracing (JSON structured logging on stderr)
//! 3. Open the JSONL store and load the registry (empty on failure)
//! 4. Run the interactive menu on stdin/stdout
//! 5. Menu exit or end of input saves the registry

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{self, BufReader};
use tracing::info;

use gradebook::adapters::persistence::JsonlStore;
use gradebook::config;
use gradebook::usecases::{Gradebook, Menu};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = config::loader::resolve_path(
        std::env::args().nth(1),
        std::env::var(config::loader::CONFIG_ENV_VAR).ok(),
    );
    let config = config::loader::load_or_default(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(config.app.log_level.to_ascii_lowercase())
            }),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    info!(
        name = %config.app.name,
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        data_file = %config.persistence.data_file,
        "Starting gradebook"
    );

    // ── 3. Load the registry ────────────────────────────────
    let store = Arc::new(JsonlStore::new(&config.persistence.data_file));
    let mut book = Gradebook::open(store).await;

    // ── 4. Interactive menu until exit ──────────────────────
    let mut menu = Menu::new(BufReader::new(io::stdin()), io::stdout());
    menu.run(&mut book).await.context("Console I/O failed")?;

    info!("Gradebook closed");
    Ok(())
}
