mod analytics;
mod config;
mod error;
mod export;
mod filter;
mod models;
mod run;
mod storage;
mod store;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    let db_path = config.db_path()?;
    let storage = storage::SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
    let mut store = store::BudgetStore::new(storage, store::SystemClock, config.status_mode);

    run::as_cli(&args, &mut store)
}

/// Diagnostics go to stderr so command output stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
