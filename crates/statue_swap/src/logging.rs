//! Tracing subscriber setup for each front end.

use crate::config::StatueSwapConfig;
use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn env_filter(config: &StatueSwapConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Sends logs to the configured file so they do not draw over the TUI.
pub fn init_file_logging(config: &StatueSwapConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Sends logs to stderr, keeping stdout for script output.
pub fn init_stderr_logging(config: &StatueSwapConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
