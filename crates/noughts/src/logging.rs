//! Tracing setup.

use crate::Cli;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Installs a file-backed tracing subscriber.
///
/// `RUST_LOG` (possibly set through `.env`) wins over `--log-level`.
pub fn init_tracing(cli: &Cli) -> Result<()> {
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
