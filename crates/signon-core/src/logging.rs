//! File-backed tracing setup.
//!
//! The TUI owns the terminal, so log output goes to a daily-rolling file
//! under the signon home directory instead of stderr. Filtering follows
//! RUST_LOG with an `info` default.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initializes the global tracing subscriber writing to `dir`.
///
/// Returns the appender guard; dropping it flushes and stops the background
/// writer, so callers keep it alive for the life of the process.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = rolling::daily(dir, "signon.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(guard)
}
