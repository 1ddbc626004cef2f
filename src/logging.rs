//! Tracing subscriber setup
//!
//! The TUI owns stdout, so logs go to a file:
//! `<cache dir>/termfolio/termfolio.log`. The filter is read from
//! `TERMFOLIO_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TERMFOLIO_LOG";

/// Default log file location.
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("termfolio").join("termfolio.log"))
}

/// Install the global subscriber writing to `path`.
///
/// Returns an error if the file cannot be created or a subscriber is
/// already installed. Callers treat this as non-fatal.
pub fn init_global(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log dir {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    build_subscriber(file, env_filter()).try_init()?;
    Ok(())
}

/// Filter from `TERMFOLIO_LOG`, or `info` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Build a subscriber writing plain (uncolored) lines to `log_file`.
pub fn build_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}
