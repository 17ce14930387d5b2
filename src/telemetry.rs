//! Tracing subscriber setup.
//!
//! `RUST_LOG` takes precedence over the `--log-level` fallback. The desktop
//! frontend logs to stderr; the terminal frontend writes to a file so log
//! lines never land on the alternate screen.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Builds the filter from `RUST_LOG`, falling back to `default`.
pub fn env_filter(default: &str) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref(), default)
}

/// A parseable `rust_log` wins; otherwise `default` is used.
pub fn filter_from(rust_log: Option<&str>, default: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}

/// Logs to stderr.
pub fn init_stderr(default: &str) {
    // Ignore a second initialisation (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Creates (or truncates) the log file for the terminal frontend.
pub fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))
}

/// Logs to a file with ANSI colours disabled.
pub fn init_file(default: &str, path: &Path) -> Result<()> {
    let log_file = open_log_file(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
