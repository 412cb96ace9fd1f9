//! Logging infrastructure — tracing subscriber setup.
//!
//! The domain emits `tracing` events (question created, choice added, ...).
//! This module installs the global `fmt` subscriber that renders them,
//! driven by the `[logging]` config section.

use crate::config::FileLoggingConfig;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the global subscriber
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log filter '{directive}': {source}")]
    InvalidFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to install global subscriber: {0}")]
    AlreadyInitialized(String),
}

/// Map a `-v` count to a filter directive.
pub fn filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Build the filter for a config, falling back to `warn` for unknown levels.
pub fn build_filter(config: &FileLoggingConfig) -> Result<EnvFilter, LoggingError> {
    let directive = if config.has_valid_level() {
        config.level.to_lowercase()
    } else {
        filter_for_verbosity(0).to_string()
    };

    EnvFilter::try_new(&directive)
        .map_err(|source| LoggingError::InvalidFilter { directive, source })
}

/// Install the global tracing subscriber.
///
/// Fails if a global subscriber has already been set.
pub fn init_logging(config: &FileLoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(level = %config.level, "Logging initialized");
    Ok(())
}
