//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Levels accepted by the `level` field.
pub const VALID_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Raw logging configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Maximum level emitted (`error`, `warn`, `info`, `debug`, `trace`)
    pub level: String,
    /// Enable ANSI colors in log output
    pub ansi: bool,
}

impl Default for FileLoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            ansi: true,
        }
    }
}

impl FileLoggingConfig {
    /// Whether `level` is one of [`VALID_LEVELS`] (case-insensitive).
    pub fn has_valid_level(&self) -> bool {
        VALID_LEVELS.contains(&self.level.to_lowercase().as_str())
    }
}
