//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod logging;
mod question;

pub use logging::{FileLoggingConfig, VALID_LEVELS};
pub use question::FileQuestionConfig;

use super::issue::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Question construction defaults
    pub question: FileQuestionConfig,
    /// Logging settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Question policy constraints
    /// 2. Logging level names
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Question policy
        issues.extend(self.question.to_policy().1);

        // 2. Logging level
        if !self.logging.has_valid_level() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::InvalidEnumValue {
                    field: "logging.level".to_string(),
                    value: self.logging.level.clone(),
                    valid_values: VALID_LEVELS.iter().map(|s| s.to_string()).collect(),
                },
                message: format!(
                    "logging.level: unknown value '{}', falling back to 'warn'",
                    self.logging.level
                ),
            });
        }

        issues
    }
}
