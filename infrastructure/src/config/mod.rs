//! Configuration file loading for quiz-question
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Explicitly passed file
//! 2. Project root: `./quiz.toml` or `./.quiz.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/quiz-question/config.toml`
//! 4. Default values

mod file_config;
mod issue;
mod loader;

pub use file_config::{FileConfig, FileLoggingConfig, FileQuestionConfig, VALID_LEVELS};
pub use issue::{ConfigIssue, ConfigIssueCode, Severity};
pub use loader::ConfigLoader;
