//! Infrastructure layer for quiz-question
//!
//! This crate contains the pieces that touch the outside world:
//! configuration file loading and the tracing subscriber.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigIssueCode, ConfigLoader, FileConfig, FileLoggingConfig,
    FileQuestionConfig, Severity,
};
pub use logging::{LoggingError, init_logging};
