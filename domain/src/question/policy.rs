//! Question policy: length limits and construction defaults.
//!
//! The limits are fixed constants. The defaults for `points` and
//! `max_selections` are carried by [`QuestionPolicy`] so that the
//! infrastructure layer can load them from configuration.

use serde::{Deserialize, Serialize};

/// Maximum title length, in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Maximum choice text length, in characters.
pub const CHOICE_TEXT_MAX_CHARS: usize = 100;

/// Defaults applied when a Question is created without explicit overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPolicy {
    default_points: u32,
    default_max_selections: usize,
}

impl Default for QuestionPolicy {
    fn default() -> Self {
        Self {
            default_points: 1,
            default_max_selections: 1,
        }
    }
}

impl QuestionPolicy {
    /// Create a policy with explicit defaults.
    pub fn new(default_points: u32, default_max_selections: usize) -> Self {
        Self {
            default_points,
            default_max_selections,
        }
    }

    /// Create a policy, returning all constraint violations on failure.
    pub fn try_new(
        default_points: u32,
        default_max_selections: usize,
    ) -> Result<Self, Vec<String>> {
        let policy = Self::new(default_points, default_max_selections);
        let issues = policy.validate();
        if issues.is_empty() {
            Ok(policy)
        } else {
            Err(issues)
        }
    }

    // ==================== Accessors ====================

    pub fn default_points(&self) -> u32 {
        self.default_points
    }

    pub fn default_max_selections(&self) -> usize {
        self.default_max_selections
    }

    // ==================== Validation ====================

    /// Validate this policy, returning a list of issues.
    ///
    /// Rules:
    /// - `default_points >= 1`
    /// - `default_max_selections >= 1`
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.default_points == 0 {
            issues.push("default_points must be at least 1".to_string());
        }
        if self.default_max_selections == 0 {
            issues.push(
                "default_max_selections must be at least 1 (no selection could ever be submitted)"
                    .to_string(),
            );
        }
        issues
    }
}
