//! Question defaults from TOML (`[question]` section)

use crate::config::issue::{ConfigIssue, ConfigIssueCode, Severity};
use quiz_domain::QuestionPolicy;
use serde::{Deserialize, Serialize};

/// Question defaults from TOML.
///
/// Applied to every Question created through [`QuestionPolicy`] unless the
/// caller overrides them.
///
/// # Example
///
/// ```toml
/// [question]
/// default_points = 5
/// default_max_selections = 2
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionConfig {
    /// Points awarded for a question when none are given.
    pub default_points: u32,
    /// How many choice ids a selection may contain when not given.
    pub default_max_selections: usize,
}

impl Default for FileQuestionConfig {
    fn default() -> Self {
        let policy = QuestionPolicy::default();
        Self {
            default_points: policy.default_points(),
            default_max_selections: policy.default_max_selections(),
        }
    }
}

impl FileQuestionConfig {
    /// Convert to domain `QuestionPolicy`, returning validation issues.
    ///
    /// If the values violate constraints, falls back to `QuestionPolicy::default()`
    /// and returns warnings describing the issues.
    pub fn to_policy(&self) -> (QuestionPolicy, Vec<ConfigIssue>) {
        match QuestionPolicy::try_new(self.default_points, self.default_max_selections) {
            Ok(policy) => (policy, vec![]),
            Err(errors) => {
                let issues = errors
                    .into_iter()
                    .map(|msg| ConfigIssue {
                        severity: Severity::Warning,
                        code: ConfigIssueCode::InvalidConstraint {
                            field: "question".to_string(),
                        },
                        message: msg,
                    })
                    .collect();
                (QuestionPolicy::default(), issues)
            }
        }
    }
}
