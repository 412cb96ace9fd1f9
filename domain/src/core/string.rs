//! String utilities for the domain layer.

use crate::core::error::ValidationError;

/// Length of a string in characters (Unicode scalar values), not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Check that `value` is non-empty and at most `max` characters long.
///
/// `field` names the input in the resulting error.
pub fn check_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let actual = char_len(value);
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(())
}
