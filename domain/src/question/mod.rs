//! Question domain - the quiz item aggregate
//!
//! - [`entities::Question`] — aggregate root owning its choices
//! - [`entities::Choice`] — an answer option, only reachable through its Question
//! - [`value_objects`] — Question and Choice identifiers
//! - [`policy`] — length limits and construction defaults

pub mod entities;
pub mod policy;
pub mod value_objects;
