//! Core domain concepts shared across the crate.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`error::ValidationError`] — constraint violations on input
//! - [`string`] — character-based length checks

pub mod error;
pub mod string;
