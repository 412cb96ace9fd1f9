//! Domain layer for quiz-question
//!
//! This crate contains the Question aggregate and its supporting value
//! objects. It has no dependencies on infrastructure concerns and performs
//! no I/O.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A [`Question`] is the aggregate root of a quiz item. It owns an ordered
//! list of [`Choice`]s and is the only way to create, mutate or remove them.
//!
//! ## Identity
//!
//! - **QuestionId**: unique across the whole process, drawn from an atomic allocator
//! - **ChoiceId**: unique within one Question, monotonic, never reused after removal
//!
//! ## Selection
//!
//! A submitted answer is a list of choice ids. [`Question::select_choices`]
//! bounds its size by `max_selections` and returns the correct ids in it.
//!
//! ```
//! use quiz_domain::{ChoiceId, Question};
//!
//! let mut q = Question::new("Which are prime?").unwrap().with_max_selections(2);
//! let two = q.add_choice("2", true).unwrap().id();
//! let four = q.add_choice("4", false).unwrap().id();
//!
//! assert_eq!(q.select_choices(&[two, four]).unwrap(), vec![two]);
//! assert_eq!(four, ChoiceId::new(2));
//! ```

pub mod core;
pub mod question;

// Re-export commonly used types
pub use crate::core::error::{DomainError, Result, ValidationError};
pub use question::{
    entities::{Choice, Question},
    policy::{CHOICE_TEXT_MAX_CHARS, QuestionPolicy, TITLE_MAX_CHARS},
    value_objects::{ChoiceId, IdAllocator, QuestionId},
};
