//! Identifier value objects for the Question aggregate
//!
//! Two kinds of identity live here:
//!
//! - [`QuestionId`] — unique across every Question created in the process,
//!   issued by the process-wide [`IdAllocator`] behind [`QuestionId::next`].
//! - [`ChoiceId`] — unique only within its owning Question. Issued by the
//!   Question's own counter, never by the global allocator.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic identifier source, safe to share between threads.
///
/// Values start at 1 and are never handed out twice for the lifetime of the
/// allocator.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator whose first issued value is 1.
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Issue the next value.
    pub fn allocate(&self) -> u64 {
        // Relaxed: only uniqueness is required, not ordering.
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// The value the next call to [`allocate`](Self::allocate) will return.
    #[cfg(test)]
    fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide source of Question identifiers. Resets only on restart.
static QUESTION_IDS: IdAllocator = IdAllocator::new();

/// Globally unique identifier of a Question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// Draw a fresh identifier from the process-wide allocator.
    pub fn next() -> Self {
        Self(QUESTION_IDS.allocate())
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a Choice, unique within its owning Question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceId(u32);

impl ChoiceId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}
