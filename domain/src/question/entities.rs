//! Question aggregate and its Choice entities
//!
//! [`Question`] is the aggregate root. [`Choice`] values exist only inside
//! a Question: they are created by [`Question::add_choice`], destroyed by
//! [`Question::remove_choice_by_id`] / [`Question::remove_all_choices`], and
//! can only be mutated through the Question.
//!
//! # Identity
//!
//! ```text
//! add "A" -> 1   add "B" -> 2   add "C" -> 3
//! remove 2
//! add "D" -> 4   (never 3, never 2)
//! ```
//!
//! Choice ids come from `next_choice_id`, a per-Question counter that is
//! bumped on every successful add and left alone by removals.

use super::policy::{CHOICE_TEXT_MAX_CHARS, QuestionPolicy, TITLE_MAX_CHARS};
use super::value_objects::{ChoiceId, QuestionId};
use crate::core::error::{DomainError, Result, ValidationError};
use crate::core::string::check_length;
use serde::Serialize;
use tracing::{debug, trace};

/// An answer option owned by a [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

/// A quiz item (Aggregate Root)
///
/// Holds a validated title, scoring settings and an ordered list of
/// [`Choice`]s. All invariants on titles, choice texts and identifiers are
/// enforced here; a failed operation leaves the Question unchanged.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    next_choice_id: u32,
}

impl Question {
    /// Create a question using the default [`QuestionPolicy`].
    ///
    /// Fails if the title is empty or longer than 200 characters.
    pub fn new(title: impl Into<String>) -> Result<Self> {
        Self::with_policy(title, &QuestionPolicy::default())
    }

    /// Create a question whose points and max selections come from `policy`.
    pub fn with_policy(title: impl Into<String>, policy: &QuestionPolicy) -> Result<Self> {
        let title = title.into();
        check_length("title", &title, TITLE_MAX_CHARS)?;

        // Only allocate once validation has passed so failures burn no ids.
        let question = Self {
            id: QuestionId::next(),
            title,
            points: policy.default_points(),
            max_selections: policy.default_max_selections(),
            choices: Vec::new(),
            next_choice_id: 1,
        };
        debug!(question_id = %question.id, "Question created");
        Ok(question)
    }

    // ==================== Builder Methods ====================

    pub fn with_points(mut self, points: u32) -> Self {
        self.points = points;
        self
    }

    pub fn with_max_selections(mut self, max_selections: usize) -> Self {
        self.max_selections = max_selections;
        self
    }

    // ==================== Accessors ====================

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// Live choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Look up a live choice by id.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == id)
    }

    /// Ids of all live correct choices, in insertion order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|c| c.is_correct)
            .map(|c| c.id)
            .collect()
    }

    /// The id the next successful [`add_choice`](Self::add_choice) will assign.
    pub fn next_choice_id(&self) -> ChoiceId {
        ChoiceId::new(self.next_choice_id)
    }

    // ==================== Choice Lifecycle ====================

    /// Append a new choice and return it.
    ///
    /// Fails if the text is empty or longer than 100 characters, or if the
    /// id counter is exhausted. On failure neither the choices nor the id
    /// counter change.
    pub fn add_choice(&mut self, text: impl Into<String>, is_correct: bool) -> Result<&Choice> {
        let text = text.into();
        check_length("choice text", &text, CHOICE_TEXT_MAX_CHARS)?;

        // The counter never wraps: a wrapped value would reissue retired ids.
        let next = self
            .next_choice_id
            .checked_add(1)
            .ok_or(DomainError::ChoiceIdsExhausted)?;
        let id = ChoiceId::new(self.next_choice_id);
        self.next_choice_id = next;
        self.choices.push(Choice {
            id,
            text,
            is_correct,
        });
        debug!(question_id = %self.id, choice_id = %id, is_correct, "Choice added");

        Ok(&self.choices[self.choices.len() - 1])
    }

    /// Remove the live choice with `choice_id`, returning it.
    ///
    /// The remaining choices keep their relative order. The removed id is
    /// retired and will not be issued again.
    pub fn remove_choice_by_id(&mut self, choice_id: ChoiceId) -> Result<Choice> {
        let index = self
            .choices
            .iter()
            .position(|c| c.id == choice_id)
            .ok_or(DomainError::ChoiceNotFound(choice_id))?;

        let removed = self.choices.remove(index);
        debug!(question_id = %self.id, choice_id = %choice_id, "Choice removed");
        Ok(removed)
    }

    /// Remove every choice. The id counter keeps counting from where it was.
    pub fn remove_all_choices(&mut self) {
        let count = self.choices.len();
        self.choices.clear();
        debug!(question_id = %self.id, count, "All choices removed");
    }

    // ==================== Answers ====================

    /// Filter a submitted selection down to the ids of correct choices.
    ///
    /// Submission order is preserved. Ids that are unknown, retired, or
    /// belong to an incorrect choice are dropped without error. Submitting
    /// more ids than `max_selections` is rejected.
    pub fn select_choices(&self, choice_ids: &[ChoiceId]) -> Result<Vec<ChoiceId>> {
        if choice_ids.len() > self.max_selections {
            return Err(ValidationError::TooManySelections {
                submitted: choice_ids.len(),
                max: self.max_selections,
            }
            .into());
        }

        let correct: Vec<ChoiceId> = choice_ids
            .iter()
            .copied()
            .filter(|id| self.choice(*id).is_some_and(Choice::is_correct))
            .collect();
        trace!(
            question_id = %self.id,
            submitted = choice_ids.len(),
            correct = correct.len(),
            "Selection evaluated"
        );
        Ok(correct)
    }

    /// Mark exactly the given choices as correct and every other live
    /// choice as incorrect. Unknown ids are ignored.
    pub fn set_correct_choices(&mut self, choice_ids: &[ChoiceId]) {
        for choice in &mut self.choices {
            choice.is_correct = choice_ids.contains(&choice.id);
        }
        debug!(
            question_id = %self.id,
            correct = ?self.correct_choice_ids(),
            "Correct choices set"
        );
    }
}
