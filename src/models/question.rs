use serde::Serialize;

use crate::ids;
use crate::models::choice::{self, Choice};
use crate::ValidationError;

/// Maximum title length in characters.
const MAX_TITLE_LENGTH: usize = 200;
/// Inclusive points range.
const MIN_POINTS: u32 = 1;
const MAX_POINTS: u32 = 100;

const DEFAULT_POINTS: u32 = 1;
const DEFAULT_MAX_SELECTIONS: u32 = 1;

/// A multiple-choice quiz question.
///
/// Owns its [`Choice`]s outright: choices are created through
/// [`add_choice`](Question::add_choice) and never shared between questions.
/// Construction validates every field up front, so a `Question` that exists
/// is a valid one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: u64,
    title: String,
    points: u32,
    max_selections: u32,
    choices: Vec<Choice>,
}

impl Question {
    /// Create a question worth 1 point with a single allowed selection.
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_options(title, DEFAULT_POINTS, DEFAULT_MAX_SELECTIONS)
    }

    /// Create a question with explicit points and selection limit.
    ///
    /// Fails with [`ValidationError`] when the title is empty or longer than
    /// 200 characters, when points fall outside [1, 100], or when
    /// `max_selections` is zero. A fresh process-wide id is consumed only
    /// after validation passes.
    pub fn with_options(
        title: impl Into<String>,
        points: u32,
        max_selections: u32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let len = title.chars().count();

        if len == 0 {
            return Err(ValidationError::EmptyTitle);
        }
        if len > MAX_TITLE_LENGTH {
            return Err(ValidationError::TitleTooLong { len });
        }
        if !(MIN_POINTS..=MAX_POINTS).contains(&points) {
            return Err(ValidationError::PointsOutOfRange { points });
        }
        if max_selections == 0 {
            return Err(ValidationError::ZeroMaxSelections);
        }

        Ok(Self {
            id: ids::next_question_id(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> u32 {
        self.max_selections
    }

    /// Choices in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Create a choice with a fresh id and append it to this question.
    ///
    /// Returns a reference to the stored choice so the caller can read the
    /// id it was assigned. Fails with [`ValidationError`] when `text` is
    /// invalid, in which case no id is consumed and the question is
    /// unchanged.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<&Choice, ValidationError> {
        let text = text.into();
        // Validate before taking an id so a rejected choice never burns one.
        choice::validate_text(&text)?;

        let choice = Choice::new(ids::next_choice_id(), text, is_correct)?;
        self.choices.push(choice);
        let index = self.choices.len() - 1;
        Ok(&self.choices[index])
    }

    /// Remove the choice with the given id, if this question owns it.
    ///
    /// Missing ids are a no-op, and removal never returns an id to the
    /// generator.
    pub fn remove_choice_by_id(&mut self, choice_id: u64) {
        self.choices.retain(|choice| choice.id() != choice_id);
    }

    /// Remove every choice. Never an error, even when already empty.
    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
    }

    /// Score a submitted selection.
    ///
    /// Returns the subsequence of `choice_ids` whose choice exists on this
    /// question and is marked correct, preserving the input order. Ids that
    /// match nothing, or match an incorrect choice, are dropped silently.
    /// `max_selections` is not enforced here; oversized selections are
    /// scored as given.
    pub fn select_choices(&self, choice_ids: &[u64]) -> Vec<u64> {
        choice_ids
            .iter()
            .copied()
            .filter(|id| {
                self.choices
                    .iter()
                    .any(|choice| choice.id() == *id && choice.is_correct())
            })
            .collect()
    }

    /// Replace the correctness assignment for the whole question.
    ///
    /// Every owned choice becomes correct exactly when its id appears in
    /// `choice_ids`; all others are reset to incorrect. Unknown ids match no
    /// owned choice and are ignored.
    pub fn set_correct_choices(&mut self, choice_ids: &[u64]) {
        for choice in &mut self.choices {
            choice.set_correct(choice_ids.contains(&choice.id()));
        }
    }
}
