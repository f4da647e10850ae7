use serde::Serialize;

use crate::ValidationError;

/// Maximum choice text length in characters.
const MAX_TEXT_LENGTH: usize = 100;

/// Check the text constraint without constructing anything, so callers can
/// validate before consuming an id.
pub(crate) fn validate_text(text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();

    if len == 0 {
        return Err(ValidationError::EmptyChoiceText);
    }
    if len > MAX_TEXT_LENGTH {
        return Err(ValidationError::ChoiceTextTooLong { len });
    }
    Ok(())
}

/// One selectable answer option belonging to a [`Question`].
///
/// A Choice is validated at construction and immutable afterwards, except
/// for its correctness flag, which the owning Question rewrites through
/// [`Question::set_correct_choices`].
///
/// [`Question`]: crate::Question
/// [`Question::set_correct_choices`]: crate::Question::set_correct_choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    id: u64,
    text: String,
    is_correct: bool,
}

impl Choice {
    /// Create a choice with a caller-supplied id.
    ///
    /// Fails with [`ValidationError`] when `text` is empty or longer than
    /// 100 characters. The id is stored as given; uniqueness is the id
    /// generator's invariant, not this constructor's.
    pub fn new(
        id: u64,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        validate_text(&text)?;

        Ok(Self {
            id,
            text,
            is_correct,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    /// Rewrite the correctness flag. Only the owning Question may do this,
    /// via its bulk `set_correct_choices` operation.
    pub(crate) fn set_correct(&mut self, is_correct: bool) {
        self.is_correct = is_correct;
    }
}
