//! # quiz-core
//!
//! An in-memory model for multiple-choice quiz questions.
//!
//! A [`Question`] owns an ordered collection of [`Choice`]s, validates its
//! own fields at construction time, and scores submitted selections against
//! the choices marked correct. There is no persistence or transport layer
//! here; this crate is the core other layers build on.
//!
//! ## Usage
//!
//! ```rust
//! use quiz_core::{Question, ValidationError};
//!
//! fn main() -> Result<(), ValidationError> {
//!     let mut question = Question::with_options("Which keyword binds a value?", 5, 1)?;
//!
//!     let wrong = question.add_choice("fn", false)?.id();
//!     let right = question.add_choice("let", true)?.id();
//!
//!     // Only ids of correct choices survive scoring.
//!     assert_eq!(question.select_choices(&[wrong, right]), vec![right]);
//!     Ok(())
//! }
//! ```

mod ids;
mod models;

pub use models::{Choice, Question};

/// Error type for failed Question or Choice construction.
///
/// Validation runs before an id is consumed, so a rejected entity never
/// becomes visible and never burns a generator value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Question title is empty.
    EmptyTitle,
    /// Question title exceeds 200 characters.
    TitleTooLong { len: usize },
    /// Question points are outside the [1, 100] range.
    PointsOutOfRange { points: u32 },
    /// Question max_selections is zero.
    ZeroMaxSelections,
    /// Choice text is empty.
    EmptyChoiceText,
    /// Choice text exceeds 100 characters.
    ChoiceTextTooLong { len: usize },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "title must not be empty"),
            ValidationError::TitleTooLong { len } => {
                write!(f, "title must be at most 200 characters, got {}", len)
            }
            ValidationError::PointsOutOfRange { points } => {
                write!(f, "points must be between 1 and 100, got {}", points)
            }
            ValidationError::ZeroMaxSelections => {
                write!(f, "max_selections must be at least 1")
            }
            ValidationError::EmptyChoiceText => write!(f, "choice text must not be empty"),
            ValidationError::ChoiceTextTooLong { len } => {
                write!(f, "choice text must be at most 100 characters, got {}", len)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
