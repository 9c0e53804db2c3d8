//! Shared error types for the engine crate.

use thiserror::Error;

use quiz_core::model::QuestionError;
use quiz_core::scoring::ScoringError;

/// Errors raised while constructing a question catalog. Fatal at load
/// time; a session cannot start on a malformed catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question catalog is empty")]
    Empty,
    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Errors raised by `QuizSession` operations.
///
/// All variants are logic errors, not transient failures: they propagate
/// to the caller unretried, and the failed operation leaves session state
/// exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session has not been started")]
    NotStarted,
    #[error("session already completed")]
    Completed,
    #[error("selected option {selected:?} is not among the current question's options")]
    InvalidOption { selected: String },
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}
