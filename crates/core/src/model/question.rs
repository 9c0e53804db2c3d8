use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question needs at least two options, got {0}")]
    TooFewOptions(usize),

    #[error("duplicate option {0:?}")]
    DuplicateOption(String),

    #[error("correct option {0:?} is not among the options")]
    CorrectOptionMissing(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Three-level difficulty rating for quiz questions.
///
/// Drives both the scoring weight of a question and the analytics bucket
/// its responses are aggregated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order, for bucketed iteration.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        f.write_str(label)
    }
}

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated question data, as supplied by an embedder or a data file.
///
/// Option identifiers are opaque: display strings for text questions,
/// asset references (file names, resource keys) for image-based ones. The
/// engine only ever compares them for equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub is_image_based: bool,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        correct_option: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_option: correct_option.into(),
            difficulty,
            is_image_based: false,
        }
    }

    /// Marks the draft's options as image-asset references.
    ///
    /// Resolving a reference to a renderable image is the presentation
    /// layer's job; scoring compares references by equality regardless.
    #[must_use]
    pub fn image_based(mut self) -> Self {
        self.is_image_based = true;
        self
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyText` for blank question text,
    /// `QuestionError::TooFewOptions` for fewer than two options,
    /// `QuestionError::DuplicateOption` for a repeated option, and
    /// `QuestionError::CorrectOptionMissing` when `correct_option` is not
    /// one of `options`.
    pub fn validate(self, id: QuestionId) -> Result<Question, QuestionError> {
        if self.text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions(self.options.len()));
        }

        let mut seen = HashSet::new();
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }

        if !self.options.contains(&self.correct_option) {
            return Err(QuestionError::CorrectOptionMissing(self.correct_option));
        }

        Ok(Question {
            id,
            text: self.text,
            options: self.options,
            correct_option: self.correct_option,
            difficulty: self.difficulty,
            is_image_based: self.is_image_based,
        })
    }
}

/// A validated, immutable quiz question.
///
/// Invariant: `correct_option` is always a member of `options`. Enforced at
/// construction by `QuestionDraft::validate`; no mutators exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_option: String,
    difficulty: Difficulty,
    is_image_based: bool,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.correct_option
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// True when the options are image-asset references rather than
    /// display strings. Presentation-only distinction.
    #[must_use]
    pub fn is_image_based(&self) -> bool {
        self.is_image_based
    }

    /// Membership test used to reject malformed answer submissions.
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
