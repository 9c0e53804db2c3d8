use chrono::{DateTime, Utc};

use crate::model::ids::QuestionId;
use crate::model::question::{Difficulty, Question};

/// Record of a single answered question within a session.
///
/// Created exactly once per submission and appended to the session's
/// response log in answer order; never removed or mutated afterwards.
/// Question data is copied in at creation so the record stands on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub question_id: QuestionId,
    pub question_text: String,
    pub selected_option: String,
    pub correct_option: String,
    pub difficulty: Difficulty,
    /// Seconds from question display to submission. Never negative.
    pub elapsed_seconds: f64,
    pub is_correct: bool,
    pub is_image_based: bool,
    pub answered_at: DateTime<Utc>,
}

impl Response {
    /// Build a response for `question`, deriving correctness by comparing
    /// the selected option against the question's correct option.
    #[must_use]
    pub fn new(
        question: &Question,
        selected_option: impl Into<String>,
        elapsed_seconds: f64,
        answered_at: DateTime<Utc>,
    ) -> Self {
        let selected_option = selected_option.into();
        let is_correct = selected_option == question.correct_option();
        Self {
            question_id: question.id(),
            question_text: question.text().to_owned(),
            selected_option,
            correct_option: question.correct_option().to_owned(),
            difficulty: question.difficulty(),
            elapsed_seconds: elapsed_seconds.max(0.0),
            is_correct,
            is_image_based: question.is_image_based(),
            answered_at,
        }
    }
}
