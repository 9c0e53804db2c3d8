//! Presentation-agnostic results and review types.
//!
//! These are intentionally **not** UI view-models: no pre-formatted
//! strings, no localization assumptions, no widget concerns. The
//! presentation layer decides how to render image-asset references,
//! colors for the all-incorrect branch, and time formatting.

use serde::Serialize;

use quiz_core::model::{Difficulty, Response};

use crate::analytics::{AnalyticsSummary, all_incorrect, summarize};
use crate::session::QuizSession;

/// One response log entry, shaped for the answer-review screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewItem {
    pub question_text: String,
    pub selected_option: String,
    pub correct_option: String,
    pub difficulty: Difficulty,
    pub is_correct: bool,
    /// When set, `selected_option` / `correct_option` are image-asset
    /// references the presentation layer must resolve.
    pub is_image_based: bool,
    pub elapsed_seconds: f64,
}

impl ReviewItem {
    #[must_use]
    pub fn from_response(response: &Response) -> Self {
        Self {
            question_text: response.question_text.clone(),
            selected_option: response.selected_option.clone(),
            correct_option: response.correct_option.clone(),
            difficulty: response.difficulty,
            is_correct: response.is_correct,
            is_image_based: response.is_image_based,
            elapsed_seconds: response.elapsed_seconds,
        }
    }
}

/// Everything the results screen needs, derived from the session in one
/// pass.
///
/// Well-defined for a partial session too (`is_complete` tells the
/// caller which screen it is building); recomputed on demand, never
/// cached on the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub score: u32,
    pub answered: usize,
    pub total: usize,
    pub is_complete: bool,
    pub all_incorrect: bool,
    pub analytics: AnalyticsSummary,
    pub review: Vec<ReviewItem>,
}

impl ResultsView {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let log = session.responses();
        Self {
            score: session.score(),
            answered: session.answered_count(),
            total: session.total_questions(),
            is_complete: session.is_complete(),
            all_incorrect: all_incorrect(log),
            analytics: summarize(log),
            review: log.iter().map(ReviewItem::from_response).collect(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
