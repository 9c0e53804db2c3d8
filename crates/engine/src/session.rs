use chrono::{DateTime, Utc};
use rand::Rng;

use quiz_core::model::{Question, Response};
use quiz_core::scoring::ScoringWeights;
use quiz_core::time::Clock;

use crate::bank::QuestionBank;
use crate::error::SessionError;
use crate::progress::SessionProgress;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    InProgress,
    Completed,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One run through a shuffled ordering of the question catalog.
///
/// Steps through the questions sequentially, recording a `Response` per
/// submission and accumulating a difficulty-weighted score. The only
/// mutating operations are `start` and `submit_answer`; everything else
/// is a read-only query.
///
/// Invariants, after every successful operation:
/// - `responses().len() == answered_count()`
/// - `score()` equals the summed weights of the correct responses
/// - `progress_fraction()` is non-decreasing and hits 1.0 exactly at
///   completion
///
/// Not designed for concurrent access; one session belongs to one
/// presentation context at a time.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    score: u32,
    responses: Vec<Response>,
    shown_at: Option<DateTime<Utc>>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
    phase: Phase,
    weights: ScoringWeights,
    clock: Clock,
}

impl QuizSession {
    /// Create a session in the not-started state.
    #[must_use]
    pub fn new(weights: ScoringWeights, clock: Clock) -> Self {
        Self {
            questions: Vec::new(),
            current: 0,
            score: 0,
            responses: Vec::new(),
            shown_at: None,
            started_at: None,
            completed_at: None,
            phase: Phase::NotStarted,
            weights,
            clock,
        }
    }

    /// Session with the reference weights and the system clock.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), Clock::default())
    }

    /// Begin (or restart) the session over a fresh shuffled snapshot of
    /// the bank.
    ///
    /// Valid from any state: calling `start` mid-quiz or after completion
    /// re-initializes everything, which is the retake behavior. The RNG is
    /// injected so tests can fix a seed.
    pub fn start<R: Rng + ?Sized>(&mut self, bank: &QuestionBank, rng: &mut R) {
        let now = self.clock.now();
        self.questions = bank.shuffled_order(rng);
        self.current = 0;
        self.score = 0;
        self.responses.clear();
        self.started_at = Some(now);
        self.completed_at = None;
        self.shown_at = Some(now);
        self.phase = Phase::InProgress;
    }

    /// The question currently awaiting an answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before `start` and
    /// `SessionError::Completed` once every question has been answered.
    pub fn current_question(&self) -> Result<&Question, SessionError> {
        match self.phase {
            Phase::NotStarted => Err(SessionError::NotStarted),
            Phase::Completed => Err(SessionError::Completed),
            Phase::InProgress => self
                .questions
                .get(self.current)
                .ok_or(SessionError::Completed),
        }
    }

    /// Record an answer for the current question and advance.
    ///
    /// Elapsed time runs from when the question was shown (the previous
    /// `start` or `submit_answer` call) to now; there is no upper bound.
    /// The operation is atomic: every failure path returns before any
    /// state is touched, so score, log, and position are unchanged after
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` / `SessionError::Completed`
    /// outside the in-progress state, `SessionError::InvalidOption` when
    /// `selected` is not one of the current question's options, and
    /// propagates `SessionError::Scoring` for a weight-table gap.
    pub fn submit_answer(&mut self, selected: &str) -> Result<&Response, SessionError> {
        match self.phase {
            Phase::NotStarted => return Err(SessionError::NotStarted),
            Phase::Completed => return Err(SessionError::Completed),
            Phase::InProgress => {}
        }
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if !question.has_option(selected) {
            return Err(SessionError::InvalidOption {
                selected: selected.to_owned(),
            });
        }

        // Resolve the weight before mutating anything so a scoring error
        // leaves no trace.
        let weight = self.weights.weight_of(question.difficulty())?;

        let now = self.clock.now();
        let shown_at = self.shown_at.unwrap_or(now);
        let elapsed = self.clock.seconds_since(shown_at);

        let response = Response::new(question, selected, elapsed, now);
        let is_correct = response.is_correct;
        self.responses.push(response);
        if is_correct {
            self.score += weight;
        }

        self.current += 1;
        if self.current == self.questions.len() {
            self.phase = Phase::Completed;
            self.completed_at = Some(now);
            self.shown_at = None;
        } else {
            self.shown_at = Some(now);
        }

        self.responses.last().ok_or(SessionError::Completed)
    }

    /// Fraction of the session answered so far, in `[0, 1]`.
    ///
    /// 0.0 for an empty snapshot; empty catalogs are rejected at bank
    /// construction, so that branch is a defensive fallback.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        self.current as f64 / self.questions.len() as f64
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Accumulated weighted score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Responses in answer order.
    #[must_use]
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    /// Total number of questions in this session's snapshot.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been answered.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// Number of remaining questions that have not been answered yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Aggregated progress view for the presentation layer.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Mutable access to the clock, so tests can advance a fixed clock
    /// between showing a question and answering it.
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
