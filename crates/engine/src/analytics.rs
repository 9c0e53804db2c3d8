//! Per-difficulty aggregation over a response log.
//!
//! Pure functions over a possibly-partial log; nothing here requires a
//! completed session, so mid-quiz analytics come for free.

use serde::Serialize;

use quiz_core::model::{Difficulty, Response};

/// Summary statistics for one difficulty bucket.
///
/// The empty bucket is defined, not an error: both metrics are 0.0 when
/// no responses of the difficulty exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DifficultyStats {
    pub total: u32,
    pub correct: u32,
    /// Mean elapsed seconds over the bucket's responses.
    pub average_time_secs: f64,
    /// `correct / total * 100`.
    pub accuracy_percent: f64,
}

impl DifficultyStats {
    const EMPTY: DifficultyStats = DifficultyStats {
        total: 0,
        correct: 0,
        average_time_secs: 0.0,
        accuracy_percent: 0.0,
    };
}

/// Per-difficulty statistics derived from a response log.
///
/// Recomputed on demand and never stored on the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsSummary {
    easy: DifficultyStats,
    medium: DifficultyStats,
    hard: DifficultyStats,
}

impl AnalyticsSummary {
    #[must_use]
    pub fn stats(&self, difficulty: Difficulty) -> &DifficultyStats {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Buckets in Easy → Hard order.
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, &DifficultyStats)> {
        Difficulty::ALL.iter().map(|d| (*d, self.stats(*d)))
    }
}

fn bucket_stats(responses: &[Response], difficulty: Difficulty) -> DifficultyStats {
    let bucket: Vec<&Response> = responses
        .iter()
        .filter(|r| r.difficulty == difficulty)
        .collect();
    if bucket.is_empty() {
        return DifficultyStats::EMPTY;
    }

    let total = bucket.len() as u32;
    let correct = bucket.iter().filter(|r| r.is_correct).count() as u32;
    let time_sum: f64 = bucket.iter().map(|r| r.elapsed_seconds).sum();

    DifficultyStats {
        total,
        correct,
        average_time_secs: time_sum / f64::from(total),
        accuracy_percent: f64::from(correct) / f64::from(total) * 100.0,
    }
}

/// Partition a response log by difficulty and compute accuracy and mean
/// response time per bucket.
#[must_use]
pub fn summarize(responses: &[Response]) -> AnalyticsSummary {
    AnalyticsSummary {
        easy: bucket_stats(responses, Difficulty::Easy),
        medium: bucket_stats(responses, Difficulty::Medium),
        hard: bucket_stats(responses, Difficulty::Hard),
    }
}

/// True iff the log is non-empty and contains no correct response.
///
/// Drives the degraded results styling; false for an empty log.
#[must_use]
pub fn all_incorrect(responses: &[Response]) -> bool {
    !responses.is_empty() && responses.iter().all(|r| !r.is_correct)
}

/// Elapsed seconds per question, in answer order. Feeds the
/// time-per-question chart.
#[must_use]
pub fn time_per_question(responses: &[Response]) -> Vec<f64> {
    responses.iter().map(|r| r.elapsed_seconds).collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
