use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::Difficulty;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoringError {
    #[error("no scoring weight configured for difficulty {0}")]
    UnknownDifficulty(Difficulty),

    #[error("scoring weight for difficulty {0} must be > 0")]
    ZeroWeight(Difficulty),

    #[error("scoring weights are missing difficulty {0}")]
    MissingDifficulty(Difficulty),
}

//
// ─── WEIGHTS ───────────────────────────────────────────────────────────────────
//

/// Mapping from difficulty to a positive point value.
///
/// Fixed for the process lifetime; sessions take a copy at construction.
/// Expressed as data so weights are adjustable without touching the
/// session logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringWeights {
    weights: BTreeMap<Difficulty, u32>,
}

impl Default for ScoringWeights {
    /// {Easy: 1, Medium: 2, Hard: 3}
    fn default() -> Self {
        Self {
            weights: BTreeMap::from([
                (Difficulty::Easy, 1),
                (Difficulty::Medium, 2),
                (Difficulty::Hard, 3),
            ]),
        }
    }
}

impl ScoringWeights {
    /// Build a weight table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::ZeroWeight` for a non-positive weight and
    /// `ScoringError::MissingDifficulty` when any difficulty is left
    /// without an entry.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (Difficulty, u32)>,
    ) -> Result<Self, ScoringError> {
        let weights: BTreeMap<Difficulty, u32> = entries.into_iter().collect();

        for (difficulty, weight) in &weights {
            if *weight == 0 {
                return Err(ScoringError::ZeroWeight(*difficulty));
            }
        }
        for difficulty in Difficulty::ALL {
            if !weights.contains_key(&difficulty) {
                return Err(ScoringError::MissingDifficulty(difficulty));
            }
        }

        Ok(Self { weights })
    }

    /// Point value awarded for a correct answer at the given difficulty.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::UnknownDifficulty` when the table has no
    /// entry. Unreachable with a table built by `from_entries` or
    /// `default()`, but an unknown value is never silently scored as 0.
    pub fn weight_of(&self, difficulty: Difficulty) -> Result<u32, ScoringError> {
        self.weights
            .get(&difficulty)
            .copied()
            .ok_or(ScoringError::UnknownDifficulty(difficulty))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_match_reference_values() {
        let weights = ScoringWeights::default();
        assert_eq!(weights.weight_of(Difficulty::Easy).unwrap(), 1);
        assert_eq!(weights.weight_of(Difficulty::Medium).unwrap(), 2);
        assert_eq!(weights.weight_of(Difficulty::Hard).unwrap(), 3);
    }

    #[test]
    fn zero_weight_is_rejected() {
        let err = ScoringWeights::from_entries([
            (Difficulty::Easy, 0),
            (Difficulty::Medium, 2),
            (Difficulty::Hard, 3),
        ])
        .unwrap_err();
        assert_eq!(err, ScoringError::ZeroWeight(Difficulty::Easy));
    }

    #[test]
    fn missing_difficulty_is_rejected() {
        let err =
            ScoringWeights::from_entries([(Difficulty::Easy, 1), (Difficulty::Medium, 2)])
                .unwrap_err();
        assert_eq!(err, ScoringError::MissingDifficulty(Difficulty::Hard));
    }

    #[test]
    fn custom_weights_are_honored() {
        let weights = ScoringWeights::from_entries([
            (Difficulty::Easy, 5),
            (Difficulty::Medium, 10),
            (Difficulty::Hard, 20),
        ])
        .unwrap();
        assert_eq!(weights.weight_of(Difficulty::Hard).unwrap(), 20);
    }
}
