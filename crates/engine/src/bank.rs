use rand::Rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Difficulty, Question, QuestionDraft, QuestionId};

use crate::error::CatalogError;

/// Immutable catalog of validated questions.
///
/// Owns the questions for the lifetime of the process; sessions take a
/// shuffled snapshot at start and never write back.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Create a bank from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty catalog.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        if questions.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { questions })
    }

    /// Create a bank from drafts, assigning sequential ids in load order.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty catalog and
    /// `CatalogError::Question` for a malformed draft, e.g. a correct
    /// option absent from the options.
    pub fn from_drafts(
        drafts: impl IntoIterator<Item = QuestionDraft>,
    ) -> Result<Self, CatalogError> {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| draft.validate(QuestionId::new(i as u64 + 1)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// The six-question catalog shipped with the reference build: two per
    /// difficulty, one of them image-based.
    ///
    /// # Panics
    ///
    /// Never; the built-in catalog is well-formed.
    #[must_use]
    pub fn reference_catalog() -> Self {
        let drafts = vec![
            QuestionDraft::new(
                "Which algorithm is used to find the shortest path in a weighted graph \
                 with non-negative weights?",
                [
                    "Dijkstra's algorithm",
                    "Bellman-Ford algorithm",
                    "Floyd-Warshall algorithm",
                    "Kruskal's algorithm",
                ],
                "Dijkstra's algorithm",
                Difficulty::Hard,
            ),
            QuestionDraft::new(
                "Solve: 3x = 27",
                ["6", "7", "8", "9"],
                "9",
                Difficulty::Medium,
            ),
            QuestionDraft::new(
                "What is the capital of France?",
                ["London", "Berlin", "Paris", "Madrid"],
                "Paris",
                Difficulty::Easy,
            ),
            QuestionDraft::new(
                "Find the next shape in the series: Square, Triangle, Pentagon, __?",
                ["Hexagon", "Heptagon", "Octagon", "Nonagon"],
                "Heptagon",
                Difficulty::Hard,
            ),
            QuestionDraft::new(
                "Which shape is a triangle?",
                ["triangle.png", "circle.png", "square.png", "hexagon.png"],
                "triangle.png",
                Difficulty::Easy,
            )
            .image_based(),
            QuestionDraft::new(
                "Which is the largest desert in the world?",
                ["Sahara", "Antarctica", "Gobi", "Kalahari"],
                "Antarctica",
                Difficulty::Medium,
            ),
        ];

        Self::from_drafts(drafts).expect("reference catalog is well-formed")
    }

    /// Questions in load order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// A uniformly random permutation of the catalog.
    ///
    /// The RNG is injected so callers can fix a seed and get a
    /// reproducible ordering; the bank itself is left untouched.
    #[must_use]
    pub fn shuffled_order<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        let mut order = self.questions.clone();
        order.as_mut_slice().shuffle(rng);
        order
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
