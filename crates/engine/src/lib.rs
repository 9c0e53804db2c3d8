#![forbid(unsafe_code)]

pub mod analytics;
pub mod bank;
pub mod error;
pub mod progress;
pub mod session;
pub mod view;

pub use quiz_core::Clock;

pub use analytics::{AnalyticsSummary, DifficultyStats, all_incorrect, summarize, time_per_question};
pub use bank::QuestionBank;
pub use error::{CatalogError, SessionError};
pub use progress::SessionProgress;
pub use session::QuizSession;
pub use view::{ResultsView, ReviewItem};
