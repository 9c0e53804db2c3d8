mod ids;
mod question;
mod response;

pub use ids::QuestionId;
pub use question::{Difficulty, Question, QuestionDraft, QuestionError};
pub use response::Response;
