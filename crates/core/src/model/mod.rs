mod ids;
mod mode;
mod question;

pub use ids::QuestionId;
pub use mode::{HintTier, Level, Mode};
pub use question::{Question, QuestionError};
