mod plan;
mod progress;
mod session;

pub use plan::PresentedQuestion;
pub use progress::SessionProgress;
pub use session::{AnswerOutcome, CurrentQuestion, QuizSession, SessionResult};
