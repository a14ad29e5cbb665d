mod deck_vm;
mod session_vm;

pub use deck_vm::{DeckItemVm, map_deck_entries};
pub use session_vm::{FeedbackVm, QuestionVm, ResultsVm, SessionPhase, SessionVm};
