mod deck;
mod question;

pub use deck::{Deck, DeckError};
pub use question::{AnswerKey, Question, QuestionDraft, QuestionError};
