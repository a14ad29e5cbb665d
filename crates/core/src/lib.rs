#![forbid(unsafe_code)]

pub mod model;

pub use model::{AnswerKey, Deck, DeckError, Question, QuestionDraft, QuestionError};
