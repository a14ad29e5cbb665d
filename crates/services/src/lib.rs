#![forbid(unsafe_code)]

pub mod deck_service;
pub mod error;
pub mod sessions;

pub use decks::{DeckEntry, DeckLoadError};

pub use deck_service::DeckService;
pub use error::{DeckServiceError, SessionError};
pub use sessions::{
    AnswerOutcome, CurrentQuestion, PresentedQuestion, QuizSession, SessionProgress, SessionResult,
};
