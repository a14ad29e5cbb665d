//! Shared error types for the services crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use decks::DeckLoadError;

/// Errors emitted by `DeckService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckServiceError {
    #[error("no deck named {name:?} in {}", directory.display())]
    UnknownDeck { name: String, directory: PathBuf },

    #[error(transparent)]
    Load(#[from] DeckLoadError),

    #[error("failed to scan deck directory")]
    Scan(#[from] io::Error),
}

/// Sequencing errors from `QuizSession`.
///
/// These mark caller bugs, not user-facing conditions: the UI disables the
/// corresponding inputs instead of surfacing them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("session is already complete")]
    Complete,

    #[error("session is not complete yet")]
    NotComplete,

    #[error("current question was already answered")]
    AlreadyAnswered,

    #[error("choice {selected} is out of range for {choices} choices")]
    InvalidChoice { selected: usize, choices: usize },
}
