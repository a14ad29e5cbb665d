use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Deserialize;
use thiserror::Error;

use quiz_core::model::{AnswerKey, Deck, DeckError, QuestionDraft, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckLoadError {
    /// The path does not resolve to a readable file.
    #[error("deck file not found or unreadable: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The content is not a JSON document of the expected shape.
    #[error("deck file {} is not valid JSON", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Parseable JSON, but the deck data itself is invalid.
    #[error("deck file {} is malformed: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: MalformedDeck,
    },
}

/// Validation failures inside an otherwise well-formed deck document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedDeck {
    #[error("missing field {field:?}")]
    MissingField { field: &'static str },

    #[error("card {index}: missing field {field:?}")]
    MissingCardField { index: usize, field: &'static str },

    #[error("card {index}: {source}")]
    Question {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error(transparent)]
    Deck(#[from] DeckError),
}

//
// ─── FILE SHAPE ────────────────────────────────────────────────────────────────
//

// Every field is optional at the serde layer so that a structurally valid
// document with missing fields reports `Malformed` (with the field name)
// rather than a generic parse failure.
#[derive(Debug, Deserialize)]
struct DeckFile {
    title: Option<String>,
    cards: Option<Vec<CardEntry>>,
}

#[derive(Debug, Deserialize)]
struct CardEntry {
    question: Option<String>,
    choices: Option<Vec<String>>,
    answer: Option<AnswerKey>,
    explanation: Option<String>,
}

const DEFAULT_TITLE: &str = "Untitled Deck";

impl CardEntry {
    fn into_draft(self, index: usize) -> Result<QuestionDraft, MalformedDeck> {
        let prompt = self.question.ok_or(MalformedDeck::MissingCardField {
            index,
            field: "question",
        })?;
        let choices = self.choices.ok_or(MalformedDeck::MissingCardField {
            index,
            field: "choices",
        })?;
        let answer = self.answer.ok_or(MalformedDeck::MissingCardField {
            index,
            field: "answer",
        })?;

        let mut draft = QuestionDraft::new(prompt, choices, answer);
        draft.explanation = self.explanation;
        Ok(draft)
    }
}

//
// ─── LOADING ───────────────────────────────────────────────────────────────────
//

/// Load and validate one deck file.
///
/// Validation is all-or-nothing: either every card in the file validates and
/// a `Deck` is returned, or the whole load fails and nothing is kept.
///
/// # Errors
///
/// `NotFound` when the file cannot be read, `Format` when the content is not
/// JSON of the expected shape, `Malformed` when fields are missing or a card
/// fails validation.
pub fn load_deck(path: &Path) -> Result<Deck, DeckLoadError> {
    let start = Instant::now();
    let content = fs::read_to_string(path).map_err(|source| {
        log::warn!("failed to read deck {}: {source}", path.display());
        DeckLoadError::NotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let file: DeckFile = serde_json::from_str(&content).map_err(|source| {
        log::warn!("failed to parse deck {}: {source}", path.display());
        DeckLoadError::Format {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let deck = build_deck(file).map_err(|source| {
        log::warn!("deck {} is malformed: {source}", path.display());
        DeckLoadError::Malformed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    log::debug!(
        "loaded deck {} ({} questions) in {}ms",
        path.display(),
        deck.len(),
        start.elapsed().as_millis()
    );
    Ok(deck)
}

fn build_deck(file: DeckFile) -> Result<Deck, MalformedDeck> {
    let title = file.title.unwrap_or_else(|| DEFAULT_TITLE.to_owned());
    let cards = file.cards.ok_or(MalformedDeck::MissingField { field: "cards" })?;

    let mut questions = Vec::with_capacity(cards.len());
    for (index, card) in cards.into_iter().enumerate() {
        let question = card
            .into_draft(index)?
            .validate()
            .map_err(|source| MalformedDeck::Question { index, source })?;
        questions.push(question);
    }

    Ok(Deck::new(title, questions)?)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
