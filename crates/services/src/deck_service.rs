use std::path::{Path, PathBuf};

use decks::{DeckEntry, find_decks, load_deck};
use quiz_core::model::Deck;

use crate::error::DeckServiceError;

/// Directory-scoped facade over deck discovery and loading.
///
/// This is the boundary the presentation layer talks to: decks are
/// identified by the file stems `list_decks` reports, and `load` resolves a
/// stem back to its file within the same directory.
#[derive(Debug, Clone)]
pub struct DeckService {
    directory: PathBuf,
}

impl DeckService {
    #[must_use]
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Decks available in the directory, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Scan` when the directory exists but cannot
    /// be read. A missing directory is an empty list, not an error.
    pub fn list_decks(&self) -> Result<Vec<DeckEntry>, DeckServiceError> {
        Ok(find_decks(&self.directory)?)
    }

    /// Load the deck with the given name (file stem).
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::UnknownDeck` when no deck file with that
    /// stem exists, and wraps `DeckLoadError` when the file fails to load or
    /// validate.
    pub fn load(&self, name: &str) -> Result<Deck, DeckServiceError> {
        let entries = self.list_decks()?;
        let entry = entries
            .iter()
            .find(|entry| entry.name() == name)
            .ok_or_else(|| {
                log::warn!(
                    "deck {name:?} not found in {}",
                    self.directory.display()
                );
                DeckServiceError::UnknownDeck {
                    name: name.to_owned(),
                    directory: self.directory.clone(),
                }
            })?;
        let deck = load_deck(entry.path())?;
        log::debug!("deck {name:?} ready with {} question(s)", deck.len());
        Ok(deck)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
