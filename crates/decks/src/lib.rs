#![forbid(unsafe_code)]

pub mod discover;
pub mod load;

pub use discover::{DeckEntry, find_decks};
pub use load::{DeckLoadError, MalformedDeck, load_deck};
