use dioxus::prelude::*;

use services::{DeckLoadError, DeckServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    DeckUnavailable,
    DeckCorrupt,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::DeckUnavailable => "Deck unavailable. Choose another deck.",
            ViewError::DeckCorrupt => "This deck file is corrupt. Loading was aborted.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }

    /// Collapse service errors into the two user-facing messages: a deck
    /// that cannot be found versus one that cannot be parsed or validated.
    #[must_use]
    pub fn from_deck_error(err: &DeckServiceError) -> Self {
        match err {
            DeckServiceError::UnknownDeck { .. }
            | DeckServiceError::Load(DeckLoadError::NotFound { .. }) => ViewError::DeckUnavailable,
            DeckServiceError::Load(_) => ViewError::DeckCorrupt,
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
