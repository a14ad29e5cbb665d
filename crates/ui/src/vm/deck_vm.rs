use services::DeckEntry;

/// One row of the deck selection list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckItemVm {
    /// File stem; doubles as the route parameter.
    pub name: String,
}

#[must_use]
pub fn map_deck_entries(entries: &[DeckEntry]) -> Vec<DeckItemVm> {
    entries
        .iter()
        .map(|entry| DeckItemVm {
            name: entry.name().to_owned(),
        })
        .collect()
}
