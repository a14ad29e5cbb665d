mod deck_select;
mod session;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use deck_select::DeckSelectView;
pub use session::SessionView;
pub use state::{ViewError, ViewState, view_state_from_resource};
