use std::sync::Arc;

use services::DeckService;

/// UI-facing surface of the application composition root (`crates/app`).
pub trait UiApp: Send + Sync {
    fn deck_service(&self) -> Arc<DeckService>;
}

#[derive(Clone)]
pub struct AppContext {
    deck_service: Arc<DeckService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            deck_service: app.deck_service(),
        }
    }

    #[must_use]
    pub fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
