use std::fs;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::DeckService;

use crate::context::{UiApp, build_app_context};
use crate::views::{DeckSelectView, SessionView};

#[derive(Clone)]
struct TestApp {
    deck_service: Arc<DeckService>,
}

impl UiApp for TestApp {
    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum ViewKind {
    DeckSelect,
    Session(String),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::DeckSelect => rsx! { DeckSelectView {} },
        ViewKind::Session(deck) => rsx! { SessionView { deck } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    // Keeps the deck directory alive for the duration of the test.
    _dir: tempfile::TempDir,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        // Two rounds: the first settles the resource, the second settles the
        // render it triggered (session views set a signal from the resource).
        for _ in 0..2 {
            let _ = tokio::time::timeout(
                std::time::Duration::from_millis(50),
                self.dom.wait_for_work(),
            )
            .await;
            self.dom.render_immediate(&mut NoOpMutations);
            self.dom.process_events();
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Build a harness over a fresh deck directory containing the given
/// `(stem, json)` files.
pub fn setup_view_harness(view: ViewKind, deck_files: &[(&str, &str)]) -> ViewHarness {
    let dir = tempfile::tempdir().expect("create deck directory");
    for (name, contents) in deck_files {
        fs::write(dir.path().join(format!("{name}.json")), contents).expect("write deck file");
    }

    let app = Arc::new(TestApp {
        deck_service: Arc::new(DeckService::new(dir.path())),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, _dir: dir }
}
