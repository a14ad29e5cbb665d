use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{DeckSelectView, SessionView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DeckSelectView)] DeckSelect {},
        #[route("/session/:deck", SessionView)] Session { deck: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
