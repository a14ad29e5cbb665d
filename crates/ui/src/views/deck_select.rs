use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::map_deck_entries;

#[component]
pub fn DeckSelectView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let deck_service = ctx.deck_service();

    let resource = use_resource(move || {
        let deck_service = deck_service.clone();
        async move {
            let entries = deck_service
                .list_decks()
                .map_err(|err| ViewError::from_deck_error(&err))?;
            Ok::<_, ViewError>(map_deck_entries(&entries))
        }
    });

    let state = view_state_from_resource(&resource);
    rsx! {
        div { class: "page deck-page",
            header { class: "view-header",
                h2 { class: "view-title", "Select a Deck" }
                p { class: "view-subtitle", "Pick a deck to start a quiz." }
            }
            div { class: "view-divider" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(decks) => {
                    let deck_buttons = decks.iter().map(|deck| {
                        let nav = navigator;
                        let name = deck.name.clone();
                        let label = name.clone();
                        rsx! {
                            button {
                                class: "deck-item",
                                r#type: "button",
                                onclick: move |_| {
                                    let _ = nav.push(Route::Session { deck: name.clone() });
                                },
                                "{label}"
                            }
                        }
                    });
                    rsx! {
                        if decks.is_empty() {
                            p { class: "deck-empty",
                                "No decks found. Add JSON deck files to the deck folder and retry."
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| {
                                    let mut resource = resource;
                                    resource.restart();
                                },
                                "Retry"
                            }
                        } else {
                            div { class: "deck-list",
                                {deck_buttons}
                            }
                        }
                    }
                }
            }
        }
    }
}
