use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionPhase, SessionVm};

#[component]
pub fn SessionView(deck: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let deck_service = ctx.deck_service();

    let vm = use_signal(|| None::<SessionVm>);

    let deck_for_resource = deck.clone();
    let resource = use_resource(move || {
        let deck_service = deck_service.clone();
        let deck_name = deck_for_resource.clone();
        let mut vm = vm;
        async move {
            let loaded = deck_service
                .load(&deck_name)
                .map_err(|err| ViewError::from_deck_error(&err))?;
            vm.set(Some(SessionVm::start(Arc::new(loaded))));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(&resource);

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if evt.data.key() == Key::Escape {
            evt.prevent_default();
            navigator.push(Route::DeckSelect {});
            return;
        }

        let phase = vm.read().as_ref().map(SessionVm::phase);
        if let Key::Character(value) = evt.data.key() {
            // Digits pick a choice during the question phase.
            if phase == Some(SessionPhase::Question) {
                if let Ok(digit) = value.parse::<usize>() {
                    if digit >= 1 {
                        evt.prevent_default();
                        let mut vm = vm;
                        vm.with_mut(|vm| {
                            if let Some(vm) = vm.as_mut() {
                                vm.choose(digit - 1);
                            }
                        });
                    }
                }
            }
        }
    });

    let deck_title = vm.read().as_ref().map(|vm| vm.deck_name().to_owned());
    let question = vm.read().as_ref().and_then(SessionVm::question);
    let feedback = vm.read().as_ref().and_then(SessionVm::feedback);
    let results = vm.read().as_ref().and_then(SessionVm::results);

    rsx! {
        div {
            class: "page session-page",
            tabindex: "0",
            onkeydown: move |evt| on_key.call(evt),
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
                            navigator.push(Route::DeckSelect {});
                        },
                        "Back to Decks"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    header { class: "view-header",
                        h2 { class: "view-title",
                            {deck_title.unwrap_or_default()}
                        }
                    }
                    div { class: "view-divider" }

                    if let Some(question) = question {
                        if let Some(round) = question.round_label.as_ref() {
                            p { class: "session-round", "{round}" }
                        }
                        p { class: "session-prompt", "{question.prompt}" }
                        div { class: "choice-list",
                            for (position, choice) in question.choices.iter().enumerate() {
                                button {
                                    key: "{position}",
                                    class: "choice-btn",
                                    r#type: "button",
                                    onclick: move |_| {
                                        let mut vm = vm;
                                        vm.with_mut(|vm| {
                                            if let Some(vm) = vm.as_mut() {
                                                vm.choose(position);
                                            }
                                        });
                                    },
                                    "{choice}"
                                }
                            }
                        }
                        p { class: "score-line", "{question.score_label}" }
                    }

                    if let Some(feedback) = feedback {
                        p {
                            class: if feedback.is_correct {
                                "feedback-verdict feedback-verdict--ok"
                            } else {
                                "feedback-verdict feedback-verdict--bad"
                            },
                            "{feedback.verdict}"
                        }
                        p { class: "answer-info", "Your answer: {feedback.selected}" }
                        if let Some(correct) = feedback.correct.as_ref() {
                            p { class: "answer-info", "Correct answer: {correct}" }
                        }
                        p { class: "explanation", "{feedback.explanation}" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut vm = vm;
                                vm.with_mut(|vm| {
                                    if let Some(vm) = vm.as_mut() {
                                        vm.next();
                                    }
                                });
                            },
                            "Next"
                        }
                    }

                    if let Some(results) = results {
                        div { class: "results",
                            h3 { class: "results-title", "Quiz Complete!" }
                            p { class: "score-line", "{results.score_label}" }
                            div { class: "results-actions",
                                if results.can_redo {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: move |_| {
                                            let mut vm = vm;
                                            vm.with_mut(|vm| {
                                                if let Some(vm) = vm.as_mut() {
                                                    vm.redo();
                                                }
                                            });
                                        },
                                        "{results.redo_label}"
                                    }
                                }
                                button {
                                    class: "btn btn-secondary",
                                    r#type: "button",
                                    onclick: move |_| {
                                        navigator.push(Route::DeckSelect {});
                                    },
                                    "Choose Another Deck"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
