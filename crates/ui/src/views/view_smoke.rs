use super::test_harness::{ViewKind, setup_view_harness};

const CAPITALS: &str = r#"{
    "title": "Capitals",
    "cards": [
        {
            "question": "Capital of France?",
            "choices": ["Paris", "Rome", "Berlin"],
            "answer": "Paris",
            "explanation": "Seine-side since the Romans."
        }
    ]
}"#;

const EMPTY_DECK: &str = r#"{"title": "Empty", "cards": []}"#;

#[tokio::test(flavor = "current_thread")]
async fn deck_select_smoke_lists_decks() {
    let mut harness = setup_view_harness(
        ViewKind::DeckSelect,
        &[("capitals", CAPITALS), ("astronomy", EMPTY_DECK)],
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Select a Deck"), "missing title in {html}");
    assert!(html.contains("capitals"), "missing deck name in {html}");
    assert!(html.contains("astronomy"), "missing deck name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_select_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(ViewKind::DeckSelect, &[]);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No decks found"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_smoke_renders_prompt_and_choices() {
    let mut harness = setup_view_harness(
        ViewKind::Session("capitals".into()),
        &[("capitals", CAPITALS)],
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Capitals"), "missing deck title in {html}");
    assert!(html.contains("Capital of France?"), "missing prompt in {html}");
    for choice in ["Paris", "Rome", "Berlin"] {
        assert!(html.contains(choice), "missing choice {choice} in {html}");
    }
    assert!(html.contains("Score: 0/1"), "missing score line in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_smoke_empty_deck_shows_results() {
    let mut harness = setup_view_harness(
        ViewKind::Session("empty".into()),
        &[("empty", EMPTY_DECK)],
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Quiz Complete!"), "missing results in {html}");
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(
        !html.contains("Redo Wrong Answers"),
        "redo must be hidden without misses in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn session_smoke_unknown_deck_shows_error() {
    let mut harness = setup_view_harness(ViewKind::Session("ghost".into()), &[]);
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("Deck unavailable"),
        "missing unavailable message in {html}"
    );
    assert!(html.contains("Back to Decks"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_smoke_corrupt_deck_shows_corrupt_message() {
    let mut harness = setup_view_harness(
        ViewKind::Session("broken".into()),
        &[("broken", "{ not json")],
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("deck file is corrupt"),
        "missing corrupt message in {html}"
    );
}
