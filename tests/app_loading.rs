use mealdeck::fetch::{FetchError, FetchOutcome, Recipe};
use mealdeck::ui::app::App;

const TICK_SECONDS: f32 = 1.0 / 30.0;

#[test]
fn empty_result_leaves_the_loading_screen_up() {
    let mut app = App::new(TICK_SECONDS);
    app.on_recipes(FetchOutcome::Empty);
    assert!(!app.deck().is_ready());
    assert!(app.deck().current_recipe().is_none());
}

#[test]
fn fetch_failure_leaves_the_loading_screen_up() {
    let mut app = App::new(TICK_SECONDS);
    app.on_recipes(FetchOutcome::Failed(FetchError::Status { status: 503 }));
    assert!(!app.deck().is_ready());
}

#[test]
fn ready_is_irreversible() {
    let mut app = App::new(TICK_SECONDS);
    app.on_recipes(FetchOutcome::Loaded(vec![Recipe {
        id: "1".to_string(),
        name: "Arrabiata".to_string(),
        thumbnail: "https://example.test/1.jpg".to_string(),
        category: "Pasta".to_string(),
        area: "Italian".to_string(),
    }]));
    assert!(app.deck().is_ready());

    // Late or duplicate completions never reset the deck.
    app.on_recipes(FetchOutcome::Empty);
    app.on_recipes(FetchOutcome::Failed(FetchError::Status { status: 500 }));
    assert!(app.deck().is_ready());
    assert_eq!(app.deck().position(), Some((1, 1)));
}

#[test]
fn status_error_displays_its_code() {
    let err = FetchError::Status { status: 429 };
    assert_eq!(err.to_string(), "unexpected status 429");
}
