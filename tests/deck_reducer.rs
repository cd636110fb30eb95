use mealdeck::fetch::Recipe;
use mealdeck::ui::deck::{DeckIntent, DeckReducer, DeckState, SwipeDirection};
use mealdeck::ui::mvi::Reducer;

fn make_recipes(count: usize) -> Vec<Recipe> {
    (0..count)
        .map(|i| Recipe {
            id: format!("{}", 52770 + i),
            name: format!("Recipe {i}"),
            thumbnail: format!("https://example.test/{i}.jpg"),
            category: "Seafood".to_string(),
            area: "Japanese".to_string(),
        })
        .collect()
}

fn ready(count: usize) -> DeckState {
    DeckReducer::reduce(
        DeckState::Loading,
        DeckIntent::Loaded {
            recipes: make_recipes(count),
        },
    )
}

fn swipe(state: DeckState, direction: SwipeDirection) -> DeckState {
    DeckReducer::reduce(state, DeckIntent::Swipe { direction })
}

fn current(state: &DeckState) -> usize {
    state.position().expect("deck should be ready").0 - 1
}

#[test]
fn load_enters_ready_at_zero() {
    let state = ready(5);
    assert!(state.is_ready());
    assert_eq!(current(&state), 0);
    assert_eq!(state.last_swipe(), None);
}

#[test]
fn empty_batch_stays_loading() {
    let state = DeckReducer::reduce(DeckState::Loading, DeckIntent::Loaded { recipes: vec![] });
    assert_eq!(state, DeckState::Loading);
}

#[test]
fn second_load_is_ignored() {
    let state = ready(3);
    let reloaded = DeckReducer::reduce(
        state.clone(),
        DeckIntent::Loaded {
            recipes: make_recipes(7),
        },
    );
    assert_eq!(reloaded, state);
}

#[test]
fn swipe_while_loading_is_noop() {
    let state = swipe(DeckState::Loading, SwipeDirection::Forward);
    assert_eq!(state, DeckState::Loading);
}

// -- Cyclic navigation --------------------------------------------------------

#[test]
fn walk_through_a_b_c() {
    // Sequence [A, B, C]: three ArrowRight presses visit 1, 2, then wrap to 0.
    let mut state = ready(3);
    state = swipe(state, SwipeDirection::Forward);
    assert_eq!(current(&state), 1);
    state = swipe(state, SwipeDirection::Forward);
    assert_eq!(current(&state), 2);
    state = swipe(state, SwipeDirection::Forward);
    assert_eq!(current(&state), 0);
}

#[test]
fn n_swipes_return_to_start() {
    for n in 1..=8 {
        let mut state = ready(n);
        for _ in 0..n {
            state = swipe(state, SwipeDirection::Forward);
        }
        assert_eq!(current(&state), 0, "length {n} should cycle back");
    }
}

#[test]
fn index_stays_in_range_under_mixed_input() {
    let mut state = ready(4);
    let directions = [
        SwipeDirection::Forward,
        SwipeDirection::Backward,
        SwipeDirection::Backward,
        SwipeDirection::Forward,
        SwipeDirection::Backward,
    ];
    for (step, direction) in directions.iter().cycle().take(25).enumerate() {
        state = swipe(state, *direction);
        assert!(current(&state) < 4, "index escaped range at step {step}");
    }
}

#[test]
fn single_recipe_pins_index_at_zero() {
    let mut state = ready(1);
    for _ in 0..10 {
        state = swipe(state, SwipeDirection::Backward);
        assert_eq!(current(&state), 0);
    }
}

// -- The Skip/Save quirk ------------------------------------------------------

#[test]
fn skip_and_save_land_on_same_index() {
    let start = ready(5);
    let skipped = swipe(start.clone(), SwipeDirection::Backward);
    let saved = swipe(start, SwipeDirection::Forward);
    assert_eq!(current(&skipped), current(&saved));
    assert_eq!(current(&skipped), 1);
}

#[test]
fn skip_and_save_record_different_directions() {
    let start = ready(5);
    let skipped = swipe(start.clone(), SwipeDirection::Backward);
    let saved = swipe(start, SwipeDirection::Forward);
    assert_eq!(skipped.last_swipe(), Some(SwipeDirection::Backward));
    assert_eq!(saved.last_swipe(), Some(SwipeDirection::Forward));
}

#[test]
fn direction_signs_match_the_input_surface() {
    assert_eq!(SwipeDirection::Backward.sign(), -1);
    assert_eq!(SwipeDirection::Forward.sign(), 1);
}

#[test]
fn current_recipe_follows_the_cursor() {
    let mut state = ready(3);
    assert_eq!(state.current_recipe().unwrap().name, "Recipe 0");
    state = swipe(state, SwipeDirection::Forward);
    assert_eq!(state.current_recipe().unwrap().name, "Recipe 1");
}

#[test]
fn position_is_one_based() {
    let state = ready(3);
    assert_eq!(state.position(), Some((1, 3)));
    let state = swipe(state, SwipeDirection::Forward);
    assert_eq!(state.position(), Some((2, 3)));
}
