use crate::ui::deck::intent::DeckIntent;
use crate::ui::deck::state::DeckState;
use crate::ui::mvi::Reducer;

pub struct DeckReducer;

impl Reducer for DeckReducer {
    type State = DeckState;
    type Intent = DeckIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeckIntent::Loaded { recipes } => match state {
                DeckState::Loading if !recipes.is_empty() => DeckState::Ready {
                    recipes,
                    current: 0,
                    last_swipe: None,
                },
                // Empty batch: stay loading. Already ready: the batch is
                // fixed for the session, ignore late arrivals.
                other => other,
            },
            DeckIntent::Swipe { direction } => match state {
                DeckState::Ready {
                    recipes, current, ..
                } => {
                    // Skip and Save both consume the current card. The
                    // direction only picks which side the next card slides
                    // in from.
                    let next = (current + 1) % recipes.len();
                    DeckState::Ready {
                        recipes,
                        current: next,
                        last_swipe: Some(direction),
                    }
                }
                other => other,
            },
        }
    }
}
