use crate::fetch::Recipe;
use crate::ui::deck::intent::SwipeDirection;
use crate::ui::mvi::UiState;

/// Navigator state over the recipe batch.
///
/// `Loading` is initial. The first non-empty batch moves the deck to
/// `Ready`, and it stays there for the rest of the session; the batch is
/// never refreshed or cleared.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DeckState {
    #[default]
    Loading,
    Ready {
        recipes: Vec<Recipe>,
        /// Always a valid index into `recipes`.
        current: usize,
        /// Which side the most recent card came in from. Presentational
        /// only; never feeds back into index movement.
        last_swipe: Option<SwipeDirection>,
    },
}

impl UiState for DeckState {}

impl DeckState {
    pub fn is_ready(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// The recipe under the cursor, if any.
    pub fn current_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Loading => None,
            Self::Ready {
                recipes, current, ..
            } => recipes.get(*current),
        }
    }

    /// One-based position and batch size, for the "Recipe N of M" line.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::Loading => None,
            Self::Ready {
                recipes, current, ..
            } => Some((current + 1, recipes.len())),
        }
    }

    pub fn last_swipe(&self) -> Option<SwipeDirection> {
        match self {
            Self::Loading => None,
            Self::Ready { last_swipe, .. } => *last_swipe,
        }
    }
}
