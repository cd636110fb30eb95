use crate::fetch::Recipe;
use crate::ui::mvi::Intent;

/// Travel direction of a swipe.
///
/// `Backward` is the Skip side (ArrowLeft, −1), `Forward` the Save side
/// (ArrowRight, +1). The value selects the animation's entry/exit side and
/// nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Backward,
    Forward,
}

impl SwipeDirection {
    /// Signed form, matching the −1/+1 the input surface speaks.
    pub fn sign(self) -> i32 {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

#[derive(Debug)]
pub enum DeckIntent {
    /// The one-shot fetch completed with a batch.
    Loaded { recipes: Vec<Recipe> },
    /// User consumed the current card (Skip or Save).
    Swipe { direction: SwipeDirection },
}

impl Intent for DeckIntent {}
