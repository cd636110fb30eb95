use tracing::{error, info, warn};

use crate::fetch::FetchOutcome;
use crate::ui::animation::SlideAnimation;
use crate::ui::deck::{DeckIntent, DeckReducer, DeckState, SwipeDirection};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Card navigator state (MVI pattern).
    deck: DeckState,
    /// In-flight card slide (resource, managed outside MVI).
    animation: Option<SlideAnimation>,
    /// Seconds per tick, for the spring integration.
    tick_seconds: f32,
    size: (u16, u16),
}

impl App {
    pub fn new(tick_seconds: f32) -> Self {
        Self {
            should_quit: false,
            deck: DeckState::default(),
            animation: None,
            tick_seconds,
            size: (0, 0),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn deck(&self) -> &DeckState {
        &self.deck
    }

    pub fn animation(&self) -> Option<&SlideAnimation> {
        self.animation.as_ref()
    }

    /// Handle the resolved fetch. Failure and empty results are absorbed
    /// here: the deck simply stays in its loading state.
    pub fn on_recipes(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Loaded(recipes) => {
                info!(count = recipes.len(), "recipe batch loaded");
                dispatch_mvi!(self, deck, DeckReducer, DeckIntent::Loaded { recipes });
            }
            FetchOutcome::Empty => {
                warn!("recipe search matched nothing; staying on loading screen");
            }
            FetchOutcome::Failed(err) => {
                error!(error = %err, "recipe fetch failed");
            }
        }
    }

    /// Consume the current card and start the next card's slide-in.
    pub fn swipe(&mut self, direction: SwipeDirection) {
        if !self.deck.is_ready() {
            return;
        }
        dispatch_mvi!(self, deck, DeckReducer, DeckIntent::Swipe { direction });
        self.animation = Some(SlideAnimation::slide_in(direction, self.card_travel()));
    }

    pub fn on_tick(&mut self) {
        if let Some(animation) = &mut self.animation {
            animation.step(self.tick_seconds);
            if animation.is_settled() {
                self.animation = None;
            }
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = (cols, rows);
        // The slide distance was measured against the old width; land it.
        self.animation = None;
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    /// Slide distance: the card enters from one card-width off-center.
    fn card_travel(&self) -> u16 {
        crate::ui::layout::card_width(self.size.0)
    }
}
