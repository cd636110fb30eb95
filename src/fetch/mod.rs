//! Recipe loading from TheMealDB.
//!
//! The loader runs exactly once per session. Its result is an explicit
//! [`FetchOutcome`] so the caller can tell "nothing matched" apart from
//! "the request failed"; both leave the deck in its loading state, but they
//! are logged differently.

mod client;
mod error;
mod model;

pub use client::{RecipeClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use model::{Recipe, SearchResponse};

/// Result of the one-shot recipe fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    /// At least one recipe came back, in API response order.
    Loaded(Vec<Recipe>),
    /// The request succeeded but matched nothing (`"meals": null` or `[]`).
    Empty,
    /// The request or payload decode failed.
    Failed(FetchError),
}

impl FetchOutcome {
    /// Classify a successfully decoded payload.
    pub fn from_meals(meals: Option<Vec<Recipe>>) -> Self {
        match meals {
            Some(recipes) if !recipes.is_empty() => FetchOutcome::Loaded(recipes),
            _ => FetchOutcome::Empty,
        }
    }
}
