//! Unidirectional data flow primitives.
//!
//! Every state change in the UI goes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//! ```
//!
//! Input handlers never mutate state directly; they build an intent and
//! dispatch it. That keeps every transition (including deliberately odd
//! ones) in one auditable place.

/// Marker trait for UI state objects.
///
/// States are value types: reducing consumes the old state and returns the
/// next one.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker trait for intents: user actions and completed system events.
pub trait Intent: Send + 'static {}

/// Pure transition function over a state/intent pair.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Process an intent and return the new state. No side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
