//! MealDeck: a terminal recipe browser over TheMealDB.
//!
//! One search request is issued at startup; the resulting batch is then
//! browsed one card at a time with arrow keys or the on-screen buttons,
//! wrapping around at the end of the batch.

pub mod cli;
pub mod fetch;
pub mod logging;
pub mod ui;
