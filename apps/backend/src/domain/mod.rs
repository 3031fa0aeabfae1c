//! Domain layer: pure card-generation and win-evaluation logic.

pub mod card;
pub mod card_serde;
pub mod evaluator;
pub mod generator;

#[cfg(test)]
mod tests_evaluator;
#[cfg(test)]
mod tests_props_generator;

// Re-exports for ergonomics
pub use card::{Card, Cell, COLUMN_SPAN, FREE_CELL, GRID_SIZE};
pub use evaluator::{evaluate, DrawnNumbers, LabeledCard, NearWinTally, PatternHit, WinResult};
pub use generator::{generate_card, generate_unique_set, generate_unique_set_with_budget};
