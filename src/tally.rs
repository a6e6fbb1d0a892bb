//! Tally module for counting character and word occurrences
//!
//! Tallies keep keys in first-seen order so reports are reproducible
//! independent of hash layout.

mod accumulator;
mod types;

// Re-export public types
pub use accumulator::{FrequencyAccumulator, PassSummary, accumulate_parallel};
pub use types::{CharacterTally, Tallies, Tally, WordTally};
