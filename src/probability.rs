//! Probability module for deriving occurrence probabilities from tallies
//!
//! Probabilities are computed from a final snapshot only. Reference corpora
//! plug in through the [`Baseline`] trait.

mod baseline;
mod calculator;

// Re-export public types
pub use baseline::{Baseline, ReferenceBaseline};
pub use calculator::{
    Probabilities, compute_character_probabilities, compute_probabilities,
    compute_word_probabilities,
};
