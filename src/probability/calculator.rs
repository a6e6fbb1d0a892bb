use std::collections::HashMap;
use std::hash::Hash;

use crate::tally::{CharacterTally, Tallies, Tally, WordTally};

/// Relative frequency of every key in `tally`
///
/// Each value is `count / total`. An empty tally (total of zero) maps every
/// key to 0.0 instead of dividing by zero.
pub fn compute_probabilities<K>(tally: &Tally<K>) -> HashMap<K, f64>
where
    K: Eq + Hash + Clone,
{
    let total = tally.total();
    tally
        .iter()
        .map(|(key, count)| {
            let probability = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64
            };
            (key.clone(), probability)
        })
        .collect()
}

pub fn compute_character_probabilities(tally: &CharacterTally) -> HashMap<char, f64> {
    compute_probabilities(tally)
}

pub fn compute_word_probabilities(tally: &WordTally) -> HashMap<String, f64> {
    compute_probabilities(tally)
}

/// Probabilities for both kinds of keys, taken from one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Probabilities {
    pub characters: HashMap<char, f64>,
    pub words: HashMap<String, f64>,
}

impl Probabilities {
    pub fn compute(tallies: &Tallies) -> Self {
        Probabilities {
            characters: compute_character_probabilities(&tallies.characters),
            words: compute_word_probabilities(&tallies.words),
        }
    }

    pub fn character(&self, c: char) -> Option<f64> {
        self.characters.get(&c).copied()
    }

    pub fn word(&self, word: &str) -> Option<f64> {
        self.words.get(word).copied()
    }
}

#[cfg(test)]
#[path = "calculator_tests.rs"]
mod calculator_tests;
