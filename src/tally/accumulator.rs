use std::thread;

use super::types::Tallies;
use crate::corpus::{Token, TokenizerOptions, Tokens, chunk_boundaries};
use crate::error::StatzError;

/// Occurrences folded in by one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub characters: u64,
    pub words: u64,
}

impl PassSummary {
    pub fn is_empty(&self) -> bool {
        self.characters == 0 && self.words == 0
    }
}

/// Running character and word counts for one counting session
///
/// Every occurrence is counted; filtering down to tracked keys happens only
/// when the report is built. Not synchronized: share it behind a lock or
/// accumulate partial tallies separately and [`merge`](Self::merge) them.
#[derive(Debug, Clone, Default)]
pub struct FrequencyAccumulator {
    tallies: Tallies,
    passes: usize,
}

impl FrequencyAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold already-split character and word sequences into the tallies
    pub fn accumulate<C, W, S>(&mut self, characters: C, words: W) -> PassSummary
    where
        C: IntoIterator<Item = char>,
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut partial = Tallies::default();
        for c in characters {
            partial.characters.increment(c);
        }
        for word in words {
            partial.words.increment(word.into());
        }
        self.commit(partial)
    }

    /// Fold one tokenizer pass into the tallies
    ///
    /// The pass is counted into a private partial tally first and merged only
    /// once the token stream ends cleanly. On error the accumulator is left
    /// exactly as it was before the call.
    pub fn accumulate_tokens<I>(&mut self, tokens: I) -> Result<PassSummary, StatzError>
    where
        I: IntoIterator<Item = Result<Token, StatzError>>,
    {
        let mut partial = Tallies::default();
        for token in tokens {
            match token? {
                Token::Char(c) => partial.characters.increment(c),
                Token::Word(word) => partial.words.increment(word),
            }
        }
        Ok(self.commit(partial))
    }

    /// Merge independently computed tallies
    pub fn merge(&mut self, partial: &Tallies) -> PassSummary {
        self.commit(partial.clone())
    }

    /// Immutable copy of the counts committed so far
    pub fn snapshot(&self) -> Tallies {
        self.tallies.clone()
    }

    /// Number of passes committed
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn into_tallies(self) -> Tallies {
        self.tallies
    }

    fn commit(&mut self, partial: Tallies) -> PassSummary {
        let summary = PassSummary {
            characters: partial.characters.total(),
            words: partial.words.total(),
        };
        self.tallies.merge(&partial);
        self.passes += 1;
        log::debug!(
            "Pass {} committed: {} characters, {} words",
            self.passes,
            summary.characters,
            summary.words
        );
        summary
    }
}

/// Tokenize in-memory text on several threads and merge the partial tallies
///
/// Chunks never split a word and partial tallies are merged in chunk order,
/// so the result equals a single sequential pass, first-seen order included.
pub fn accumulate_parallel(text: &str, options: &TokenizerOptions, parts: usize) -> Tallies {
    let chunks = chunk_boundaries(text, options, parts);

    let partials: Vec<Tallies> = thread::scope(|scope| {
        let handles: Vec<_> = chunks
            .iter()
            .map(|chunk| {
                scope.spawn(move || {
                    let mut accumulator = FrequencyAccumulator::new();
                    let tokens = Tokens::new(chunk.chars().map(Ok), options.clone());
                    // In-memory text cannot fail to decode
                    let _ = accumulator.accumulate_tokens(tokens);
                    accumulator.into_tallies()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    });

    let mut accumulator = FrequencyAccumulator::new();
    for partial in &partials {
        accumulator.merge(partial);
    }
    accumulator.into_tallies()
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod accumulator_tests;
