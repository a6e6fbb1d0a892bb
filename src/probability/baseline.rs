use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::calculator::Probabilities;
use crate::corpus::{CorpusReader, CorpusSource, TextEncoding, TokenizerOptions};
use crate::error::StatzError;
use crate::tally::{FrequencyAccumulator, Tallies};

/// Source of reference probabilities a corpus is compared against
///
/// Implementations decide how reference statistics are derived. Returning
/// `None` means the key has no reference value.
pub trait Baseline {
    fn character_probability(&self, c: char) -> Option<f64>;
    fn word_probability(&self, word: &str) -> Option<f64>;
}

/// Plain relative frequencies over the corpora of a reference directory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceBaseline {
    probabilities: Probabilities,
    corpora: usize,
}

impl ReferenceBaseline {
    pub fn from_tallies(tallies: &Tallies, corpora: usize) -> Self {
        ReferenceBaseline {
            probabilities: Probabilities::compute(tallies),
            corpora,
        }
    }

    /// Accumulate every regular file directly inside `dir`
    ///
    /// Files are read in file-name order and subdirectories are skipped. A
    /// file that fails to decode fails the whole load.
    pub fn load(
        dir: &Path,
        options: &TokenizerOptions,
        encoding: TextEncoding,
    ) -> Result<Self, StatzError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                files.push(entry.path());
            }
        }
        files.sort();

        let mut accumulator = FrequencyAccumulator::new();
        for path in &files {
            let reader = CorpusReader::new(CorpusSource::Path(path.clone()), encoding);
            accumulator.accumulate_tokens(reader.tokens(options)?)?;
        }

        log::debug!(
            "Loaded {} reference corpora from {}",
            files.len(),
            dir.display()
        );
        Ok(Self::from_tallies(&accumulator.into_tallies(), files.len()))
    }

    /// Number of reference files that contributed
    pub fn corpora(&self) -> usize {
        self.corpora
    }

    pub fn characters(&self) -> &HashMap<char, f64> {
        &self.probabilities.characters
    }

    pub fn words(&self) -> &HashMap<String, f64> {
        &self.probabilities.words
    }
}

impl Baseline for ReferenceBaseline {
    fn character_probability(&self, c: char) -> Option<f64> {
        self.probabilities.character(c)
    }

    fn word_probability(&self, word: &str) -> Option<f64> {
        self.probabilities.word(word)
    }
}

#[cfg(test)]
#[path = "baseline_tests.rs"]
mod baseline_tests;
