//! Type definitions for statistics reports

use std::fmt;

use serde::Serialize;

use crate::corpus::TokenizerOptions;

/// Characters and words the caller wants reported, in caller order
///
/// Empty lists mean "report everything observed".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedSet {
    characters: Vec<char>,
    words: Vec<String>,
}

impl TrackedSet {
    /// Build a tracked set, dropping duplicates but keeping first positions
    pub fn new<C, W, S>(characters: C, words: W) -> Self
    where
        C: IntoIterator<Item = char>,
        W: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = TrackedSet::default();
        for c in characters {
            if !set.characters.contains(&c) {
                set.characters.push(c);
            }
        }
        for word in words {
            let word = word.into();
            if !set.words.contains(&word) {
                set.words.push(word);
            }
        }
        set
    }

    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.words.is_empty()
    }

    /// Apply the tokenizer's case policy to tracked words
    pub fn normalized(&self, options: &TokenizerOptions) -> TrackedSet {
        TrackedSet::new(
            self.characters.iter().copied(),
            self.words.iter().map(|w| options.normalize_word(w)),
        )
    }
}

/// One reported key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportEntry<K> {
    pub key: K,
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_probability: Option<f64>,
}

/// Non-fatal conditions noticed while building a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportWarning {
    /// No characters (and therefore no words) were read
    EmptyCorpus,
}

impl fmt::Display for ReportWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportWarning::EmptyCorpus => {
                write!(f, "corpus is empty: no characters or words were read")
            }
        }
    }
}

/// Reference corpora the report was compared against
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceSummary {
    pub directory: String,
    pub corpora: usize,
}

/// Final character and word statistics for one run
///
/// Built once by the report builder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsReport {
    pub(super) corpus: String,
    pub(super) total_characters: u64,
    pub(super) total_words: u64,
    pub(super) distinct_characters: usize,
    pub(super) distinct_words: usize,
    pub(super) characters: Vec<ReportEntry<char>>,
    pub(super) words: Vec<ReportEntry<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) reference: Option<ReferenceSummary>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(super) warnings: Vec<ReportWarning>,
}

impl StatisticsReport {
    pub fn corpus(&self) -> &str {
        &self.corpus
    }

    pub fn total_characters(&self) -> u64 {
        self.total_characters
    }

    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    pub fn distinct_characters(&self) -> usize {
        self.distinct_characters
    }

    pub fn distinct_words(&self) -> usize {
        self.distinct_words
    }

    pub fn characters(&self) -> &[ReportEntry<char>] {
        &self.characters
    }

    pub fn words(&self) -> &[ReportEntry<String>] {
        &self.words
    }

    pub fn reference(&self) -> Option<&ReferenceSummary> {
        self.reference.as_ref()
    }

    pub fn warnings(&self) -> &[ReportWarning] {
        &self.warnings
    }

    pub fn character(&self, c: char) -> Option<&ReportEntry<char>> {
        self.characters.iter().find(|e| e.key == c)
    }

    pub fn word(&self, word: &str) -> Option<&ReportEntry<String>> {
        self.words.iter().find(|e| e.key == word)
    }
}
