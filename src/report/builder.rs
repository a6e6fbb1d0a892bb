use std::hash::Hash;

use super::types::{ReferenceSummary, ReportEntry, ReportWarning, StatisticsReport, TrackedSet};
use crate::probability::{Baseline, Probabilities};
use crate::tally::{Tallies, Tally};

/// Assemble a report from final tallies
///
/// Entries follow the tracked order when keys are tracked, otherwise the
/// tally's first-seen order. Tracked keys never observed are left out.
pub fn build(
    corpus: impl Into<String>,
    tallies: &Tallies,
    tracked: &TrackedSet,
    probabilities: Option<&Probabilities>,
) -> StatisticsReport {
    let mut builder = ReportBuilder::new(corpus).tracked(tracked);
    if let Some(probabilities) = probabilities {
        builder = builder.probabilities(probabilities);
    }
    builder.build(tallies)
}

/// Step-by-step report construction with optional reference comparison
pub struct ReportBuilder<'a> {
    corpus: String,
    tracked: Option<&'a TrackedSet>,
    probabilities: Option<&'a Probabilities>,
    baseline: Option<(&'a dyn Baseline, ReferenceSummary)>,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(corpus: impl Into<String>) -> Self {
        ReportBuilder {
            corpus: corpus.into(),
            tracked: None,
            probabilities: None,
            baseline: None,
        }
    }

    pub fn tracked(mut self, tracked: &'a TrackedSet) -> Self {
        self.tracked = Some(tracked);
        self
    }

    pub fn probabilities(mut self, probabilities: &'a Probabilities) -> Self {
        self.probabilities = Some(probabilities);
        self
    }

    pub fn baseline(mut self, baseline: &'a dyn Baseline, summary: ReferenceSummary) -> Self {
        self.baseline = Some((baseline, summary));
        self
    }

    pub fn build(self, tallies: &Tallies) -> StatisticsReport {
        let tracked_characters = self.tracked.map(TrackedSet::characters).unwrap_or(&[]);
        let tracked_words = self.tracked.map(TrackedSet::words).unwrap_or(&[]);
        let baseline = self.baseline.as_ref().map(|(b, _)| *b);

        let characters = select(&tallies.characters, tracked_characters)
            .into_iter()
            .map(|(key, count)| ReportEntry {
                key,
                count,
                probability: self.probabilities.and_then(|p| p.character(key)),
                reference_probability: baseline.and_then(|b| b.character_probability(key)),
            })
            .collect();

        let words = select(&tallies.words, tracked_words)
            .into_iter()
            .map(|(key, count)| ReportEntry {
                probability: self.probabilities.and_then(|p| p.word(&key)),
                reference_probability: baseline.and_then(|b| b.word_probability(&key)),
                key,
                count,
            })
            .collect();

        let mut warnings = Vec::new();
        if tallies.characters.total() == 0 {
            warnings.push(ReportWarning::EmptyCorpus);
        }

        StatisticsReport {
            corpus: self.corpus,
            total_characters: tallies.characters.total(),
            total_words: tallies.words.total(),
            distinct_characters: tallies.characters.len(),
            distinct_words: tallies.words.len(),
            characters,
            words,
            reference: self.baseline.map(|(_, summary)| summary),
            warnings,
        }
    }
}

/// Keys to report with their counts
fn select<K>(tally: &Tally<K>, tracked: &[K]) -> Vec<(K, u64)>
where
    K: Eq + Hash + Clone,
{
    if tracked.is_empty() {
        tally.iter().map(|(k, c)| (k.clone(), c)).collect()
    } else {
        tracked
            .iter()
            .filter(|k| tally.contains(*k))
            .map(|k| (k.clone(), tally.get(k)))
            .collect()
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod builder_tests;
