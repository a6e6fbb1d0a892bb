//! Engine module running one analysis end to end
//!
//! Reads every source into one accumulator, derives probabilities when
//! asked, compares against the session's reference corpora when one is
//! defined, and hands back a finished report.

use std::path::Path;

use crate::corpus::{CorpusReader, CorpusSource, TextEncoding, TokenizerOptions};
use crate::error::StatzError;
use crate::probability::{Probabilities, ReferenceBaseline};
use crate::report::{ReferenceSummary, ReportBuilder, StatisticsReport, TrackedSet};
use crate::session::Session;
use crate::tally::FrequencyAccumulator;

/// Validated inputs for one analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    /// Sources accumulated in order; empty means standard input
    pub sources: Vec<CorpusSource>,
    pub tracked: TrackedSet,
    pub probabilities: bool,
    pub tokenizer: TokenizerOptions,
    pub encoding: TextEncoding,
}

impl AnalysisRequest {
    pub fn new(sources: Vec<CorpusSource>) -> Self {
        AnalysisRequest {
            sources,
            tracked: TrackedSet::default(),
            probabilities: false,
            tokenizer: TokenizerOptions::default(),
            encoding: TextEncoding::default(),
        }
    }

    fn resolved_sources(&self) -> Vec<CorpusSource> {
        if self.sources.is_empty() {
            vec![CorpusSource::Stdin]
        } else {
            self.sources.clone()
        }
    }
}

/// Run an analysis inside an initialized session
///
/// Reference probabilities are added only when probabilities are requested
/// and the session has a reference directory defined.
pub fn analyze(session: &Session, request: &AnalysisRequest) -> Result<StatisticsReport, StatzError> {
    session.ensure_initialized("analyze")?;

    let sources = request.resolved_sources();
    let corpus = sources
        .iter()
        .map(CorpusSource::name)
        .collect::<Vec<_>>()
        .join(", ");

    let mut accumulator = FrequencyAccumulator::new();
    for source in sources {
        let reader = CorpusReader::new(source, request.encoding);
        let summary = accumulator.accumulate_tokens(reader.tokens(&request.tokenizer)?)?;
        log::debug!(
            "{}: {} characters, {} words",
            reader.source(),
            summary.characters,
            summary.words
        );
    }

    let tallies = accumulator.into_tallies();
    if tallies.is_empty() {
        log::warn!("Corpus {} is empty; probabilities default to 0", corpus);
    }

    let tracked = request.tracked.normalized(&request.tokenizer);
    let probabilities = request
        .probabilities
        .then(|| Probabilities::compute(&tallies));
    let baseline = match (&probabilities, session.reference_path()) {
        (Some(_), Some(dir)) => Some(load_baseline(dir, request)?),
        _ => None,
    };

    let mut builder = ReportBuilder::new(corpus).tracked(&tracked);
    if let Some(probabilities) = &probabilities {
        builder = builder.probabilities(probabilities);
    }
    if let Some((baseline, summary)) = &baseline {
        builder = builder.baseline(baseline, summary.clone());
    }
    Ok(builder.build(&tallies))
}

fn load_baseline(
    dir: &Path,
    request: &AnalysisRequest,
) -> Result<(ReferenceBaseline, ReferenceSummary), StatzError> {
    let baseline = ReferenceBaseline::load(dir, &request.tokenizer, request.encoding)?;
    let summary = ReferenceSummary {
        directory: dir.display().to_string(),
        corpora: baseline.corpora(),
    };
    Ok((baseline, summary))
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
