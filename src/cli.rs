//! Command-line definitions and their merge with the configuration file

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::corpus::{CorpusSource, TextEncoding, TokenizerOptions};
use crate::engine::AnalysisRequest;
use crate::report::{ReportDestination, ReportFormat, TrackedSet};
use crate::session::PathValidation;

/// Character and word frequency statistics for text files
#[derive(Debug, Parser)]
#[command(name = "textfilestatz", version, about)]
pub struct Cli {
    /// Input files ("-" for standard input); standard input when omitted
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Characters to report; every character of the value is tracked
    #[arg(short = 'c', long = "count", value_name = "CHARS")]
    pub count: Vec<String>,

    /// Word to report (repeatable)
    #[arg(short = 'w', long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Compute occurrence probabilities
    #[arg(short, long)]
    pub probability: bool,

    /// Report destination ("-" for standard output)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Directory of reference corpora to compare probabilities against
    #[arg(short, long, value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Fold words to lowercase before counting
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Extra characters that belong to words besides letters and digits
    #[arg(long, value_name = "CHARS")]
    pub word_chars: Option<String>,

    /// Text encoding of the inputs
    #[arg(long, value_enum)]
    pub encoding: Option<TextEncoding>,

    /// Configuration file (default: ~/.config/textfilestatz/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

/// Everything the binary needs to run, with options merged over config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub request: AnalysisRequest,
    pub reference_dir: Option<PathBuf>,
    pub validation: PathValidation,
    pub format: ReportFormat,
    pub destination: ReportDestination,
}

impl Cli {
    pub fn plan(&self, config: &Config) -> RunPlan {
        let sources = self
            .inputs
            .iter()
            .map(|p| CorpusSource::from_arg(p))
            .collect();

        let tracked = TrackedSet::new(
            self.count.iter().flat_map(|s| s.chars()),
            self.words.iter().cloned(),
        );

        let tokenizer = TokenizerOptions {
            case_sensitive: config.tokenizer.case_sensitive && !self.ignore_case,
            extra_word_chars: self
                .word_chars
                .as_ref()
                .map(|chars| chars.chars().collect())
                .unwrap_or_else(|| config.tokenizer.options().extra_word_chars),
        };

        let request = AnalysisRequest {
            sources,
            tracked,
            probabilities: self.probability || config.report.probabilities,
            tokenizer,
            encoding: self.encoding.unwrap_or(config.tokenizer.encoding),
        };

        RunPlan {
            request,
            reference_dir: self
                .reference_dir
                .clone()
                .or_else(|| config.reference.dir.clone()),
            validation: config.reference.validation,
            format: self.format.unwrap_or(config.report.format),
            destination: self
                .output
                .as_deref()
                .map(ReportDestination::from_arg)
                .unwrap_or(ReportDestination::Stdout),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
