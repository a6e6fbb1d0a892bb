// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

use crate::corpus::{TextEncoding, TokenizerOptions};
use crate::report::ReportFormat;
use crate::session::PathValidation;

/// Tokenizer configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    pub case_sensitive: bool,
    /// Extra word characters, written as one string (e.g. `"'-"`)
    pub extra_word_chars: String,
    pub encoding: TextEncoding,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        let options = TokenizerOptions::default();
        TokenizerConfig {
            case_sensitive: options.case_sensitive,
            extra_word_chars: options.extra_word_chars.iter().collect(),
            encoding: TextEncoding::default(),
        }
    }
}

impl TokenizerConfig {
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions {
            case_sensitive: self.case_sensitive,
            extra_word_chars: self.extra_word_chars.chars().collect(),
        }
    }
}

/// Reference directory configuration section
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub dir: Option<PathBuf>,
    pub validation: PathValidation,
}

/// Report configuration section
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
    pub probabilities: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub report: ReportConfig,
}
