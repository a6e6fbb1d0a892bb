use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

/// Text encoding used to decode a corpus byte stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
pub enum TextEncoding {
    /// UTF-8; invalid or truncated sequences are decode errors
    #[default]
    #[serde(rename = "utf-8", alias = "utf8")]
    #[value(name = "utf-8", alias = "utf8")]
    Utf8,
    /// ISO-8859-1; every byte maps to the code point of the same value
    #[serde(rename = "latin1", alias = "iso-8859-1")]
    #[value(name = "latin1", alias = "iso-8859-1")]
    Latin1,
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf-8"),
            TextEncoding::Latin1 => write!(f, "latin1"),
        }
    }
}
