use thiserror::Error;

use crate::corpus::TextEncoding;

/// Custom error types for textfilestatz
#[derive(Debug, Error)]
pub enum StatzError {
    #[error("engine not initialized: {operation} requires an initialized session")]
    NotInitialized { operation: &'static str },

    #[error("engine already initialized: finalize the session before initializing it again")]
    AlreadyInitialized,

    #[error("Invalid reference directory {path:?}: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Cannot decode corpus as {encoding} at byte offset {offset}")]
    Decode { offset: u64, encoding: TextEncoding },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
