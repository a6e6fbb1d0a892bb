//! Character and word frequency statistics for text corpora
//!
//! The library reads a corpus, counts every character and word, optionally
//! derives occurrence probabilities (against reference corpora when a
//! reference directory is defined in the [`Session`]), and builds a
//! [`StatisticsReport`]. The `textfilestatz` binary is a thin front end.

pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod probability;
pub mod report;
pub mod session;
pub mod tally;

pub use engine::{AnalysisRequest, analyze};
pub use error::StatzError;
pub use report::StatisticsReport;
pub use session::Session;
