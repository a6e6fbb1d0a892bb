//! Report module for assembling and writing statistics reports
//!
//! The builder turns final tallies into an immutable [`StatisticsReport`];
//! the writer renders it as text or JSON to a file or stdout.

mod builder;
mod types;
mod writer;

// Re-export public types
pub use builder::{ReportBuilder, build};
pub use types::{ReferenceSummary, ReportEntry, ReportWarning, StatisticsReport, TrackedSet};
pub use writer::{ReportDestination, ReportFormat, render, render_text, write_report};
