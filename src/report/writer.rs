use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

use super::types::{ReportEntry, StatisticsReport};
use crate::corpus::STDIO_MARKER;
use crate::error::StatzError;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Where a rendered report goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportDestination {
    Stdout,
    Path(PathBuf),
}

impl ReportDestination {
    /// Resolve a command-line argument, mapping `-` to standard output
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == STDIO_MARKER {
            ReportDestination::Stdout
        } else {
            ReportDestination::Path(arg.to_path_buf())
        }
    }
}

/// Render a report in the requested format
pub fn render(report: &StatisticsReport, format: ReportFormat) -> Result<String, StatzError> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Render a report as aligned plain text
pub fn render_text(report: &StatisticsReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Corpus: {}\n", report.corpus()));
    out.push_str(&format!(
        "Characters: {} total, {} distinct\n",
        report.total_characters(),
        report.distinct_characters()
    ));
    out.push_str(&format!(
        "Words: {} total, {} distinct\n",
        report.total_words(),
        report.distinct_words()
    ));
    if let Some(reference) = report.reference() {
        out.push_str(&format!(
            "Reference: {} ({} corpora)\n",
            reference.directory, reference.corpora
        ));
    }

    let characters: Vec<Row> = report
        .characters()
        .iter()
        .map(|e| Row::new(format!("{:?}", e.key), e))
        .collect();
    push_section(&mut out, "Characters", &characters);

    let words: Vec<Row> = report
        .words()
        .iter()
        .map(|e| Row::new(e.key.clone(), e))
        .collect();
    push_section(&mut out, "Words", &words);

    for warning in report.warnings() {
        out.push_str(&format!("\nWarning: {}\n", warning));
    }
    out
}

/// Render and write a report
pub fn write_report(
    report: &StatisticsReport,
    format: ReportFormat,
    destination: &ReportDestination,
) -> Result<(), StatzError> {
    let rendered = render(report, format)?;
    match destination {
        ReportDestination::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
        ReportDestination::Path(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
        }
    }
    Ok(())
}

struct Row {
    label: String,
    count: u64,
    probability: Option<f64>,
    reference_probability: Option<f64>,
}

impl Row {
    fn new<K>(label: String, entry: &ReportEntry<K>) -> Self {
        Row {
            label,
            count: entry.count,
            probability: entry.probability,
            reference_probability: entry.reference_probability,
        }
    }
}

fn push_section(out: &mut String, title: &str, rows: &[Row]) {
    if rows.is_empty() {
        return;
    }
    out.push_str(&format!("\n{}\n", title));

    let label_width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|r| r.count.to_string().len())
        .max()
        .unwrap_or(0);

    for row in rows {
        let padding = " ".repeat(label_width - row.label.width());
        let mut line = format!(
            "  {}{}  {:>count_width$}",
            row.label, padding, row.count
        );
        if let Some(p) = row.probability {
            line.push_str(&format!("  {:.4}", p));
        }
        if let Some(p) = row.reference_probability {
            line.push_str(&format!("  (reference {:.4})", p));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod writer_tests;
