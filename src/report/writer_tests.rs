//! Tests for report/writer

use std::fs;

use tempfile::TempDir;

use super::*;
use crate::probability::Probabilities;
use crate::report::{TrackedSet, build};
use crate::tally::Tallies;

fn scenario_report(with_probabilities: bool) -> StatisticsReport {
    let tallies = Tallies {
        characters: "aba abb".chars().collect(),
        words: ["aba", "abb"].iter().map(|w| w.to_string()).collect(),
    };
    let probabilities = Probabilities::compute(&tallies);
    build(
        "scenario.txt",
        &tallies,
        &TrackedSet::default(),
        with_probabilities.then_some(&probabilities),
    )
}

#[test]
fn test_text_contains_header_and_totals() {
    let text = render_text(&scenario_report(false));
    assert!(text.starts_with("Corpus: scenario.txt\n"));
    assert!(text.contains("Characters: 7 total, 3 distinct"));
    assert!(text.contains("Words: 2 total, 2 distinct"));
}

#[test]
fn test_text_lists_entries_with_quoted_characters() {
    let text = render_text(&scenario_report(false));
    assert!(text.contains("  'a'  3\n"));
    assert!(text.contains("  ' '  1\n"));
    assert!(text.contains("  aba  1\n"));
}

#[test]
fn test_text_shows_probabilities() {
    let text = render_text(&scenario_report(true));
    assert!(text.contains("  'a'  3  0.4286"));
    assert!(text.contains("  aba  1  0.5000"));
}

#[test]
fn test_text_aligns_wide_labels() {
    let tallies = Tallies {
        characters: Default::default(),
        words: ["東京", "a"].iter().map(|w| w.to_string()).collect(),
    };
    let report = build("wide", &tallies, &TrackedSet::default(), None);
    let text = render_text(&report);
    assert!(text.contains("  東京  1\n"));
    assert!(text.contains("  a     1\n"));
}

#[test]
fn test_text_includes_empty_corpus_warning() {
    let report = build("empty", &Tallies::default(), &TrackedSet::default(), None);
    let text = render_text(&report);
    assert!(text.contains("Warning: corpus is empty"));
}

#[test]
fn test_json_round_trips_through_serde_json() {
    let json = render(&scenario_report(true), ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["corpus"], "scenario.txt");
    assert_eq!(value["total_characters"], 7);
    assert_eq!(value["characters"][0]["key"], "a");
    assert_eq!(value["characters"][0]["count"], 3);
    assert!(value["characters"][0]["probability"].is_number());
    assert!(value.get("warnings").is_none());
}

#[test]
fn test_json_omits_probabilities_when_not_requested() {
    let json = render(&scenario_report(false), ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["characters"][0].get("probability").is_none());
}

#[test]
fn test_write_report_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.txt");

    write_report(
        &scenario_report(false),
        ReportFormat::Text,
        &ReportDestination::Path(path.clone()),
    )
    .unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("Corpus: scenario.txt"));
}

#[test]
fn test_write_report_to_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("report.txt");

    let result = write_report(
        &scenario_report(false),
        ReportFormat::Text,
        &ReportDestination::Path(path),
    );
    assert!(matches!(result, Err(StatzError::Io(_))));
}

#[test]
fn test_destination_from_arg() {
    assert_eq!(
        ReportDestination::from_arg(Path::new("-")),
        ReportDestination::Stdout
    );
    assert_eq!(
        ReportDestination::from_arg(Path::new("out.json")),
        ReportDestination::Path(PathBuf::from("out.json"))
    );
}
