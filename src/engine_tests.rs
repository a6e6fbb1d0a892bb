//! Tests for the analysis engine

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::report::ReportWarning;

fn session() -> Session {
    let mut session = Session::new();
    session.initialize().unwrap();
    session
}

fn corpus_file(dir: &TempDir, name: &str, content: &[u8]) -> CorpusSource {
    let path: PathBuf = dir.path().join(name);
    fs::write(&path, content).unwrap();
    CorpusSource::Path(path)
}

#[test]
fn test_analyze_requires_initialized_session() {
    let request = AnalysisRequest::new(Vec::new());
    let result = analyze(&Session::new(), &request);
    assert!(matches!(
        result,
        Err(StatzError::NotInitialized { operation: "analyze" })
    ));
}

#[test]
fn test_analyze_scenario() {
    let dir = TempDir::new().unwrap();
    let mut request = AnalysisRequest::new(vec![corpus_file(&dir, "s.txt", b"aba abb")]);
    request.tracked = TrackedSet::new(['a', 'b'], ["ab"]);
    request.probabilities = true;

    let report = analyze(&session(), &request).unwrap();

    assert_eq!(report.total_characters(), 7);
    assert_eq!(report.total_words(), 2);
    assert_eq!(report.characters().len(), 2);
    let a = report.character('a').unwrap();
    assert_eq!(a.count, 3);
    assert!((a.probability.unwrap() - 3.0 / 7.0).abs() < 1e-9);
    assert!(report.words().is_empty());
    assert!(report.reference().is_none());
}

#[test]
fn test_analyze_multiple_sources_accumulate() {
    let dir = TempDir::new().unwrap();
    let first = corpus_file(&dir, "one.txt", b"red blue");
    let second = corpus_file(&dir, "two.txt", b"blue green");
    let request = AnalysisRequest::new(vec![first.clone(), second.clone()]);

    let report = analyze(&session(), &request).unwrap();

    assert_eq!(report.total_words(), 4);
    assert_eq!(report.word("blue").unwrap().count, 2);
    assert_eq!(report.corpus(), format!("{}, {}", first, second));
}

#[test]
fn test_analyze_empty_corpus_warns_without_failing() {
    let dir = TempDir::new().unwrap();
    let mut request = AnalysisRequest::new(vec![corpus_file(&dir, "empty.txt", b"")]);
    request.probabilities = true;

    let report = analyze(&session(), &request).unwrap();

    assert_eq!(report.total_characters(), 0);
    assert_eq!(report.total_words(), 0);
    assert_eq!(report.warnings(), &[ReportWarning::EmptyCorpus]);
}

#[test]
fn test_analyze_surfaces_decode_error() {
    let dir = TempDir::new().unwrap();
    let request = AnalysisRequest::new(vec![corpus_file(&dir, "bad.txt", b"abc\xfe")]);

    let result = analyze(&session(), &request);
    assert!(matches!(result, Err(StatzError::Decode { offset: 3, .. })));
}

#[test]
fn test_analyze_latin1_encoding() {
    let dir = TempDir::new().unwrap();
    let mut request = AnalysisRequest::new(vec![corpus_file(&dir, "l1.txt", b"caf\xe9")]);
    request.encoding = TextEncoding::Latin1;

    let report = analyze(&session(), &request).unwrap();
    assert_eq!(report.word("café").unwrap().count, 1);
}

#[test]
fn test_analyze_case_insensitive_tracks_folded_words() {
    let dir = TempDir::new().unwrap();
    let mut request = AnalysisRequest::new(vec![corpus_file(&dir, "c.txt", b"The the THE end")]);
    request.tokenizer.case_sensitive = false;
    request.tracked = TrackedSet::new(Vec::new(), ["The"]);

    let report = analyze(&session(), &request).unwrap();
    assert_eq!(report.words().len(), 1);
    assert_eq!(report.words()[0].key, "the");
    assert_eq!(report.words()[0].count, 3);
}

#[test]
fn test_analyze_with_reference_directory() {
    let dir = TempDir::new().unwrap();
    let reference = TempDir::new().unwrap();
    fs::write(reference.path().join("base.txt"), b"aaab").unwrap();

    let mut session = session();
    session.define(reference.path()).unwrap();

    let mut request = AnalysisRequest::new(vec![corpus_file(&dir, "s.txt", b"aba abb")]);
    request.probabilities = true;

    let report = analyze(&session, &request).unwrap();

    let summary = report.reference().unwrap();
    assert_eq!(summary.corpora, 1);
    assert_eq!(report.character('a').unwrap().reference_probability, Some(0.75));
    assert_eq!(report.character(' ').unwrap().reference_probability, None);
}

#[test]
fn test_reference_ignored_without_probabilities() {
    let dir = TempDir::new().unwrap();
    let reference = TempDir::new().unwrap();

    let mut session = session();
    session.define(reference.path()).unwrap();

    let request = AnalysisRequest::new(vec![corpus_file(&dir, "s.txt", b"abc")]);
    let report = analyze(&session, &request).unwrap();
    assert!(report.reference().is_none());
}

#[test]
fn test_analyze_after_finalize_fails() {
    let dir = TempDir::new().unwrap();
    let mut session = session();
    session.finalize();

    let request = AnalysisRequest::new(vec![corpus_file(&dir, "s.txt", b"abc")]);
    assert!(matches!(
        analyze(&session, &request),
        Err(StatzError::NotInitialized { .. })
    ));
}
