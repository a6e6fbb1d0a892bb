//! Tests for session/state

use std::sync::{Arc, Mutex};
use std::thread;

use proptest::prelude::*;
use tempfile::TempDir;

use super::*;

fn initialized() -> Session {
    let mut session = Session::new();
    session.initialize().unwrap();
    session
}

#[test]
fn test_reference_undefined_after_initialize() {
    let session = initialized();
    assert!(!session.is_defined());
    assert_eq!(session.get(), None);
}

#[test]
fn test_define_current_directory() {
    let mut session = initialized();
    session.define("./").unwrap();
    assert!(session.is_defined());
    assert_eq!(session.get(), Some(PathBuf::from("./")));
}

#[test]
fn test_define_returns_path_unchanged() {
    let dir = TempDir::new().unwrap();
    let with_slash = format!("{}/", dir.path().display());

    let mut session = initialized();
    session.define(with_slash.as_str()).unwrap();
    assert_eq!(session.get(), Some(PathBuf::from(with_slash)));
}

#[test]
fn test_redefine_last_write_wins() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();

    let mut session = initialized();
    session.define(first.path()).unwrap();
    session.define(second.path()).unwrap();
    assert_eq!(session.get(), Some(second.path().to_path_buf()));
}

#[test]
fn test_get_returns_owned_copy() {
    let dir = TempDir::new().unwrap();
    let mut session = initialized();
    session.define(dir.path()).unwrap();

    let mut copy = session.get().unwrap();
    copy.push("elsewhere");
    assert_eq!(session.get(), Some(dir.path().to_path_buf()));
}

#[test]
fn test_define_empty_path_is_invalid() {
    let mut session = Session::with_validation(PathValidation::NonEmpty);
    session.initialize().unwrap();

    let result = session.define("");
    assert!(matches!(result, Err(StatzError::InvalidPath { .. })));
    assert!(!session.is_defined());
}

#[test]
fn test_define_missing_directory_is_invalid() {
    let dir = TempDir::new().unwrap();
    let mut session = initialized();

    let result = session.define(dir.path().join("missing"));
    match result {
        Err(StatzError::InvalidPath { reason, .. }) => assert_eq!(reason, "not a directory"),
        other => panic!("Expected InvalidPath, got {:?}", other),
    }
}

#[test]
fn test_define_file_is_invalid() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut session = initialized();
    assert!(matches!(
        session.define(file.path()),
        Err(StatzError::InvalidPath { .. })
    ));
}

#[test]
fn test_non_empty_validation_accepts_missing_directory() {
    let mut session = Session::with_validation(PathValidation::NonEmpty);
    session.initialize().unwrap();
    session.define("./corpus").unwrap();
    assert_eq!(session.get(), Some(PathBuf::from("./corpus")));
}

#[test]
fn test_failed_redefine_keeps_previous_value() {
    let dir = TempDir::new().unwrap();
    let mut session = initialized();
    session.define(dir.path()).unwrap();

    assert!(session.define("").is_err());
    assert_eq!(session.get(), Some(dir.path().to_path_buf()));
}

#[test]
fn test_define_before_initialize_fails() {
    let mut session = Session::new();
    assert!(matches!(
        session.define("./"),
        Err(StatzError::NotInitialized { operation: "define" })
    ));
}

#[test]
fn test_define_after_finalize_fails() {
    let mut session = initialized();
    session.finalize();
    assert!(matches!(
        session.define("./"),
        Err(StatzError::NotInitialized { .. })
    ));
}

#[test]
fn test_initialize_twice_fails() {
    let mut session = initialized();
    assert!(matches!(
        session.initialize(),
        Err(StatzError::AlreadyInitialized)
    ));
}

#[test]
fn test_finalize_then_initialize_is_undefined() {
    let mut session = Session::with_validation(PathValidation::NonEmpty);
    session.initialize().unwrap();
    session.define("./corpus").unwrap();
    session.finalize();
    session.initialize().unwrap();

    assert!(!session.is_defined());
    assert_eq!(session.get(), None);
}

#[test]
fn test_finalize_resets_from_any_state() {
    let mut never_initialized = Session::new();
    never_initialized.finalize();
    assert!(!never_initialized.is_defined());

    let mut finalized_twice = initialized();
    finalized_twice.define("./").unwrap();
    finalized_twice.finalize();
    finalized_twice.finalize();
    assert!(!finalized_twice.is_defined());
    assert_eq!(finalized_twice.get(), None);
}

#[test]
fn test_ensure_initialized() {
    let mut session = Session::new();
    assert!(session.ensure_initialized("analyze").is_err());
    session.initialize().unwrap();
    assert!(session.ensure_initialized("analyze").is_ok());
}

#[test]
fn test_shared_session_behind_mutex() {
    let dir = TempDir::new().unwrap();
    let session = Arc::new(Mutex::new(initialized()));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let session = Arc::clone(&session);
            let path = dir.path().to_path_buf();
            thread::spawn(move || {
                let mut guard = session.lock().unwrap();
                guard.define(path).unwrap();
                guard.is_defined()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert_eq!(session.lock().unwrap().get(), Some(dir.path().to_path_buf()));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_define_then_get_round_trips(path in "[a-zA-Z0-9_./-]{1,40}") {
        let mut session = Session::with_validation(PathValidation::NonEmpty);
        session.initialize().unwrap();
        session.define(path.as_str()).unwrap();

        prop_assert!(session.is_defined());
        prop_assert_eq!(session.get(), Some(PathBuf::from(path)));
    }
}
