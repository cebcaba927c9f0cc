//! Tests for reading the GitHub Actions event payload

use std::fs;
use std::path::PathBuf;

use fixversion_gate::adapters::GitHubContext;
use fixversion_gate::adapters::github::load_event;
use tempfile::TempDir;

const PULL_REQUEST_EVENT: &str = r#"{
    "action": "synchronize",
    "number": 17,
    "pull_request": {
        "number": 17,
        "head": {"ref": "feature/[ABC-123]-login"},
        "base": {"ref": "release/1.2.3"}
    },
    "repository": {"full_name": "octo/widgets"}
}"#;

fn write_event(dir: &TempDir, payload: &str) -> PathBuf {
    let path = dir.path().join("event.json");
    fs::write(&path, payload).unwrap();
    path
}

#[test]
fn test_load_pull_request_event() {
    let temp = TempDir::new().unwrap();
    let path = write_event(&temp, PULL_REQUEST_EVENT);

    let refs = load_event(&path).unwrap();

    assert_eq!(refs.number, Some(17));
    assert_eq!(refs.branches(), Some(("feature/[ABC-123]-login", "release/1.2.3")));
}

#[test]
fn test_context_reads_event_path() {
    let temp = TempDir::new().unwrap();
    let context = GitHubContext {
        event_path: Some(write_event(&temp, PULL_REQUEST_EVENT)),
        ..GitHubContext::default()
    };

    let refs = context.pull_request().unwrap();

    assert_eq!(refs.source_branch.as_deref(), Some("feature/[ABC-123]-login"));
}

#[test]
fn test_push_event_is_not_a_pull_request() {
    let temp = TempDir::new().unwrap();
    let path = write_event(&temp, r#"{"ref": "refs/heads/main"}"#);

    let refs = load_event(&path).unwrap();

    assert!(refs.branches().is_none());
    assert_eq!(refs.number, None);
}

#[test]
fn test_missing_event_file_is_error() {
    let temp = TempDir::new().unwrap();
    assert!(load_event(&temp.path().join("missing.json")).is_err());
}
