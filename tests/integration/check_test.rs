//! Integration tests for the `check` command
//!
//! Covers runs that end before the Jira lookup, runs that fail at it, and
//! full runs against a local Jira and GitHub stub.

use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;

use super::gate;
use super::stub_server::StubServer;

const PULL_REQUEST_EVENT: &str = r#"{
    "pull_request": {
        "number": 5,
        "head": {"ref": "feature/[ABC-123]-login"},
        "base": {"ref": "release/1.2.3"}
    }
}"#;

fn write_event(dir: &TempDir, payload: &str) -> PathBuf {
    let path = dir.path().join("event.json");
    fs::write(&path, payload).unwrap();
    path
}

#[test]
fn test_missing_token_fails() {
    gate()
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input required and not supplied: GITHUB_TOKEN"));
}

#[test]
fn test_missing_token_annotates_in_actions() {
    gate()
        .env("GITHUB_ACTIONS", "true")
        .assert()
        .failure()
        .stdout(predicate::str::contains("::error::Configuration error"));
}

#[test]
fn test_no_event_skips() {
    gate()
        .env("INPUT_GITHUB_TOKEN", "token")
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No fix version check performed"));
}

#[test]
fn test_push_event_skips() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, r#"{"ref": "refs/heads/main"}"#);

    gate()
        .env("INPUT_GITHUB_TOKEN", "token")
        .env("GITHUB_EVENT_PATH", &event)
        .args(["--json", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"skipped\""));
}

#[test]
fn test_push_event_ignores_invalid_issue_regex() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, r#"{"ref": "refs/heads/main"}"#);

    gate()
        .env("INPUT_GITHUB_TOKEN", "token")
        .env("INPUT_JIRA_ISSUE_REGEX", "([A-Z]+")
        .env("GITHUB_EVENT_PATH", &event)
        .args(["--json", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"skipped\""));
}

#[test]
fn test_invalid_issue_regex_fails() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);

    gate()
        .env("INPUT_GITHUB_TOKEN", "token")
        .env("INPUT_JIRA_ISSUE_REGEX", "([A-Z]+")
        .arg("check")
        .arg("--event-path")
        .arg(&event)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid issue pattern"));
}

#[test]
fn test_pull_request_without_jira_url_fails() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);

    gate()
        .env("INPUT_GITHUB_TOKEN", "token")
        .arg("check")
        .arg("--event-path")
        .arg(&event)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JIRA_URL"));
}

#[test]
fn test_unreachable_jira_fails() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);

    gate()
        .env("INPUT_GITHUB_TOKEN", "token")
        .env("INPUT_JIRA_URL", "http://127.0.0.1:9")
        .env("INPUT_JIRA_ISSUE_REGEX", r"\[(ABC-\d+)\]")
        .arg("check")
        .arg("--event-path")
        .arg(&event)
        .assert()
        .failure()
        .stderr(predicate::str::contains("HTTP error"));
}

// =============================================================================
// FULL RUNS AGAINST A STUB
// =============================================================================

/// A `check` run wired to `server` for both Jira and GitHub
fn gate_against(server: &StubServer, event: &Path) -> assert_cmd::Command {
    let mut cmd = gate();
    cmd.env("INPUT_GITHUB_TOKEN", "ghs_token")
        .env("INPUT_JIRA_URL", server.url())
        .env("INPUT_JIRA_USER", "bot")
        .env("INPUT_JIRA_PASSWORD", "secret")
        .env("INPUT_JIRA_ISSUE_REGEX", r"\[(ABC-\d+)\]")
        .env("GITHUB_API_URL", server.url())
        .env("GITHUB_REPOSITORY", "octo/widgets")
        .env("GITHUB_EVENT_PATH", event)
        .arg("check");
    cmd
}

#[test]
fn test_matching_fix_version_passes() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);
    let server = StubServer::builder().jira_issue("ABC-123", &["1.2.3"]).start();

    gate_against(&server, &event)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fix version matched: 1.2.3 and release/1.2.3"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "/rest/api/2/issue/ABC-123?fields=fixVersions");
}

#[test]
fn test_mismatching_fix_version_exits_one() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);
    let server = StubServer::builder().jira_issue("ABC-123", &["1.3.0"]).start();

    gate_against(&server, &event)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Fix version not matched: 1.3.0 and release/1.2.3"));
}

#[test]
fn test_missing_fix_version_posts_comment() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);
    let server = StubServer::builder()
        .jira_issue("ABC-123", &[])
        .github_comments("octo/widgets", 5, 201)
        .start();

    gate_against(&server, &event)
        .env("INPUT_NOT_FOUND_MESSAGE", "Please set a fix version")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"fix_version_not_found\""))
        .stdout(predicate::str::contains("\"commented\": true"));

    let requests = server.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].method, "POST");
    assert_eq!(requests[1].url, "/repos/octo/widgets/issues/5/comments");
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer ghs_token"));
    assert!(requests[1].body.contains("Please set a fix version"));
}

#[test]
fn test_unknown_issue_fails() {
    let temp = TempDir::new().unwrap();
    let event = write_event(&temp, PULL_REQUEST_EVENT);
    let server = StubServer::builder().start();

    gate_against(&server, &event)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Issue does not exist: ABC-123"));
}

