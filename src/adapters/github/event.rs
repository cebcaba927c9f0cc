//! GitHub Actions event payload
//!
//! Reads the webhook payload a workflow run receives at `GITHUB_EVENT_PATH`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::PullRequestRefs;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Debug, Deserialize)]
struct PullRequestPayload {
    number: Option<u64>,
    head: Option<RefPayload>,
    base: Option<RefPayload>,
}

#[derive(Debug, Deserialize)]
struct RefPayload {
    #[serde(rename = "ref")]
    name: Option<String>,
}

/// Extract pull request refs from an event payload
///
/// A payload without `pull_request` (push, schedule, ...) yields empty refs.
///
/// # Errors
///
/// Returns an error if the payload is not valid JSON.
pub fn parse_event(payload: &str) -> Result<PullRequestRefs> {
    let event: EventPayload = serde_json::from_str(payload)?;
    let Some(pr) = event.pull_request else {
        return Ok(PullRequestRefs::default());
    };

    Ok(PullRequestRefs {
        number: pr.number,
        source_branch: pr.head.and_then(|h| h.name),
        target_branch: pr.base.and_then(|b| b.name),
    })
}

/// Read pull request refs from an event file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_event(path: &Path) -> Result<PullRequestRefs> {
    log::debug!("Reading event payload from {}", path.display());
    let payload = fs::read_to_string(path)?;
    parse_event(&payload)
}
