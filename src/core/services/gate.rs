//! Gate service - sequences issue lookup and version matching
//!
//! Talks to the outside world only through the [`IssueTracker`] and
//! [`PullRequestPlatform`] ports.

use crate::core::models::GateOutcome;
use crate::core::ports::{IssueTracker, PullRequestPlatform};
use crate::core::services::{IssueKeyResolver, is_matched_version};
use crate::error::Result;

/// Run the fix version gate for the pull request exposed by `platform`
///
/// 1. Without both branches the run is skipped
/// 2. The issue key is resolved from the source branch and looked up
/// 3. Without a fix version, `not_found_message` is posted if configured
/// 4. Otherwise the fix version is matched against the target branch
///
/// # Errors
///
/// Tracker and platform failures are returned unchanged; nothing is retried.
pub async fn run_gate<T, P>(
    tracker: &T,
    platform: &P,
    resolver: &IssueKeyResolver,
    not_found_message: Option<&str>,
) -> Result<GateOutcome>
where
    T: IssueTracker,
    P: PullRequestPlatform,
{
    let Some((source_branch, target_branch)) = platform.pull_request().branches() else {
        log::info!("No pull request branches found, skipping fix version check");
        return Ok(GateOutcome::Skipped);
    };

    let issue_key = resolver.resolve(source_branch);
    log::debug!("Resolved issue key '{issue_key}' from branch '{source_branch}'");

    let issue = tracker.find_issue(issue_key).await?;

    let Some(fix_version) = issue.release_version() else {
        let commented = match not_found_message.filter(|m| !m.is_empty()) {
            Some(message) => {
                platform.post_comment(message).await?;
                log::info!("Comment: {message}");
                true
            },
            None => false,
        };
        log::info!("Fix version in Jira not found for {issue_key}");
        return Ok(GateOutcome::FixVersionNotFound {
            issue_key: issue_key.to_string(),
            commented,
        });
    };

    let outcome = if is_matched_version(fix_version, target_branch) {
        GateOutcome::Matched {
            fix_version: fix_version.to_string(),
            target_branch: target_branch.to_string(),
        }
    } else {
        GateOutcome::Mismatched {
            fix_version: fix_version.to_string(),
            target_branch: target_branch.to_string(),
        }
    };
    log::debug!("Gate outcome for {issue_key}: {outcome:?}");

    Ok(outcome)
}
