//! Check the current pull request

use std::path::PathBuf;
use std::process::ExitCode;

use fixversion_gate::adapters::{GitHubContext, GitHubPullRequest, JiraClient};
use fixversion_gate::config::Inputs;
use fixversion_gate::core::models::GateOutcome;
use fixversion_gate::core::services::{IssueKeyResolver, run_gate};
use fixversion_gate::output::{GateReport, OutputMode};

/// Run the fix version gate for the pull request of this workflow run
pub fn check(event_path: Option<PathBuf>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let inputs = Inputs::from_env();
    let token = inputs.require_github_token()?;

    let mut context = GitHubContext::from_env();
    if event_path.is_some() {
        context.event_path = event_path;
    }
    let refs = context.pull_request()?;

    let outcome = if refs.branches().is_none() {
        log::info!("No pull request in this run");
        GateOutcome::Skipped
    } else {
        let resolver = IssueKeyResolver::new(inputs.issue_regex.as_deref())?;
        let tracker = JiraClient::new(&inputs.jira)?;
        let platform = GitHubPullRequest::new(token, &context, refs)?;
        log::debug!("Using Jira at {}", tracker.base_url());

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run_gate(
            &tracker,
            &platform,
            &resolver,
            inputs.not_found_message.as_deref(),
        ))?
    };

    let report = GateReport::from(outcome);
    report.render(mode);

    Ok(ExitCode::from(report.outcome.exit_code()))
}
