//! Resolve an issue key from a branch name

use std::process::ExitCode;

use fixversion_gate::config::Inputs;
use fixversion_gate::core::services::IssueKeyResolver;
use fixversion_gate::output::{OutputMode, ResolveResult};

/// Print the issue key for `branch`, using `pattern` or the configured input
pub fn resolve(branch: &str, pattern: Option<&str>, mode: OutputMode) -> anyhow::Result<ExitCode> {
    let pattern = pattern
        .map(ToString::to_string)
        .or_else(|| Inputs::from_env().issue_regex);
    let resolver = IssueKeyResolver::new(pattern.as_deref())?;

    let result = ResolveResult {
        branch: branch.to_string(),
        issue_key: resolver.resolve(branch).to_string(),
        pattern,
    };
    result.render(mode);

    Ok(ExitCode::SUCCESS)
}
