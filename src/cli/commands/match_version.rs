//! Match a fix version against a target branch

use std::process::ExitCode;

use fixversion_gate::core::services::{extract_semver, is_matched_version};
use fixversion_gate::output::{MatchResult, OutputMode};

/// Compare without touching Jira; exits 1 on mismatch like `check`
pub fn match_version(fix_version: &str, target_branch: &str, mode: OutputMode) -> ExitCode {
    let matched = is_matched_version(fix_version, target_branch);

    let result = MatchResult {
        fix_version: fix_version.to_string(),
        target_branch: target_branch.to_string(),
        fix_version_semver: extract_semver(fix_version).map(ToString::to_string),
        target_branch_semver: extract_semver(target_branch).map(ToString::to_string),
        matched,
    };
    result.render(mode);

    if matched { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}
