//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::core::models::GateOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a gate run
#[derive(Debug, Serialize)]
pub struct GateReport {
    /// Whether the pull request may proceed
    pub passed: bool,
    /// What the gate decided
    #[serde(flatten)]
    pub outcome: GateOutcome,
}

/// Result of resolving an issue key
#[derive(Debug, Serialize)]
pub struct ResolveResult {
    /// Branch the key was resolved from
    pub branch: String,
    /// Pattern used, if any
    pub pattern: Option<String>,
    /// Resolved issue key
    pub issue_key: String,
}

/// Result of matching a fix version against a branch
#[derive(Debug, Serialize)]
pub struct MatchResult {
    /// Fix version compared
    pub fix_version: String,
    /// Target branch compared
    pub target_branch: String,
    /// Semver token found in the fix version
    pub fix_version_semver: Option<String>,
    /// Semver token found in the target branch
    pub target_branch_semver: Option<String>,
    /// Whether they match
    pub matched: bool,
}

impl From<GateOutcome> for GateReport {
    fn from(outcome: GateOutcome) -> Self {
        Self {
            passed: outcome.passed(),
            outcome,
        }
    }
}

impl GateReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human()),
            OutputMode::Json => render_json(self),
        }
    }

    /// Human-readable summary line
    #[must_use]
    pub fn human(&self) -> String {
        match &self.outcome {
            GateOutcome::Skipped => {
                "Not a pull request run. No fix version check performed.".to_string()
            },
            GateOutcome::FixVersionNotFound { issue_key, .. } => {
                format!("Fix version in Jira not found for {issue_key}")
            },
            GateOutcome::Matched {
                fix_version,
                target_branch,
            } => format!("Fix version matched: {fix_version} and {target_branch}"),
            GateOutcome::Mismatched {
                fix_version,
                target_branch,
            } => format!("Fix version not matched: {fix_version} and {target_branch}"),
        }
    }
}

impl ResolveResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.issue_key),
            OutputMode::Json => render_json(self),
        }
    }
}

impl MatchResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let verdict = if self.matched { "matched" } else { "not matched" };
        println!("Fix version {verdict}: {} and {}", self.fix_version, self.target_branch);
        if let (Some(version), Some(branch)) = (&self.fix_version_semver, &self.target_branch_semver) {
            println!("  compared semver tokens {version} and {branch}");
        }
    }
}

/// Print any result as pretty JSON
fn render_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize output: {e}"),
    }
}
