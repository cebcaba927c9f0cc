//! Gate outcome
//!
//! Defines what the gate decided and how that maps to an exit code.

use serde::Serialize;

/// Result of a gate run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GateOutcome {
    /// Not a pull request run; nothing was checked
    Skipped,
    /// The issue has no fix version
    FixVersionNotFound {
        /// Issue key that was looked up
        issue_key: String,
        /// Whether a "not found" comment was posted
        commented: bool,
    },
    /// The fix version corresponds to the target branch
    Matched {
        /// Fix version from the tracker
        fix_version: String,
        /// Target branch of the pull request
        target_branch: String,
    },
    /// The fix version does not correspond to the target branch
    Mismatched {
        /// Fix version from the tracker
        fix_version: String,
        /// Target branch of the pull request
        target_branch: String,
    },
}

impl GateOutcome {
    /// Whether the pull request may proceed
    #[must_use]
    pub const fn passed(&self) -> bool {
        !matches!(self, Self::Mismatched { .. })
    }

    /// Process exit code for this outcome
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.passed() { 0 } else { 1 }
    }
}
