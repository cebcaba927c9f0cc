//! Source-control platform port
//!
//! Defines the interface to the pull request under check.

use crate::core::models::PullRequestRefs;
use crate::error::Result;

/// Pull request platform abstraction
pub trait PullRequestPlatform: Send + Sync {
    /// Branches and number of the triggering pull request
    fn pull_request(&self) -> &PullRequestRefs;

    /// Post a comment on the pull request
    ///
    /// Fails with [`GateError::NotPullRequest`](crate::error::GateError::NotPullRequest)
    /// when the run was not triggered by a pull request.
    fn post_comment(&self, body: &str) -> impl Future<Output = Result<()>> + Send;
}
