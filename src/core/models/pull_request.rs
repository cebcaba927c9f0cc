//! Pull request references

/// Branches and number of the pull request that triggered the run
///
/// Every field is optional: a push or schedule run has no pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestRefs {
    /// Pull request number, needed to post a comment
    pub number: Option<u64>,
    /// Head ref (the branch being merged)
    pub source_branch: Option<String>,
    /// Base ref (the branch being merged into)
    pub target_branch: Option<String>,
}

impl PullRequestRefs {
    /// Create refs for a pull request
    #[must_use]
    pub fn new(number: u64, source_branch: impl Into<String>, target_branch: impl Into<String>) -> Self {
        Self {
            number: Some(number),
            source_branch: Some(source_branch.into()),
            target_branch: Some(target_branch.into()),
        }
    }

    /// Both branches, if both are known and non-empty
    #[must_use]
    pub fn branches(&self) -> Option<(&str, &str)> {
        let source = self.source_branch.as_deref().filter(|s| !s.is_empty())?;
        let target = self.target_branch.as_deref().filter(|s| !s.is_empty())?;
        Some((source, target))
    }
}
