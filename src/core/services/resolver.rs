//! Issue key resolver - extracts a ticket key from a branch name
//!
//! This module contains pure matching logic with no I/O dependencies.

use regex::Regex;

use crate::error::Result;

/// Extracts an issue key from a branch name using an optional pattern
///
/// Without a pattern the branch name itself is the key. With a pattern,
/// the first capture group of the first match is the key; when the
/// pattern does not match, or its first group is absent or empty, the
/// branch name is used unchanged.
#[derive(Debug, Clone, Default)]
pub struct IssueKeyResolver {
    pattern: Option<Regex>,
}

impl IssueKeyResolver {
    /// Compile a resolver
    ///
    /// `None`, an empty string and a whitespace-only string all mean
    /// "no pattern". Any other pattern is compiled exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidPattern`](crate::error::GateError::InvalidPattern)
    /// if the pattern does not compile.
    pub fn new(pattern: Option<&str>) -> Result<Self> {
        let pattern = match pattern {
            Some(p) if !p.trim().is_empty() => Some(Regex::new(p)?),
            _ => None,
        };
        Ok(Self { pattern })
    }

    /// Whether a pattern is configured
    #[must_use]
    pub const fn has_pattern(&self) -> bool {
        self.pattern.is_some()
    }

    /// Resolve the issue key for `branch`
    #[must_use]
    pub fn resolve<'a>(&self, branch: &'a str) -> &'a str {
        let Some(re) = &self.pattern else {
            return branch;
        };

        re.captures(branch)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|key| !key.is_empty())
            .unwrap_or(branch)
    }
}
