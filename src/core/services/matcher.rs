//! Version matcher - decides whether a fix version belongs on a target branch
//!
//! This module contains pure matching logic with no I/O dependencies.

use std::sync::LazyLock;

use regex::Regex;

/// Three dot-separated ASCII digit groups, not touching another digit or dot
static SEMVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9.])([0-9]+\.[0-9]+\.[0-9]+)(?:$|[^0-9.])").expect("semver pattern compiles")
});

/// Extract the first semantic-version token from `input`
///
/// The token is returned as written; `1.2.03` stays `1.2.03`.
///
/// # Examples
///
/// ```
/// use fixversion_gate::core::services::extract_semver;
///
/// assert_eq!(extract_semver("Frontend 1.2.3"), Some("1.2.3"));
/// assert_eq!(extract_semver("release/1.2.3"), Some("1.2.3"));
/// assert_eq!(extract_semver("1.2.3.4"), None);
/// assert_eq!(extract_semver("hotfix"), None);
/// ```
#[must_use]
pub fn extract_semver(input: &str) -> Option<&str> {
    SEMVER
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check if a fix version corresponds to a target branch
///
/// Rules, in order:
/// 1. If both sides carry a semver token, the tokens must be equal as strings
/// 2. If the fix version has no `/` and the branch has exactly one `/`,
///    the fix version must equal the part after it
/// 3. Otherwise the two strings must be equal
///
/// A branch with two or more `/` never matches through rule 2.
///
/// # Arguments
///
/// * `fix_version` - Release label from the tracker
/// * `target_branch` - Branch the pull request merges into
#[must_use]
pub fn is_matched_version(fix_version: &str, target_branch: &str) -> bool {
    if let (Some(version), Some(branch)) = (extract_semver(fix_version), extract_semver(target_branch)) {
        return version == branch;
    }

    if !fix_version.contains('/') {
        let parts: Vec<&str> = target_branch.split('/').collect();
        if let [_, name] = parts.as_slice() {
            return fix_version == *name;
        }
    }

    fix_version == target_branch
}
