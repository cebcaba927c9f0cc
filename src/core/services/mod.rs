//! Business logic services
//!
//! - [`resolver`] - Extract an issue key from a branch name
//! - [`matcher`] - Decide whether a fix version corresponds to a target branch
//! - [`gate`] - Sequence the two against the tracker and the pull request

pub mod gate;
pub mod matcher;
pub mod resolver;

pub use gate::run_gate;
pub use matcher::{extract_semver, is_matched_version};
pub use resolver::IssueKeyResolver;
