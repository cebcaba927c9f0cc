//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the gate logic
//! and external systems (the issue tracker and the source-control platform).
//!
//! Implementations live in the `adapters` module.

mod issue_tracker;
mod pull_request;

pub use issue_tracker::IssueTracker;
pub use pull_request::PullRequestPlatform;
