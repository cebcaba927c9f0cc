//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `jira/` - Issue lookup over the Jira REST API
//! - `github/` - Workflow event payload and pull request comments

pub mod github;
pub mod jira;

pub use github::{GitHubContext, GitHubPullRequest};
pub use jira::JiraClient;
