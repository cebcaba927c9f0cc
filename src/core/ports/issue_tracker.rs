//! Issue tracker port
//!
//! Defines the interface for looking up tickets.

use crate::core::models::Issue;
use crate::error::Result;

/// Issue tracker abstraction
///
/// Implementations fetch a ticket by key. A missing ticket or a network
/// failure is an error; the gate never retries.
pub trait IssueTracker: Send + Sync {
    /// Fetch the issue with the given key
    fn find_issue(&self, key: &str) -> impl Future<Output = Result<Issue>> + Send;
}
