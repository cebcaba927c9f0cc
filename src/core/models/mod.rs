//! Domain models for fixversion-gate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Issue`] - A tracker ticket and its fix versions
//! - [`PullRequestRefs`] - The branches (and number) of the pull request under check
//! - [`GateOutcome`] - What the gate decided

mod issue;
mod outcome;
mod pull_request;

pub use issue::{FixVersion, Issue};
pub use outcome::GateOutcome;
pub use pull_request::PullRequestRefs;
