//! fixversion-gate - A CI gate for release branches
//!
//! This library checks that the Jira ticket behind a pull request is
//! planned for the release the pull request targets: the ticket's fix
//! version has to correspond to the target branch name.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// User agent sent to Jira and GitHub
pub const USER_AGENT: &str = concat!("fixversion-gate/", env!("CARGO_PKG_VERSION"));

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;

pub use error::{GateError, Result};
