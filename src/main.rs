//! fixversion-gate - A CI gate for release branches
//!
//! Fails a pull request whose Jira fix version does not correspond to the
//! branch it targets.

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

mod cli;

use std::process::ExitCode;

/// Main entry point for the fixversion-gate CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            cli::report_failure(&err);
            ExitCode::FAILURE
        },
    }
}
