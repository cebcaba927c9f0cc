//! Core domain logic for fixversion-gate
//!
//! This module contains pure business logic with no I/O dependencies.
//! Jira and GitHub are reached only through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Issue, FixVersion, PullRequestRefs, GateOutcome)
//! - `services/` - Issue key resolution, version matching, gate orchestration
//! - `ports/` - Trait definitions for the issue tracker and the source-control platform

pub mod models;
pub mod ports;
pub mod services;
