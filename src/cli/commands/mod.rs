//! Command implementations

mod check;
mod match_version;
mod resolve;

pub use check::check;
pub use match_version::match_version;
pub use resolve::resolve;
