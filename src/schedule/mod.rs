//! Module `schedule`: reducing the lecture record stream to the public
//! subject-key → slot-list mapping.
//!
//! Submodules:
//! - `grouping`: dedup, key resolution and deterministic slot ordering
//! - `sections`: section-name → key-suffix classifier

mod grouping;
mod sections;

pub use grouping::group_schedule;
pub use sections::section_suffix;
