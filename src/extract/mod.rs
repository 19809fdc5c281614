//! Module `extract`: turning grid rows into lecture records.
//!
//! Submodules:
//! - `rows`: merged-cell forward fill (`RowState`) and row classification
//! - `blocks`: per-weekday block slicing and the full-grid extraction pass

mod blocks;
mod rows;

pub use blocks::{extract_row_records, extract_schedule};
pub use rows::{RowKind, RowState, classify_row};
