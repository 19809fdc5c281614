//! Module `grid`: loading the timetable source into a rectangular matrix.
//!
//! Submodules:
//! - `io`: CSV/XLSX readers and cell-to-string conversion

mod io;

pub use io::{cell_to_string, load_grid, load_grid_csv, load_grid_excel};
