// Root library for the `timegrid` crate.
// Pipeline, left to right: grid -> extract -> schedule -> sqlgen.
pub mod extract;
pub mod grid;
pub mod models;
pub mod schedule;
pub mod sqlgen;

pub use extract::extract_schedule;
pub use grid::load_grid;
pub use schedule::group_schedule;
pub use sqlgen::generate_insert_statements;
