//! Text output for grids.
//!
//! [`table`] is a small space-delimited table writer with printf-style
//! numeric formats; [`grid_file`] uses it to dump a grid one point per row.

pub mod grid_file;
pub mod table;

pub use grid_file::write_grid;
pub use table::{FieldFormat, TableWriter};
