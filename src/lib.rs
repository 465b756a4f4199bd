#![cfg_attr(docsrs, feature(doc_cfg))]
//! # grid-vessel
//!
//! grid-vessel is a regular multi-dimensional grid container for histogram and
//! free-energy-surface accumulation in enhanced-sampling codes. It maps a
//! continuous D-dimensional domain onto a rectilinear grid of points, stores a
//! fixed number of values at every point (a function value, optionally with its
//! partial derivatives) in an external flat buffer, and dumps the whole grid as
//! a row-per-point text table.
//!
//! ## Features
//! - `MIN`/`MAX`/`NBIN` keyword parsing with bounds kept as value plus text
//! - Two setup protocols: explicit field names, or derived from the variables
//!   the grid is a function of (periodic variables keep their own domain)
//! - Column-major flat index ↔ multi-index ↔ coordinate conversions
//! - Element get/set/accumulate against any [`Storage`](data::Storage) buffer
//! - gnuplot-friendly text output with printf-style numeric formats
//!
//! ## Grid points
//!
//! A non-periodic axis with `MIN=a MAX=b NBIN=n` gets `n + 1` points spaced
//! `(b - a) / n` apart, so both `a` and `b` are grid points. A periodic axis
//! gets exactly `n` points: the last bin wraps onto the first.
//!
//! ## Usage
//!
//! ```rust
//! # fn try_main() -> Result<(), grid_vessel::grid_error::GridError> {
//! use grid_vessel::prelude::*;
//!
//! let grid = GridKeywords::parse("MIN=-pi,0 MAX=pi,2 NBIN=4,2")?
//!     .into_setup(VesselKind::FunctionGrid)?
//!     .finish_with_arguments(
//!         &[Argument::periodic("phi", "-pi", "pi"), Argument::new("d")],
//!         "bias",
//!         false,
//!     )?;
//! assert_eq!(grid.extents(), &[4, 3]);
//!
//! let mut vessel = GridVessel::with_vec(grid)?;
//! vessel.add_to_element_at(&[1, 2], 0, 0.5);
//! let mut out = Vec::new();
//! vessel.write_to_file(&mut out, "%8.4f")?;
//! # Ok(())
//! # }
//! # try_main().unwrap();
//! ```
//!
//! ## Invariant checks
//! Grid consistency is validated after setup in debug builds; enable the
//! `check-invariants` feature to keep the checks in release builds.

pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod grid_error;
pub mod io;
pub mod keywords;
pub mod vessel;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::bound::Bound;
    pub use crate::data::storage::{Storage, VecStorage};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::axis::Axis;
    pub use crate::geometry::grid::Grid;
    pub use crate::geometry::setup::{Argument, BoundVariable, PendingGrid};
    pub use crate::grid_error::GridError;
    pub use crate::io::table::{FieldFormat, TableWriter};
    pub use crate::keywords::GridKeywords;
    pub use crate::vessel::{GridVessel, VesselKind};
}
