//! Grid geometry: axes, setup protocols and index conversions.

pub mod axis;
pub mod grid;
pub mod index;
pub mod setup;

pub use axis::Axis;
pub use grid::Grid;
pub use setup::{Argument, BoundVariable, PendingGrid};
