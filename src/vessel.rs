//! Vessel kinds and the grid vessel that couples a [`Grid`] with its buffer.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::data::storage::{Storage, VecStorage};
use crate::geometry::grid::Grid;
use crate::grid_error::GridError;
use crate::io::grid_file::write_grid;
use crate::io::table::FieldFormat;

/// The kind of accumulator a factory is building.
///
/// Only grid kinds may be configured with `MIN`/`MAX`/`NBIN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VesselKind {
    /// Plain grid of values.
    Grid,
    /// Histogram accumulated on a grid.
    HistogramGrid,
    /// Function (value and optional derivatives) tabulated on a grid.
    FunctionGrid,
    /// Running sum of a quantity.
    Sum,
    /// Running average of a quantity.
    Mean,
    /// Smallest value seen.
    Min,
    /// Largest value seen.
    Max,
}

impl VesselKind {
    /// Whether this kind stores its data on a grid.
    pub fn is_grid(self) -> bool {
        matches!(
            self,
            VesselKind::Grid | VesselKind::HistogramGrid | VesselKind::FunctionGrid
        )
    }

    /// Keyword under which the kind is requested.
    pub fn keyword(self) -> &'static str {
        match self {
            VesselKind::Grid => "GRID",
            VesselKind::HistogramGrid => "HISTOGRAM_GRID",
            VesselKind::FunctionGrid => "FUNCTION_GRID",
            VesselKind::Sum => "SUM",
            VesselKind::Mean => "MEAN",
            VesselKind::Min => "MIN",
            VesselKind::Max => "MAX",
        }
    }
}

/// A grid together with the accumulation buffer holding its values.
///
/// The buffer is sized by [`Grid::resize`] on construction; afterwards the
/// grid geometry is fixed and only the values change.
#[derive(Clone, Debug)]
pub struct GridVessel<S: Storage<f64> = VecStorage<f64>> {
    grid: Grid,
    buffer: S,
}

impl GridVessel<VecStorage<f64>> {
    /// Vessel backed by a fresh zeroed `Vec`.
    pub fn with_vec(grid: Grid) -> Result<Self, GridError> {
        Self::new(grid, VecStorage::new())
    }
}

impl<S: Storage<f64>> GridVessel<S> {
    /// Couple `grid` with `buffer`, resizing the buffer to fit.
    ///
    /// # Errors
    /// `ElementsPerPointUnset` if the grid stores no elements per point.
    pub fn new(grid: Grid, mut buffer: S) -> Result<Self, GridError> {
        grid.resize(&mut buffer)?;
        Ok(Self { grid, buffer })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn buffer(&self) -> &S {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut S {
        &mut self.buffer
    }

    pub fn into_parts(self) -> (Grid, S) {
        (self.grid, self.buffer)
    }

    /// Zero every stored value.
    pub fn clear(&mut self) {
        self.buffer.as_mut_slice().fill(0.0);
    }

    #[inline]
    pub fn get_element(&self, point: usize, element: usize) -> f64 {
        self.grid.get_element(&self.buffer, point, element)
    }

    #[inline]
    pub fn set_element(&mut self, point: usize, element: usize, value: f64) {
        self.grid.set_element(&mut self.buffer, point, element, value);
    }

    #[inline]
    pub fn add_to_element(&mut self, point: usize, element: usize, value: f64) {
        self.grid.add_to_element(&mut self.buffer, point, element, value);
    }

    #[inline]
    pub fn get_element_at(&self, indices: &[usize], element: usize) -> f64 {
        self.grid.get_element_at(&self.buffer, indices, element)
    }

    #[inline]
    pub fn set_element_at(&mut self, indices: &[usize], element: usize, value: f64) {
        self.grid.set_element_at(&mut self.buffer, indices, element, value);
    }

    #[inline]
    pub fn add_to_element_at(&mut self, indices: &[usize], element: usize, value: f64) {
        self.grid.add_to_element_at(&mut self.buffer, indices, element, value);
    }

    /// Dump every grid point as one row; see [`write_grid`].
    pub fn write_to_file<W: Write>(&self, writer: W, fmt: &str) -> Result<(), GridError> {
        let fmt = FieldFormat::parse(fmt)?;
        write_grid(&self.grid, &self.buffer, writer, &fmt)
    }
}
