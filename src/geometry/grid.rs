//! Grid: geometry and element layout of a regular D-dimensional grid.
//!
//! A `Grid` is produced by one of the setup protocols on
//! [`PendingGrid`](crate::geometry::setup::PendingGrid) and is immutable
//! afterwards. It does not hold values; it maps `(point, element)` pairs to
//! offsets in an external [`Storage`](crate::data::storage::Storage) buffer.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::axis::Axis;
use crate::grid_error::GridError;
use crate::vessel::VesselKind;

/// Regular grid geometry plus the number of values stored per point.
///
/// # Invariants
///
/// - At least one axis; `extents[k] == axes[k].nbin()` and every extent is > 0.
/// - `total_points` is the product of the extents.
/// - `field_names.len() == dimension + elements_per_point`: axis names first,
///   then one name per stored element.
///
/// These are checked after setup in debug builds and when the
/// `check-invariants` feature is enabled. Deserialization always checks them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    kind: VesselKind,
    axes: Vec<Axis>,
    extents: Vec<usize>,
    nper: usize,
    total_points: usize,
    field_names: Vec<String>,
}

/// Unchecked serialized form of a [`Grid`].
#[derive(Deserialize)]
struct GridRepr {
    kind: VesselKind,
    axes: Vec<Axis>,
    extents: Vec<usize>,
    nper: usize,
    total_points: usize,
    field_names: Vec<String>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        let grid = Self {
            kind: repr.kind,
            axes: repr.axes,
            extents: repr.extents,
            nper: repr.nper,
            total_points: repr.total_points,
            field_names: repr.field_names,
        };
        grid.validate_invariants()?;
        Ok(grid)
    }
}

/// Product of `extents`, provided it and the matching buffer length for
/// `nper` elements per point both fit in `usize`.
fn checked_total_points(extents: &[usize], nper: usize) -> Option<usize> {
    let total = extents.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n))?;
    total.checked_mul(nper)?;
    Some(total)
}

impl Grid {
    /// # Errors
    /// `TooManyPoints` if the point count or buffer length overflows.
    pub(crate) fn from_axes(
        kind: VesselKind,
        axes: Vec<Axis>,
        nper: usize,
        field_names: Vec<String>,
    ) -> Result<Self, GridError> {
        let extents: Vec<usize> = axes.iter().map(Axis::nbin).collect();
        let total_points = checked_total_points(&extents, nper).ok_or(GridError::TooManyPoints)?;
        let grid = Self {
            kind,
            axes,
            extents,
            nper,
            total_points,
            field_names,
        };
        grid.debug_assert_invariants();
        log::debug!("{:?}: {}", grid.kind, grid.describe());
        Ok(grid)
    }

    /// Which vessel kind built this grid.
    #[inline]
    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    /// Number of axes.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.axes.len()
    }

    #[inline]
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Axis `k`.
    ///
    /// # Panics
    /// Panics if `k >= dimension()`.
    #[inline]
    pub fn axis(&self, k: usize) -> &Axis {
        &self.axes[k]
    }

    /// Number of grid points along each axis.
    #[inline]
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Number of scalars stored at every grid point.
    #[inline]
    pub fn elements_per_point(&self) -> usize {
        self.nper
    }

    #[inline]
    pub fn total_points(&self) -> usize {
        self.total_points
    }

    /// Number of scalars the backing buffer must hold.
    #[inline]
    pub fn buffer_len(&self) -> usize {
        self.total_points * self.nper
    }

    /// Axis names followed by element names.
    #[inline]
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    #[inline]
    pub fn coordinate_names(&self) -> &[String] {
        &self.field_names[..self.dimension()]
    }

    #[inline]
    pub fn element_names(&self) -> &[String] {
        &self.field_names[self.dimension()..]
    }

    /// One-line summary, echoing the bounds as they were written.
    ///
    /// ```rust
    /// # fn try_main() -> Result<(), grid_vessel::grid_error::GridError> {
    /// use grid_vessel::keywords::GridKeywords;
    /// use grid_vessel::vessel::VesselKind;
    /// let grid = GridKeywords::parse("MIN=0,-1 MAX=10,1 NBIN=5,4")?
    ///     .into_setup(VesselKind::Grid)?
    ///     .finish_with_names(1, &["x", "y", "f"])?;
    /// assert_eq!(
    ///     grid.describe(),
    ///     "grid of 6 X 5 equally spaced points between (0,-1) and (10,1)"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn describe(&self) -> String {
        format!(
            "grid of {} equally spaced points between ({}) and ({})",
            self.extents.iter().join(" X "),
            self.axes.iter().map(|a| a.min().text()).join(","),
            self.axes.iter().map(|a| a.max().text()).join(","),
        )
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl DebugInvariants for Grid {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Grid");
    }

    fn validate_invariants(&self) -> Result<(), GridError> {
        if self.axes.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        if self.extents.len() != self.axes.len() {
            return Err(GridError::InvariantViolation(format!(
                "{} extents for {} axes",
                self.extents.len(),
                self.axes.len()
            )));
        }
        for (k, (axis, &n)) in self.axes.iter().zip(&self.extents).enumerate() {
            if n == 0 || axis.nbin() != n {
                return Err(GridError::InvariantViolation(format!(
                    "axis {k} has extent {n} but {} bins",
                    axis.nbin()
                )));
            }
        }
        let product =
            checked_total_points(&self.extents, self.nper).ok_or(GridError::TooManyPoints)?;
        if product != self.total_points {
            return Err(GridError::InvariantViolation(format!(
                "total_points {} != product of extents {product}",
                self.total_points
            )));
        }
        if self.field_names.len() != self.dimension() + self.nper {
            return Err(GridError::FieldNameCount {
                expected: self.dimension() + self.nper,
                found: self.field_names.len(),
            });
        }
        Ok(())
    }
}
