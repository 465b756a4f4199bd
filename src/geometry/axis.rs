//! One coordinate axis of a regular grid.

use serde::{Deserialize, Serialize};

use crate::data::bound::Bound;
use crate::grid_error::GridError;

/// Geometry of a single axis after setup.
///
/// `min`/`max` are the bounds as the user (or a periodic variable) gave them;
/// `upper` is the effective upper bound used for sampling, which for a
/// non-periodic axis lies one bin width past `max` so that `max` itself is a
/// grid point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    name: String,
    min: Bound,
    max: Bound,
    upper: f64,
    nbin: usize,
    width: f64,
    periodic: bool,
}

impl Axis {
    /// Non-periodic axis: one extra bin so both endpoints are sampled.
    ///
    /// # Errors
    /// `TooManyPoints` if `raw_nbin + 1` does not fit in `usize`.
    pub(crate) fn non_periodic(
        name: String,
        min: Bound,
        max: Bound,
        raw_nbin: usize,
    ) -> Result<Self, GridError> {
        let nbin = raw_nbin.checked_add(1).ok_or(GridError::TooManyPoints)?;
        let width = (max.value() - min.value()) / raw_nbin as f64;
        Ok(Self {
            name,
            upper: max.value() + width,
            min,
            max,
            nbin,
            width,
            periodic: false,
        })
    }

    /// Periodic axis: the last bin wraps onto the first, no extension.
    pub(crate) fn periodic(name: String, min: Bound, max: Bound, nbin: usize) -> Self {
        let width = (max.value() - min.value()) / nbin as f64;
        Self {
            name,
            upper: max.value(),
            min,
            max,
            nbin,
            width,
            periodic: true,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower bound as given.
    #[inline]
    pub fn min(&self) -> &Bound {
        &self.min
    }

    /// Upper bound as given (before any extension).
    #[inline]
    pub fn max(&self) -> &Bound {
        &self.max
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.min.value()
    }

    /// Effective upper bound: `max + width` for non-periodic axes.
    #[inline]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Number of grid points along this axis.
    #[inline]
    pub fn nbin(&self) -> usize {
        self.nbin
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.periodic
    }

    /// Coordinate of grid point `i` (bin origin, not bin centre).
    #[inline]
    pub fn coordinate(&self, i: usize) -> f64 {
        self.min.value() + self.width * i as f64
    }

    /// Index of the bin whose origin is at or below `x`. Not range checked.
    #[inline]
    pub fn bin_of(&self, x: f64) -> isize {
        ((x - self.min.value()) / self.width).floor() as isize
    }
}
