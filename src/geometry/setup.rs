//! The two setup protocols that turn parsed keywords into a [`Grid`].
//!
//! A [`PendingGrid`] holds the raw `MIN`/`MAX`/`NBIN` values. Exactly one of
//! [`PendingGrid::finish_with_names`] or [`PendingGrid::finish_with_arguments`]
//! consumes it; a `Grid` therefore never exists in a half-configured state.

use crate::data::bound::Bound;
use crate::geometry::axis::Axis;
use crate::geometry::grid::Grid;
use crate::grid_error::GridError;
use crate::vessel::VesselKind;

/// A variable that can provide the bounds of a grid axis.
pub trait BoundVariable {
    /// Name used for the coordinate column.
    fn name(&self) -> &str;

    /// Whether the variable lives on a periodic domain.
    fn is_periodic(&self) -> bool;

    /// Textual `(min, max)` of the periodic domain; `None` when not periodic.
    fn domain(&self) -> Option<(String, String)>;
}

/// Plain [`BoundVariable`] with an optional periodic domain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    name: String,
    domain: Option<(String, String)>,
}

impl Argument {
    /// A non-periodic variable.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: None,
        }
    }

    /// A periodic variable on `[min, max)`.
    pub fn periodic(
        name: impl Into<String>,
        min: impl Into<String>,
        max: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            domain: Some((min.into(), max.into())),
        }
    }
}

impl BoundVariable for Argument {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_periodic(&self) -> bool {
        self.domain.is_some()
    }

    fn domain(&self) -> Option<(String, String)> {
        self.domain.clone()
    }
}

impl<T: BoundVariable + ?Sized> BoundVariable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_periodic(&self) -> bool {
        (**self).is_periodic()
    }

    fn domain(&self) -> Option<(String, String)> {
        (**self).domain()
    }
}

/// Keywords accepted for a grid kind, waiting for a setup protocol.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingGrid {
    kind: VesselKind,
    min: Vec<String>,
    max: Vec<String>,
    nbin: Vec<usize>,
}

impl PendingGrid {
    pub(crate) fn new(
        kind: VesselKind,
        min: Vec<String>,
        max: Vec<String>,
        nbin: Vec<usize>,
    ) -> Self {
        debug_assert!(min.len() == max.len() && min.len() == nbin.len());
        Self {
            kind,
            min,
            max,
            nbin,
        }
    }

    #[inline]
    pub fn kind(&self) -> VesselKind {
        self.kind
    }

    /// Number of axes, taken from the length of `MIN`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.min.len()
    }

    /// Setup from explicit field names; every axis is treated as non-periodic.
    ///
    /// `names` lists the axis names followed by one name per element, so it
    /// must have `dimension() + nper` entries.
    ///
    /// # Errors
    /// `FieldNameCount` on a length mismatch, `InvalidNumber` if a bound does
    /// not parse, `TooManyPoints` if the grid cannot be addressed.
    pub fn finish_with_names<N: AsRef<str>>(
        self,
        nper: usize,
        names: &[N],
    ) -> Result<Grid, GridError> {
        let dimension = self.dimension();
        if names.len() != nper + dimension {
            return Err(GridError::FieldNameCount {
                expected: nper + dimension,
                found: names.len(),
            });
        }
        let field_names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let axes = self
            .min
            .into_iter()
            .zip(self.max)
            .zip(self.nbin)
            .zip(&field_names)
            .map(|(((min, max), nbin), name)| -> Result<Axis, GridError> {
                Axis::non_periodic(name.clone(), Bound::parse(min)?, Bound::parse(max)?, nbin)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Grid::from_axes(self.kind, axes, nper, field_names)
    }

    /// Setup from the variables the grid is a function of.
    ///
    /// Periodic variables replace `MIN`/`MAX` with their own domain and get
    /// no extra bin. Field names are the variable names, then `funcname`,
    /// then `der_<name>` for each axis when `use_derivatives` is set.
    ///
    /// # Errors
    /// `ArgumentCount` if `args.len() != dimension()`,
    /// `MissingPeriodicDomain` if a periodic variable reports no domain,
    /// `InvalidNumber` if a bound does not parse,
    /// `TooManyPoints` if the grid cannot be addressed.
    pub fn finish_with_arguments<A: BoundVariable>(
        self,
        args: &[A],
        funcname: &str,
        use_derivatives: bool,
    ) -> Result<Grid, GridError> {
        let dimension = self.dimension();
        if args.len() != dimension {
            return Err(GridError::ArgumentCount {
                expected: dimension,
                found: args.len(),
            });
        }
        let nper = if use_derivatives { 1 + dimension } else { 1 };

        let mut axes = Vec::with_capacity(dimension);
        for (((arg, min), max), nbin) in args.iter().zip(self.min).zip(self.max).zip(self.nbin) {
            let name = arg.name().to_string();
            let axis = if arg.is_periodic() {
                let (dmin, dmax) = arg
                    .domain()
                    .ok_or_else(|| GridError::MissingPeriodicDomain(name.clone()))?;
                if dmin != min || dmax != max {
                    log::warn!(
                        "periodic variable {name} overrides grid bounds ({min},{max}) with its domain ({dmin},{dmax})"
                    );
                }
                Axis::periodic(name, Bound::parse(dmin)?, Bound::parse(dmax)?, nbin)
            } else {
                Axis::non_periodic(name, Bound::parse(min)?, Bound::parse(max)?, nbin)?
            };
            axes.push(axis);
        }

        let mut field_names: Vec<String> = args.iter().map(|a| a.name().to_string()).collect();
        field_names.push(funcname.to_string());
        if use_derivatives {
            field_names.extend(args.iter().map(|a| format!("der_{}", a.name())));
        }
        Grid::from_axes(self.kind, axes, nper, field_names)
    }
}
