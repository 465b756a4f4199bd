//! GridError: Unified error type for grid-vessel public APIs
//!
//! Configuration faults (bad keywords, mismatched field lists, bad bounds) are
//! reported through this type before any grid becomes usable. Index misuse in
//! the element accessors is a programming error and is asserted instead.

use thiserror::Error;

use crate::vessel::VesselKind;

/// Unified error type for grid setup, storage sizing and output.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridError {
    /// A grid was requested from a factory for a vessel kind that is not a grid.
    #[error("grid vessels must be constructed from a grid kind, got {0:?}")]
    NotAGridVessel(VesselKind),
    /// A compulsory keyword was not supplied.
    #[error("compulsory keyword {0} is missing")]
    MissingKeyword(&'static str),
    /// A keyword was given more than once.
    #[error("keyword {0} given more than once")]
    DuplicateKeyword(String),
    /// A keyword that the grid does not understand.
    #[error("unknown keyword {0}")]
    UnknownKeyword(String),
    /// A token that is not of the form `KEY=value`.
    #[error("malformed keyword token `{0}` (expected KEY=value)")]
    MalformedKeyword(String),
    /// A per-axis keyword has the wrong number of entries.
    #[error("keyword {keyword} has {found} values but the grid has {expected} axes")]
    KeywordLength {
        keyword: &'static str,
        expected: usize,
        found: usize,
    },
    /// A bound or bin count could not be converted to a number.
    #[error("cannot convert `{text}` to a number")]
    InvalidNumber { text: String },
    /// A raw bin count of zero was supplied for an axis.
    #[error("number of bins for axis {axis} must be positive")]
    ZeroBins { axis: usize },
    /// The point count or buffer length does not fit in `usize`.
    #[error("grid has too many points to address")]
    TooManyPoints,
    /// `MIN` was empty, so the grid would have no axes.
    #[error("grid must have at least one axis")]
    EmptyGrid,
    /// Named-field setup got a name list of the wrong length.
    #[error("number of field names does not match number of elements per node: expected {expected}, found {found}")]
    FieldNameCount { expected: usize, found: usize },
    /// Argument-derived setup got the wrong number of bound variables.
    #[error("number of arguments does not match size of min and max arrays: expected {expected}, found {found}")]
    ArgumentCount { expected: usize, found: usize },
    /// A periodic variable did not report its domain.
    #[error("periodic variable {0} has no domain")]
    MissingPeriodicDomain(String),
    /// `resize` was called on a grid with no elements per point.
    #[error("number of datapoints at each grid point has not been set")]
    ElementsPerPointUnset,
    /// A numeric format string the table writer cannot use.
    #[error("invalid numeric format `{0}`")]
    InvalidFormat(String),
    /// Internal consistency check failed.
    #[error("grid invariant violated: {0}")]
    InvariantViolation(String),
    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for GridError {
    fn from(e: std::io::Error) -> Self {
        GridError::Io(e.to_string())
    }
}
