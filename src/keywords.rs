//! Grid configuration keywords: `MIN`, `MAX` and `NBIN`.
//!
//! All three are compulsory and take one comma-separated value per axis. The
//! number of axes is the length of `MIN`. Bounds are kept as text until setup
//! because a periodic variable may replace them with its own domain.

use serde::{Deserialize, Serialize};

use crate::data::bound::parse_count;
use crate::geometry::setup::PendingGrid;
use crate::grid_error::GridError;
use crate::vessel::VesselKind;

pub const MIN: &str = "MIN";
pub const MAX: &str = "MAX";
pub const NBIN: &str = "NBIN";

/// Whether a keyword must be supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordKind {
    Compulsory,
    Optional,
}

/// Documentation record for one keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeywordDoc {
    pub name: &'static str,
    pub kind: KeywordKind,
    pub description: &'static str,
}

const REGISTERED: [KeywordDoc; 3] = [
    KeywordDoc {
        name: MIN,
        kind: KeywordKind::Compulsory,
        description: "minimum values for the grid",
    },
    KeywordDoc {
        name: MAX,
        kind: KeywordKind::Compulsory,
        description: "maximum values for the grid",
    },
    KeywordDoc {
        name: NBIN,
        kind: KeywordKind::Compulsory,
        description: "number of bins in each direction for the grid",
    },
];

/// Raw per-axis grid keywords.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridKeywords {
    pub min: Vec<String>,
    pub max: Vec<String>,
    pub nbin: Vec<usize>,
}

impl GridKeywords {
    /// Keywords understood by every grid kind.
    pub fn registered() -> &'static [KeywordDoc] {
        &REGISTERED
    }

    /// Build from explicit per-axis values and validate them.
    pub fn new<I, J, T, U>(min: I, max: J, nbin: Vec<usize>) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = T>,
        J: IntoIterator<Item = U>,
        T: Into<String>,
        U: Into<String>,
    {
        let kw = Self {
            min: min.into_iter().map(Into::into).collect(),
            max: max.into_iter().map(Into::into).collect(),
            nbin,
        };
        kw.validate()?;
        Ok(kw)
    }

    /// Parse a `KEY=v1,v2,... KEY=...` line.
    ///
    /// ```rust
    /// use grid_vessel::keywords::GridKeywords;
    /// let kw = GridKeywords::parse("MIN=-pi,0 MAX=pi,1 NBIN=36,10").unwrap();
    /// assert_eq!(kw.dimension(), 2);
    /// assert_eq!(kw.nbin, vec![36, 10]);
    /// ```
    pub fn parse(line: &str) -> Result<Self, GridError> {
        let mut min: Option<Vec<String>> = None;
        let mut max: Option<Vec<String>> = None;
        let mut nbin: Option<Vec<String>> = None;
        for token in line.split_whitespace() {
            let (key, value) = token
                .split_once('=')
                .ok_or_else(|| GridError::MalformedKeyword(token.to_string()))?;
            let values: Vec<String> = value.split(',').map(str::to_string).collect();
            let slot = match key {
                MIN => &mut min,
                MAX => &mut max,
                NBIN => &mut nbin,
                other => return Err(GridError::UnknownKeyword(other.to_string())),
            };
            if slot.replace(values).is_some() {
                return Err(GridError::DuplicateKeyword(key.to_string()));
            }
        }
        let min = min.ok_or(GridError::MissingKeyword(MIN))?;
        let max = max.ok_or(GridError::MissingKeyword(MAX))?;
        let nbin = nbin
            .ok_or(GridError::MissingKeyword(NBIN))?
            .iter()
            .map(|s| parse_count(s))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(min, max, nbin)
    }

    /// Number of axes, the length of `MIN`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.min.len()
    }

    /// Check that every keyword has one value per axis and every bin count is
    /// positive.
    pub fn validate(&self) -> Result<(), GridError> {
        let dimension = self.dimension();
        if self.min.iter().all(|s| s.trim().is_empty()) {
            return Err(GridError::EmptyGrid);
        }
        for (keyword, found) in [(MAX, self.max.len()), (NBIN, self.nbin.len())] {
            if found != dimension {
                return Err(GridError::KeywordLength {
                    keyword,
                    expected: dimension,
                    found,
                });
            }
        }
        if let Some(axis) = self.nbin.iter().position(|&n| n == 0) {
            return Err(GridError::ZeroBins { axis });
        }
        Ok(())
    }

    /// Hand the keywords to a grid kind, ready for one of the setup protocols.
    ///
    /// # Errors
    /// `NotAGridVessel` unless `kind.is_grid()`; any [`validate`](Self::validate) error.
    pub fn into_setup(self, kind: VesselKind) -> Result<PendingGrid, GridError> {
        if !kind.is_grid() {
            return Err(GridError::NotAGridVessel(kind));
        }
        self.validate()?;
        Ok(PendingGrid::new(kind, self.min, self.max, self.nbin))
    }
}
