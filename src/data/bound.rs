//! Axis bounds carried as parsed value plus the text the user wrote.
//!
//! Geometry uses [`Bound::value`]; descriptions and file dumps echo
//! [`Bound::text`] so that `-pi` stays `-pi` rather than `-3.141592653589793`.

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid_error::GridError;

/// A parsed bound together with its original textual form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    value: f64,
    text: String,
}

impl Bound {
    /// Parse `text` with [`parse_number`], keeping the text verbatim.
    pub fn parse(text: impl Into<String>) -> Result<Self, GridError> {
        let text = text.into();
        let value = parse_number(&text)?;
        Ok(Self { value, text })
    }

    /// Parsed numeric value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text as originally written.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Convert a bound string to `f64`.
///
/// Accepts ordinary floating-point literals and multiples of pi written as
/// `pi`, `-PI`, `2pi` or `0.5*pi`. Non-finite results are rejected.
pub fn parse_number(text: &str) -> Result<f64, GridError> {
    let invalid = || GridError::InvalidNumber {
        text: text.to_string(),
    };
    let t = text.trim().to_ascii_lowercase();
    if t.is_empty() {
        return Err(invalid());
    }
    let value = match t.strip_suffix("pi") {
        Some(coeff) => {
            let coeff = coeff.strip_suffix('*').unwrap_or(coeff);
            let factor = match coeff {
                "" | "+" => 1.0,
                "-" => -1.0,
                c => c.parse::<f64>().map_err(|_| invalid())?,
            };
            factor * PI
        }
        None => t.parse::<f64>().map_err(|_| invalid())?,
    };
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

/// Convert a bin-count string to `usize`.
pub fn parse_count(text: &str) -> Result<usize, GridError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| GridError::InvalidNumber {
            text: text.to_string(),
        })
}
