//! Space-delimited tabular text output.
//!
//! [`TableWriter`] collects named fields for one row at a time and writes
//! them separated by single spaces. Numeric fields are rendered with a
//! printf-style [`FieldFormat`] such as `%f`, `%14.9f` or `%-12.4e`.

use std::io::Write;

use crate::grid_error::GridError;

/// Conversion character of a [`FieldFormat`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// `%f`: fixed point.
    Fixed,
    /// `%e` / `%E`: scientific, two-digit minimum exponent.
    Exponent { upper: bool },
    /// `%g` / `%G`: shortest of fixed and scientific, trailing zeros dropped.
    General { upper: bool },
    /// `%d` / `%i`: value rounded to an integer.
    Integer,
}

/// A printf-style numeric format: `%[-+ 0#][width][.precision]conv`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldFormat {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
    alternate: bool,
    width: usize,
    precision: Option<usize>,
    conversion: Conversion,
}

impl Default for FieldFormat {
    /// `%f`
    fn default() -> Self {
        Self {
            left: false,
            plus: false,
            space: false,
            zero: false,
            alternate: false,
            width: 0,
            precision: None,
            conversion: Conversion::Fixed,
        }
    }
}

impl FieldFormat {
    /// Parse a single printf conversion. Surrounding whitespace is ignored.
    ///
    /// ```rust
    /// use grid_vessel::io::table::FieldFormat;
    /// let fmt = FieldFormat::parse("%8.3f").unwrap();
    /// assert_eq!(fmt.render(3.14159), "   3.142");
    /// assert!(FieldFormat::parse("%s").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidFormat(spec.to_string());
        let body = spec.trim().strip_prefix('%').ok_or_else(invalid)?;
        let mut fmt = Self::default();

        let mut chars = body.chars().peekable();
        while let Some(&c) = chars.peek() {
            match c {
                '-' => fmt.left = true,
                '+' => fmt.plus = true,
                ' ' => fmt.space = true,
                '0' => fmt.zero = true,
                '#' => fmt.alternate = true,
                _ => break,
            }
            chars.next();
        }
        fmt.width = take_number(&mut chars).unwrap_or(0);
        if chars.peek() == Some(&'.') {
            chars.next();
            fmt.precision = Some(take_number(&mut chars).unwrap_or(0));
        }
        // Length modifiers carry no meaning for f64 output.
        while matches!(chars.peek(), Some('l' | 'L' | 'h')) {
            chars.next();
        }
        fmt.conversion = match chars.next() {
            Some('f' | 'F') => Conversion::Fixed,
            Some('e') => Conversion::Exponent { upper: false },
            Some('E') => Conversion::Exponent { upper: true },
            Some('g') => Conversion::General { upper: false },
            Some('G') => Conversion::General { upper: true },
            Some('d' | 'i') => Conversion::Integer,
            _ => return Err(invalid()),
        };
        if chars.next().is_some() {
            return Err(invalid());
        }
        Ok(fmt)
    }

    #[inline]
    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    /// Render `value`, padded to the field width.
    pub fn render(&self, value: f64) -> String {
        let body = if value.is_nan() {
            "nan".to_string()
        } else if value.is_infinite() {
            "inf".to_string()
        } else {
            let magnitude = value.abs();
            match self.conversion {
                Conversion::Fixed => format!("{:.*}", self.precision.unwrap_or(6), magnitude),
                Conversion::Exponent { upper } => {
                    exponent(magnitude, self.precision.unwrap_or(6), upper)
                }
                Conversion::General { upper } => self.general(magnitude, upper),
                Conversion::Integer => format!("{}", magnitude.round() as u64),
            }
        };
        let negative = value.is_sign_negative() && !value.is_nan();
        let sign = if negative {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        self.pad(sign, &body, value.is_finite())
    }

    fn general(&self, magnitude: f64, upper: bool) -> String {
        let p = match self.precision {
            Some(0) => 1,
            Some(p) => p,
            None => 6,
        };
        let x = if magnitude == 0.0 {
            0
        } else {
            exponent_of(&format!("{:.*e}", p - 1, magnitude))
        };
        let mut s = if x < -4 || x >= p as i32 {
            exponent(magnitude, p - 1, upper)
        } else {
            format!("{:.*}", (p as i32 - 1 - x) as usize, magnitude)
        };
        if !self.alternate {
            s = strip_trailing_zeros(&s);
        }
        s
    }

    fn pad(&self, sign: &str, body: &str, finite: bool) -> String {
        let len = sign.len() + body.len();
        if len >= self.width {
            return format!("{sign}{body}");
        }
        let fill = self.width - len;
        if self.left {
            format!("{sign}{body}{}", " ".repeat(fill))
        } else if self.zero && finite {
            format!("{sign}{}{body}", "0".repeat(fill))
        } else {
            format!("{}{sign}{body}", " ".repeat(fill))
        }
    }
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

/// C-style `%e` for a non-negative finite value: `1.500000e+00`.
fn exponent(magnitude: f64, precision: usize, upper: bool) -> String {
    let rust = format!("{:.*e}", precision, magnitude);
    let (mantissa, _) = rust.split_once('e').unwrap_or((rust.as_str(), "0"));
    let exp = exponent_of(&rust);
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}{e}{sign}{:02}", exp.abs())
}

fn exponent_of(rust_sci: &str) -> i32 {
    rust_sci
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0)
}

fn strip_trailing_zeros(s: &str) -> String {
    let (mantissa, exp) = match s.find(['e', 'E']) {
        Some(i) => s.split_at(i),
        None => (s, ""),
    };
    let mantissa = if mantissa.contains('.') {
        mantissa.trim_end_matches('0').trim_end_matches('.')
    } else {
        mantissa
    };
    format!("{mantissa}{exp}")
}

/// Row-oriented writer for space-delimited tables.
///
/// Constant fields are declared once with
/// [`add_constant_field`](Self::add_constant_field) and printed like any
/// other field on every row. The column names of the first row are recorded;
/// later rows are expected to print the same names in the same order.
#[derive(Debug)]
pub struct TableWriter<W: Write> {
    out: W,
    constants: Vec<String>,
    columns: Vec<String>,
    row_names: Vec<String>,
    row: Vec<String>,
    rows: usize,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            constants: Vec::new(),
            columns: Vec::new(),
            row_names: Vec::new(),
            row: Vec::new(),
            rows: 0,
        }
    }

    /// Declare a field whose value does not change between rows.
    pub fn add_constant_field(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.constants.contains(&name) {
            self.constants.push(name);
        }
    }

    pub fn is_constant(&self, name: &str) -> bool {
        self.constants.iter().any(|c| c == name)
    }

    /// Column names, as printed on the first row.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn print_str(&mut self, name: &str, value: &str) {
        self.push(name, value.to_string());
    }

    pub fn print_int(&mut self, name: &str, value: i64) {
        self.push(name, value.to_string());
    }

    pub fn print_f64(&mut self, name: &str, value: f64, fmt: &FieldFormat) {
        self.push(name, fmt.render(value));
    }

    fn push(&mut self, name: &str, value: String) {
        self.row_names.push(name.to_string());
        self.row.push(value);
    }

    /// Write the pending fields as one line.
    pub fn end_row(&mut self) -> Result<(), GridError> {
        if self.rows == 0 {
            self.columns = std::mem::take(&mut self.row_names);
        } else {
            debug_assert_eq!(self.row_names, self.columns, "row fields differ from first row");
            self.row_names.clear();
        }
        writeln!(self.out, "{}", self.row.join(" "))?;
        self.row.clear();
        self.rows += 1;
        Ok(())
    }

    /// Write an empty separator line.
    pub fn blank_line(&mut self) -> Result<(), GridError> {
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), GridError> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
