//! Closed integer intervals used as offer criteria.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// A closed range `[from, to]` over one trip dimension.
///
/// `from <= to` is not enforced. An inverted interval is valid and simply
/// never includes anything.
///
/// # Examples
///
/// ```
/// use ridematch_core::Interval;
///
/// let price: Interval = "100-500".parse().unwrap();
/// assert!(price.includes(100));
/// assert!(price.includes(500));
/// assert!(!price.includes(501));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    from: i32,
    to: i32,
}

impl Interval {
    /// Creates an interval from its two bounds.
    #[inline]
    pub const fn new(from: i32, to: i32) -> Self {
        Interval { from, to }
    }

    /// Creates an interval containing exactly `value`.
    #[inline]
    pub const fn point(value: i32) -> Self {
        Interval::new(value, value)
    }

    /// Returns the inclusive lower bound.
    #[inline]
    pub const fn lower(&self) -> i32 {
        self.from
    }

    /// Returns the inclusive upper bound.
    #[inline]
    pub const fn upper(&self) -> i32 {
        self.to
    }

    /// Returns true if `from <= x <= to`.
    #[inline]
    pub const fn includes(&self, x: i32) -> bool {
        self.from <= x && x <= self.to
    }

    /// Returns true if no value is included (`from > to`).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.from > self.to
    }
}

impl FromStr for Interval {
    type Err = ParseError;

    /// Parses `"from-to"`. Each bound is trimmed; negative bounds cannot be
    /// written because `-` is the separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedInterval(s.trim().to_string());

        let mut parts = s.split('-');
        let (Some(from), Some(to), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };

        let from = from.trim().parse::<i32>().map_err(|_| malformed())?;
        let to = to.trim().parse::<i32>().map_err(|_| malformed())?;
        Ok(Interval::new(from, to))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
