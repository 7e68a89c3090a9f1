//! `Interval`: one coordinate of an elementary cube.
//!
//! An elementary interval is either degenerate (`[a,a]`, a single point) or of
//! unit length (`[a,a+1]`). Restricting to elementary intervals makes the
//! sub-interval face relation and the endpoint-collapse description of primary
//! faces agree, which the incidence index relies on.

use crate::collapse_error::CollapseError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Elementary closed integer interval `[lo, hi]` with `hi - lo ∈ {0, 1}`.
///
/// Ordered lexicographically by `(lo, hi)`. Serializes as a `(lo, hi)` pair and
/// is re-validated when deserialized.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "(i64, i64)", into = "(i64, i64)")]
pub struct Interval {
    lo: i64,
    hi: i64,
}

impl Interval {
    /// Creates `[lo, hi]`.
    ///
    /// # Errors
    /// [`CollapseError::NonElementaryInterval`] unless `hi == lo` or `hi == lo + 1`.
    ///
    /// ```rust
    /// # use cube_collapse::cubical::interval::Interval;
    /// assert!(Interval::new(0, 1).is_ok());
    /// assert!(Interval::new(0, 2).is_err());
    /// assert!(Interval::new(1, 0).is_err());
    /// ```
    #[inline]
    pub fn new(lo: i64, hi: i64) -> Result<Self, CollapseError> {
        match hi.checked_sub(lo) {
            Some(0) | Some(1) => Ok(Interval { lo, hi }),
            _ => Err(CollapseError::NonElementaryInterval { lo, hi }),
        }
    }

    /// The degenerate interval `[x, x]`.
    #[inline]
    pub const fn degenerate(x: i64) -> Self {
        Interval { lo: x, hi: x }
    }

    /// The unit interval `[lo, lo + 1]`.
    ///
    /// # Errors
    /// [`CollapseError::NonElementaryInterval`] if `lo + 1` overflows.
    #[inline]
    pub fn unit(lo: i64) -> Result<Self, CollapseError> {
        match lo.checked_add(1) {
            Some(hi) => Ok(Interval { lo, hi }),
            None => Err(CollapseError::NonElementaryInterval { lo, hi: lo }),
        }
    }

    #[inline]
    pub const fn lo(self) -> i64 {
        self.lo
    }

    #[inline]
    pub const fn hi(self) -> i64 {
        self.hi
    }

    /// `true` iff `lo == hi`.
    #[inline]
    pub const fn is_degenerate(self) -> bool {
        self.lo == self.hi
    }

    /// `true` iff `other` is a sub-interval of `self` (equality allowed).
    #[inline]
    pub const fn contains(self, other: Interval) -> bool {
        other.lo >= self.lo && other.hi <= self.hi
    }

    /// `true` iff the two closed intervals share at least one point.
    #[inline]
    pub fn intersects(self, other: Interval) -> bool {
        self.lo.max(other.lo) <= self.hi.min(other.hi)
    }

    /// The two degenerate endpoint intervals `[lo,lo]` and `[hi,hi]`.
    #[inline]
    pub const fn endpoints(self) -> [Interval; 2] {
        [Interval::degenerate(self.lo), Interval::degenerate(self.hi)]
    }
}

impl TryFrom<(i64, i64)> for Interval {
    type Error = CollapseError;

    fn try_from((lo, hi): (i64, i64)) -> Result<Self, Self::Error> {
        Interval::new(lo, hi)
    }
}

impl From<Interval> for (i64, i64) {
    fn from(iv: Interval) -> Self {
        (iv.lo, iv.hi)
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lo, self.hi)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elementary_only() {
        assert!(Interval::new(3, 3).unwrap().is_degenerate());
        assert!(!Interval::new(3, 4).unwrap().is_degenerate());
        assert_eq!(
            Interval::new(0, 2),
            Err(CollapseError::NonElementaryInterval { lo: 0, hi: 2 })
        );
        assert!(Interval::new(5, 4).is_err());
        assert!(Interval::new(i64::MIN, i64::MAX).is_err());
    }

    #[test]
    fn unit_overflow_is_an_error() {
        assert!(Interval::unit(i64::MAX).is_err());
        assert_eq!(Interval::unit(-1).unwrap(), Interval::new(-1, 0).unwrap());
    }

    #[test]
    fn containment_and_intersection() {
        let u = Interval::unit(0).unwrap();
        assert!(u.contains(Interval::degenerate(0)));
        assert!(u.contains(Interval::degenerate(1)));
        assert!(u.contains(u));
        assert!(!Interval::degenerate(0).contains(u));
        assert!(u.intersects(Interval::unit(1).unwrap()));
        assert!(!u.intersects(Interval::unit(2).unwrap()));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Interval::degenerate(0);
        let b = Interval::unit(0).unwrap();
        let c = Interval::degenerate(1);
        assert!(a < b && b < c);
    }

    #[test]
    fn display() {
        assert_eq!(Interval::unit(-2).unwrap().to_string(), "[-2,-1]");
        assert_eq!(format!("{:?}", Interval::degenerate(4)), "[4,4]");
    }
}
