use std::cmp::Ordering;
use std::cmp::Ordering::{Equal, Greater, Less};
use std::fmt;

use crate::error::RangeError;
use crate::tolerance::{compare, Tolerance};

/// A closed range `[start, end]` over a floating point domain
///
/// Equality and ordering are tolerant, see [`compare`](crate::compare). Ordering is by `start`
/// first, then by `end`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "crate::conversions::RawRange<T>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Range<T: Tolerance = f32> {
    start: T,
    end: T,
}

impl<T: Tolerance> Range<T> {
    /// Create a new range, `start` may not be greater than `end`
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::{Range, RangeError};
    ///
    /// assert!(Range::new(0.1f32, 0.2).is_ok());
    /// assert!(Range::new(0.3f32, 0.3).is_ok());
    /// assert!(matches!(Range::new(0.2f32, 0.1), Err(RangeError::InvalidRange { .. })));
    /// ```
    pub fn new(start: T, end: T) -> Result<Range<T>, RangeError> {
        if start.is_nan() || end.is_nan() {
            return Err(RangeError::NotANumber);
        }

        if compare(start, end) == Greater {
            return Err(RangeError::InvalidRange {
                start: start.to_f64(),
                end: end.to_f64(),
            });
        }

        Ok(Range::raw(start, end))
    }

    /// Bounds must already be ordered
    #[inline]
    pub(crate) const fn raw(start: T, end: T) -> Range<T> {
        Range { start, end }
    }

    /// A range only when it has a width
    #[inline]
    fn with_width(start: T, end: T) -> Option<Range<T>> {
        (compare(start, end) == Less).then(|| Range::raw(start, end))
    }

    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `start` and `end` are (tolerantly) the same point
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        compare(self.start, self.end) == Equal
    }

    /// Returns `true` if `point` lies within this range, bounds included
    #[inline]
    pub fn contains(&self, point: T) -> bool {
        compare(point, self.start) != Less && compare(point, self.end) != Greater
    }

    /// Returns `true` if `other` lies completely within this range
    #[inline]
    pub fn covers(&self, other: &Range<T>) -> bool {
        compare(self.start, other.start) != Greater && compare(self.end, other.end) != Less
    }

    /// Returns `true` if both ranges share at least one point, touching bounds included
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::Range;
    ///
    /// let a = Range::new(0.1f32, 0.2).unwrap();
    ///
    /// assert!(a.intersects(&Range::new(0.2, 0.3).unwrap()));
    /// assert!(!a.intersects(&Range::new(0.25, 0.3).unwrap()));
    /// ```
    pub fn intersects(&self, other: &Range<T>) -> bool {
        self.contains(other.start)
            || self.contains(other.end)
            || other.contains(self.start)
            || other.contains(self.end)
    }

    /// Merge two intersecting (or touching) ranges into the range spanning both
    ///
    /// Fails with [`RangeError::CannotMerge`] if there is a gap between the ranges, in either
    /// order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::Range;
    ///
    /// let a = Range::new(0.1f32, 0.3).unwrap();
    /// let b = Range::new(0.2f32, 0.5).unwrap();
    ///
    /// assert_eq!(Range::new(0.1, 0.5).unwrap(), a.merge(&b).unwrap());
    /// assert!(a.merge(&Range::new(0.4, 0.5).unwrap()).is_err());
    /// ```
    pub fn merge(&self, other: &Range<T>) -> Result<Range<T>, RangeError> {
        if !self.intersects(other) {
            return Err(RangeError::CannotMerge {
                left: self.widen(),
                right: other.widen(),
            });
        }

        Ok(self.hull(other))
    }

    /// The smallest range spanning both ranges, gaps included
    pub(crate) fn hull(&self, other: &Range<T>) -> Range<T> {
        let start = if compare(self.start, other.start) != Greater { self.start } else { other.start };
        let end = if compare(self.end, other.end) != Less { self.end } else { other.end };

        Range::raw(start, end)
    }

    /// The parts of this range not covered by `other`, left to right
    ///
    /// Yields nothing when `other` covers this range, this range itself when they don't
    /// intersect, and otherwise one or two remainders. Remainders keep the bound they share with
    /// `other`; remainders without width are left out, and removing a single point from the
    /// inside of a range leaves the range as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::Range;
    ///
    /// let a = Range::new(0.4f32, 0.5).unwrap();
    /// let pieces: Vec<_> = a.except(&Range::new(0.42, 0.46).unwrap()).collect();
    ///
    /// assert_eq!(vec![Range::new(0.4, 0.42).unwrap(), Range::new(0.46, 0.5).unwrap()], pieces);
    /// ```
    pub fn except(&self, other: &Range<T>) -> impl Iterator<Item = Range<T>> {
        let pieces = if !self.intersects(other) {
            [Some(*self), None]
        } else if other.covers(self) {
            [None, None]
        } else if self.covers(other) {
            if other.is_degenerate() {
                [Some(*self), None]
            } else {
                [
                    Range::with_width(self.start, other.start),
                    Range::with_width(other.end, self.end),
                ]
            }
        } else if compare(self.start, other.start) != Greater {
            [Some(Range::raw(self.start, other.start)), None]
        } else {
            [Some(Range::raw(other.end, self.end)), None]
        };

        pieces.into_iter().flatten()
    }

    pub(crate) fn widen(&self) -> Range<f64> {
        Range::raw(self.start.to_f64(), self.end.to_f64())
    }
}

impl<T: Tolerance> PartialEq for Range<T> {
    fn eq(&self, other: &Self) -> bool {
        compare(self.start, other.start) == Equal && compare(self.end, other.end) == Equal
    }
}

impl<T: Tolerance> PartialOrd for Range<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self.start, other.start).then_with(|| compare(self.end, other.end)))
    }
}

impl<T: Tolerance> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
