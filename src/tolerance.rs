//! Tolerant comparison of floating point bounds
//!
//! Every ordering and equality check in this crate goes through [`compare`], so bounds produced
//! by repeated merging and splitting never end up as phantom gaps or phantom overlaps.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::ops::Sub;

use crate::Range;

/// A floating point type that can be used as the bound of a [`Range`](Range)
pub trait Tolerance: Copy + PartialOrd + Sub<Output = Self> + Debug + Display {
    /// Two values closer to each other than this are considered equal
    ///
    /// This is the smallest positive value representable by the type.
    const EPSILON: Self;

    /// Returns the absolute value
    fn abs(self) -> Self;

    /// Returns `true` if this value is NaN
    fn is_nan(self) -> bool;

    /// Widen into an `f64`, used to report bounds in errors
    fn to_f64(self) -> f64;
}

impl Tolerance for f32 {
    // Smallest subnormal, `f32::from_bits(1)`
    const EPSILON: f32 = 1.0e-45;

    #[inline]
    fn abs(self) -> f32 {
        f32::abs(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Tolerance for f64 {
    // Smallest subnormal, `f64::from_bits(1)`
    const EPSILON: f64 = 5.0e-324;

    #[inline]
    fn abs(self) -> f64 {
        f64::abs(self)
    }

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
}

/// Compare two values, treating them as equal when they are less than [`Tolerance::EPSILON`]
/// apart
///
/// Unordered values (NaN) compare as [`Ordering::Less`].
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use eater_rangelist::compare;
///
/// assert_eq!(Ordering::Equal, compare(0.5f32, 0.5));
/// assert_eq!(Ordering::Less, compare(0.25f32, 0.5));
/// assert_eq!(Ordering::Greater, compare(f64::INFINITY, 1e300));
/// ```
#[inline]
pub fn compare<T: Tolerance>(x: T, y: T) -> Ordering {
    match x.partial_cmp(&y) {
        // Covers equal infinities, whose difference is NaN
        Some(Ordering::Equal) => Ordering::Equal,
        Some(_) if (x - y).abs() < T::EPSILON => Ordering::Equal,
        Some(ordering) => ordering,
        None => Ordering::Less,
    }
}

/// Selects which bound of a [`Range`](Range) two ranges are ordered by
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RangeOrdering {
    /// Order by the starting bound
    Start,
    /// Order by the ending bound
    End,
}

impl RangeOrdering {
    /// The selected bound of `range`
    #[inline]
    pub fn key<T: Tolerance>(self, range: &Range<T>) -> T {
        match self {
            RangeOrdering::Start => range.start(),
            RangeOrdering::End => range.end(),
        }
    }

    /// Tolerant comparison of the selected bound of both ranges
    #[inline]
    pub fn compare<T: Tolerance>(self, left: &Range<T>, right: &Range<T>) -> Ordering {
        compare(self.key(left), self.key(right))
    }
}
