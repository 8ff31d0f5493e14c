//! A small library to keep a list of closed floating point ranges normalized
//!
//! A [`RangeList`](RangeList) holds ranges sorted by their start, where no two ranges overlap or
//! even touch. Adding a range merges it with every range it touches, removing a range shrinks or
//! splits every range it overlaps.
//!
//! Bounds are compared with a tolerance (see [`compare`](compare)), so bounds that are the result
//! of earlier merging and splitting line up with the ranges they came from.
//!
//! The list is a flat sorted vector, finding the affected ranges is a binary search, rewriting
//! them is linear in the size of the list.

use log::{debug, trace};

use crate::internal::SpanRewrite;

mod conversions;
mod error;
mod internal;
mod macros;
mod range;
mod tolerance;

pub use crate::error::RangeError;
pub use crate::r as range;
pub use crate::range::Range;
pub use crate::tolerance::{compare, RangeOrdering, Tolerance};

/// The list type used for storing ranges in a list
///
/// Disable the `smallvec` feature to use the std [Vec](Vec)
#[cfg(feature = "smallvec")]
pub type RangeVec<T> = smallvec::SmallVec<[T; 5]>;

/// The list type used for storing ranges in a list
///
/// Enable the `smallvec` feature to use the smallvec's [`SmallVec`](smallvec::SmallVec)
#[cfg(not(feature = "smallvec"))]
pub type RangeVec<T> = Vec<T>;

/// Owning iterator over the ranges of a [`RangeList`](RangeList)
pub type IntoIter<T> = <RangeVec<Range<T>> as IntoIterator>::IntoIter;

/// A sorted list of non-overlapping, non-touching ranges
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<Range<T>>",
        into = "Vec<Range<T>>",
        bound(serialize = "T: serde::Serialize", deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct RangeList<T: Tolerance = f32> {
    pub(crate) items: RangeVec<Range<T>>,
}

impl<T: Tolerance> Default for RangeList<T> {
    fn default() -> Self {
        Self::with_capacity(5)
    }
}

impl<T: Tolerance> RangeList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new list with given capacity
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        RangeList {
            items: RangeVec::with_capacity(capacity),
        }
    }

    /// Create a list from ranges that don't intersect each other, in any order
    ///
    /// Fails with [`RangeError::OverlappingInput`] if any two ranges overlap or touch. Use
    /// [`FromIterator`](FromIterator) to merge them instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::{r, RangeError, RangeList};
    ///
    /// let list = RangeList::<f32>::try_from_iter([r!(0.4..=0.5), r!(0.01..=0.1)]).unwrap();
    /// assert_eq!(Some(&r!(0.01..=0.1)), list.first());
    ///
    /// let err = RangeList::<f32>::try_from_iter([r!(0.4..=0.5), r!(0.45..=0.7)]).unwrap_err();
    /// assert!(matches!(err, RangeError::OverlappingInput { .. }));
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Result<Self, RangeError> {
        let mut items: RangeVec<Range<T>> = iter.into_iter().collect();
        items.sort_by(|a, b| RangeOrdering::Start.compare(a, b));

        if let Some(pair) = items.windows(2).find(|pair| pair[0].intersects(&pair[1])) {
            debug!("rejecting range list, {} intersects {}", pair[0], pair[1]);

            return Err(RangeError::OverlappingInput {
                left: pair[0].widen(),
                right: pair[1].widen(),
            });
        }

        Ok(RangeList { items })
    }

    /// The amount of ranges in this list
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// If this is an empty list
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator with all ranges in this list, in ascending order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Range<T>] {
        &self.items
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Range<T>> {
        self.items.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Range<T>> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Range<T>> {
        self.items.last()
    }

    /// Remove all ranges
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Binary search for a range with the same start as `range`
    fn search(&self, range: &Range<T>) -> Result<usize, usize> {
        self.items
            .binary_search_by(|item| RangeOrdering::Start.compare(item, range))
    }

    /// Index of the first range that could intersect `range`
    ///
    /// A range starting before `range` may still reach into it, so the left neighbour of the
    /// search position gets checked as well.
    fn first_affected(&self, range: &Range<T>) -> usize {
        let (Ok(index) | Err(index)) = self.search(range);

        match index.checked_sub(1).map(|left| &self.items[left]) {
            Some(left) if left.intersects(range) => index - 1,
            _ => index,
        }
    }

    /// Check if this list holds a range (tolerantly) equal to `range`
    pub fn contains(&self, range: &Range<T>) -> bool {
        self.search(range)
            .is_ok_and(|index| self.items[index] == *range)
    }

    /// Check if `point` falls within any of the ranges in this list
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::{r, range_list};
    ///
    /// let list = range_list![f32: r!(0.1..=0.2), r!(0.4..=0.5)].unwrap();
    ///
    /// assert!(list.contains_point(0.2));
    /// assert!(list.contains_point(0.45));
    /// assert!(!list.contains_point(0.3));
    /// ```
    pub fn contains_point(&self, point: T) -> bool {
        let after = self
            .items
            .partition_point(|item| compare(item.start(), point) != std::cmp::Ordering::Greater);

        after
            .checked_sub(1)
            .is_some_and(|index| self.items[index].contains(point))
    }

    /// Add a range to this list, merging it with every range it intersects or touches
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::{r, range_list};
    ///
    /// let mut list = range_list![f32: r!(0.2..=0.3), r!(0.4..=0.5), r!(0.6..=0.7)].unwrap();
    /// list.add(r!(0.25..=0.4));
    ///
    /// assert_eq!(range_list![r!(0.2..=0.5), r!(0.6..=0.7)].unwrap(), list);
    /// ```
    pub fn add(&mut self, range: Range<T>) {
        let mut rewrite = SpanRewrite::new(self.first_affected(&range));
        let mut merged = range;

        while let Some(item) = self.items.get(rewrite.end()) {
            if !item.intersects(&merged) {
                break;
            }

            merged = merged.hull(item);
            rewrite.consume();
        }

        rewrite.push(merged);
        trace!(
            "adding {}, replacing ranges {:?} with {}",
            range,
            rewrite.span(),
            merged
        );

        rewrite.apply(&mut self.items);
    }

    /// Remove a range from this list, shrinking or splitting every range it overlaps
    ///
    /// Returns `true` if the list changed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use eater_rangelist::{r, range_list};
    ///
    /// let mut list = range_list![f32: r!(0.2..=0.3), r!(0.4..=0.5)].unwrap();
    ///
    /// assert!(list.remove(r!(0.42..=0.46)));
    /// assert_eq!(range_list![r!(0.2..=0.3), r!(0.4..=0.42), r!(0.46..=0.5)].unwrap(), list);
    ///
    /// assert!(!list.remove(r!(-0.5..=-0.4)));
    /// ```
    pub fn remove(&mut self, range: Range<T>) -> bool {
        let mut rewrite = SpanRewrite::new(self.first_affected(&range));

        while let Some(item) = self.items.get(rewrite.end()) {
            if !item.intersects(&range) {
                break;
            }

            rewrite.extend(item.except(&range));
            rewrite.consume();
        }

        if rewrite.is_noop(&self.items) {
            return false;
        }

        trace!(
            "removing {}, replacing ranges {:?} with {:?}",
            range,
            rewrite.span(),
            rewrite.replacement()
        );

        rewrite.apply(&mut self.items);
        true
    }
}
