use std::ops;

use crate::{Range, RangeVec, Tolerance};

/// A pending rewrite of a contiguous span of a list
///
/// The span starts at a fixed index and grows one item at a time while scanning; the items
/// replacing it are collected alongside. Nothing is touched until [`apply`](SpanRewrite::apply).
#[derive(Debug)]
pub struct SpanRewrite<T: Tolerance> {
    start: usize,
    end: usize,
    replacement: RangeVec<Range<T>>,
}

impl<T: Tolerance> SpanRewrite<T> {
    #[inline]
    pub fn new(start: usize) -> Self {
        SpanRewrite {
            start,
            end: start,
            replacement: RangeVec::new(),
        }
    }

    /// Index of the first item past the span
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn span(&self) -> ops::Range<usize> {
        self.start..self.end
    }

    /// Grow the span by one item
    #[inline]
    pub fn consume(&mut self) {
        self.end += 1;
    }

    #[inline]
    pub fn push(&mut self, range: Range<T>) {
        self.replacement.push(range);
    }

    #[inline]
    pub fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, ranges: I) {
        self.replacement.extend(ranges);
    }

    /// Returns `true` if applying this rewrite would leave `items` unchanged
    pub fn is_noop(&self, items: &[Range<T>]) -> bool {
        items[self.span()] == self.replacement[..]
    }

    pub fn replacement(&self) -> &[Range<T>] {
        &self.replacement
    }

    /// Replace the span in `items` with the collected replacement
    #[cfg(feature = "smallvec")]
    pub fn apply(self, items: &mut RangeVec<Range<T>>) {
        items.drain(self.span());
        items.insert_many(self.start, self.replacement);
    }

    /// Replace the span in `items` with the collected replacement
    #[cfg(not(feature = "smallvec"))]
    pub fn apply(self, items: &mut RangeVec<Range<T>>) {
        items.splice(self.span(), self.replacement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: f32, end: f32) -> Range {
        Range::new(start, end).unwrap()
    }

    fn items() -> RangeVec<Range> {
        let mut items = RangeVec::new();
        items.extend([range(0.1, 0.2), range(0.3, 0.4), range(0.5, 0.6), range(0.7, 0.8)]);
        items
    }

    #[test]
    fn replace_middle() {
        let mut list = items();
        let mut rewrite = SpanRewrite::new(1);
        rewrite.consume();
        rewrite.consume();
        rewrite.push(range(0.3, 0.6));

        assert_eq!(1..3, rewrite.span());
        assert_eq!(3, rewrite.end());
        assert!(!rewrite.is_noop(&list));

        rewrite.apply(&mut list);
        assert_eq!(&[range(0.1, 0.2), range(0.3, 0.6), range(0.7, 0.8)][..], &list[..]);
    }

    #[test]
    fn insert_without_span() {
        let mut list = items();
        let mut rewrite = SpanRewrite::new(4);
        rewrite.push(range(0.9, 1.0));
        rewrite.apply(&mut list);

        assert_eq!(5, list.len());
        assert_eq!(range(0.9, 1.0), list[4]);
    }

    #[test]
    fn split_into_more() {
        let mut list = items();
        let mut rewrite = SpanRewrite::new(0);
        rewrite.consume();
        rewrite.extend([range(0.1, 0.12), range(0.15, 0.2)]);
        rewrite.apply(&mut list);

        assert_eq!(
            &[range(0.1, 0.12), range(0.15, 0.2), range(0.3, 0.4), range(0.5, 0.6), range(0.7, 0.8)][..],
            &list[..]
        );
    }

    #[test]
    fn noop() {
        let list = items();
        let mut rewrite = SpanRewrite::new(2);
        rewrite.consume();
        rewrite.push(range(0.5, 0.6));

        assert!(rewrite.is_noop(&list));
    }
}
