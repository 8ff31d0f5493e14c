/// Create a new range list from the given ranges, fails when any of them intersect
///
/// `<type>:` can be used to set the bound type when it can't resolved from context
///
/// Examples:
///
/// ```rust
/// use eater_rangelist::{r, range_list, RangeList};
///
/// let ranges = range_list![f32: r!(0.1..=0.2), r!(0.4..=0.5)].unwrap();
/// let ranges: RangeList<f64> = range_list![r!(-1.0..=1.0)].unwrap();
///
/// assert!(range_list![f32: r!(0.1..=0.2), r!(0.2..=0.3)].is_err());
/// ```
#[macro_export]
macro_rules! range_list {
    (([one]) $_item:expr) => {
        1
    };

    [$ty:ty: $($item:expr),* $(,)?] => {
        {
            let arr: [$crate::Range<$ty>; 0 $(+ $crate::range_list!(([one]) $item))*] = [$($item),*];
            $crate::RangeList::<$ty>::try_from_iter(arr)
        }
    };

    [$($item:expr),* $(,)?] => {
        {
            let arr: [$crate::Range<_>; 0 $(+ $crate::range_list!(([one]) $item))*] = [$($item),*];
            $crate::RangeList::try_from_iter(arr)
        }
    };
}


/// Create a new closed range alike the inclusive range operator (`range` is an alias for `r`)
///
/// **Panics** if the start is greater than the end, or either bound is NaN. Use
/// [`Range::new`](crate::Range::new) for bounds that aren't known to be valid.
///
/// **Note:** an expression in the left position must be wrapped in parenthesis, for rust not to be confused
///
/// # Examples
///
/// ```rust
/// use eater_rangelist::{r, range, Range};
///
/// let a: Range<f32> = r!(0.1..=0.2);
/// assert!(a.contains(0.2));
///
/// let a = range!(-1.0f64..=1.0);
/// assert_eq!(-1.0, a.start());
///
/// // Expression start
/// let a: Range<f64> = r!((0.5 * 2.0)..=4.0);
/// assert!(a.contains(1.0));
/// ```
///
/// ```rust,should_panic
/// use eater_rangelist::r;
///
/// let _ = r!(0.2f32..=0.1);
/// ```
#[macro_export]
macro_rules! r {
    (@new $l:expr, $r:expr) => {
        match $crate::Range::new($l, $r) {
            Ok(range) => range,
            Err(err) => panic!("invalid range literal: {}", err),
        }
    };

    ($l:literal ..= $r:expr) => {
        $crate::r!(@new $l, $r)
    };

    (($l:expr) ..= $r:expr) => {
        $crate::r!(@new $l, $r)
    };
}
