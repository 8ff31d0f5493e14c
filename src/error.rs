use thiserror::Error;

use crate::Range;

/// Errors raised while building or combining ranges
///
/// Bounds are reported widened to `f64`, so the error type is the same for every bound type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RangeError {
    #[error("range start {start} is greater than its end {end}")]
    InvalidRange { start: f64, end: f64 },

    #[error("range bounds can't be NaN")]
    NotANumber,

    #[error("can't merge {left} with {right}, there is a gap between them")]
    CannotMerge { left: Range<f64>, right: Range<f64> },

    #[error("ranges {left} and {right} intersect")]
    OverlappingInput { left: Range<f64>, right: Range<f64> },
}
