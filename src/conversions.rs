use crate::{IntoIter, Range, RangeError, RangeList, RangeVec, Tolerance};

impl<T: Tolerance> TryFrom<(T, T)> for Range<T> {
    type Error = RangeError;

    fn try_from(value: (T, T)) -> Result<Self, Self::Error> {
        Range::new(value.0, value.1)
    }
}

/// Unvalidated bounds, checked while converting into a [`Range`](Range)
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
pub(crate) struct RawRange<T> {
    start: T,
    end: T,
}

#[cfg(feature = "serde")]
impl<T: Tolerance> TryFrom<RawRange<T>> for Range<T> {
    type Error = RangeError;

    fn try_from(value: RawRange<T>) -> Result<Self, Self::Error> {
        Range::new(value.start, value.end)
    }
}

#[cfg(feature = "smallvec")]
impl<T: Tolerance> TryFrom<RangeVec<Range<T>>> for RangeList<T> {
    type Error = RangeError;

    fn try_from(value: RangeVec<Range<T>>) -> Result<Self, Self::Error> {
        RangeList::try_from_iter(value)
    }
}

impl<T: Tolerance> TryFrom<Vec<Range<T>>> for RangeList<T> {
    type Error = RangeError;

    fn try_from(value: Vec<Range<T>>) -> Result<Self, Self::Error> {
        RangeList::try_from_iter(value)
    }
}

impl<T: Tolerance, const N: usize> TryFrom<[Range<T>; N]> for RangeList<T> {
    type Error = RangeError;

    fn try_from(value: [Range<T>; N]) -> Result<Self, Self::Error> {
        RangeList::try_from_iter(value)
    }
}

impl<T: Tolerance> From<Range<T>> for RangeList<T> {
    fn from(value: Range<T>) -> Self {
        let mut items = RangeVec::with_capacity(1);
        items.push(value);

        RangeList { items }
    }
}

impl<T: Tolerance> From<RangeList<T>> for Vec<Range<T>> {
    fn from(value: RangeList<T>) -> Self {
        value.items.into_iter().collect()
    }
}

/// Collects ranges that may intersect, by adding them one by one
impl<T: Tolerance> FromIterator<Range<T>> for RangeList<T> {
    fn from_iter<I: IntoIterator<Item = Range<T>>>(iter: I) -> Self {
        let mut list = RangeList::new();
        list.extend(iter);
        list
    }
}

impl<T: Tolerance> Extend<Range<T>> for RangeList<T> {
    fn extend<I: IntoIterator<Item = Range<T>>>(&mut self, iter: I) {
        for range in iter {
            self.add(range);
        }
    }
}

impl<T: Tolerance> IntoIterator for RangeList<T> {
    type Item = Range<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Tolerance> IntoIterator for &'a RangeList<T> {
    type Item = &'a Range<T>;
    type IntoIter = std::slice::Iter<'a, Range<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{r, Range, RangeError, RangeList};

    #[test]
    fn range_from_tuple() {
        assert_eq!(Ok(r!(0.1f32..=0.2)), Range::<f32>::try_from((0.1, 0.2)));
        assert!(matches!(Range::<f32>::try_from((0.2, 0.1)), Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn list_from_vec() {
        let list = RangeList::<f32>::try_from(vec![r!(0.4..=0.5), r!(0.1..=0.2)]).unwrap();
        assert_eq!(vec![r!(0.1..=0.2), r!(0.4..=0.5)], Vec::from(list));

        let result = RangeList::<f32>::try_from(vec![r!(0.1..=0.2), r!(0.15..=0.3)]);
        assert!(matches!(result, Err(RangeError::OverlappingInput { .. })));
    }

    #[test]
    fn list_from_single() {
        let list = RangeList::from(r!(0.1f32..=0.2));

        assert_eq!(1, list.len());
        assert!(list.contains(&r!(0.1..=0.2)));
    }

    #[test]
    fn collect_merges() {
        let list: RangeList = [r!(0.4..=0.5), r!(0.1..=0.2), r!(0.45..=0.7), r!(0.2..=0.3)]
            .into_iter()
            .collect();

        assert_eq!(RangeList::<f32>::try_from([r!(0.1..=0.3), r!(0.4..=0.7)]).unwrap(), list);
    }

    #[test]
    fn extend() {
        let mut list = RangeList::from(r!(0.1f32..=0.2));
        list.extend([r!(0.3..=0.4), r!(0.2..=0.25)]);

        assert_eq!(vec![r!(0.1..=0.25), r!(0.3..=0.4)], list.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn iterate_borrowed() {
        let list = RangeList::<f32>::try_from([r!(0.1..=0.2), r!(0.3..=0.4)]).unwrap();
        let mut ends = Vec::new();

        for range in &list {
            ends.push(range.end());
        }

        assert_eq!(vec![0.2, 0.4], ends);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let list = RangeList::<f64>::try_from([r!(0.5..=1.0), r!(2.0..=2.5)]).unwrap();
        let json = serde_json::to_string(&list).unwrap();

        assert_eq!(r#"[{"start":0.5,"end":1.0},{"start":2.0,"end":2.5}]"#, json);
        assert_eq!(list, serde_json::from_str::<RangeList<f64>>(&json).unwrap());

        assert!(serde_json::from_str::<Range<f64>>(r#"{"start":1.0,"end":0.5}"#).is_err());
        assert!(serde_json::from_str::<RangeList<f64>>(
            r#"[{"start":0.5,"end":1.0},{"start":1.0,"end":1.5}]"#
        )
        .is_err());
    }
}
