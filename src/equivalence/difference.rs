//! Symmetric set difference and distinct-value extraction.

use std::hash::Hash;

use super::comparer::{Buckets, Comparer, Structural};

/// Returns the distinct values of `values` in first-occurrence order.
///
/// # Examples
///
/// ```
/// use u_seqkit::equivalence::distinct;
///
/// assert_eq!(distinct(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn distinct<T: Clone + Eq + Hash>(values: &[T]) -> Vec<T> {
    distinct_with(values, &Structural)
}

/// Returns the distinct values of `values` under `comparer`, in
/// first-occurrence order. When several source elements are equivalent,
/// the first one encountered is the representative kept in the output.
pub fn distinct_with<T: Clone, C: Comparer<T>>(values: &[T], comparer: &C) -> Vec<T> {
    let mut seen = Buckets::new(comparer);
    let mut out = Vec::new();
    for value in values {
        if seen.insert(value) {
            out.push(value.clone());
        }
    }
    out
}

/// Returns the elements present in exactly one of `first` and `second`.
///
/// Computed as (first ∖ second) ∪ (second ∖ first) under natural
/// equality. Each qualifying element appears exactly once in the output
/// even when duplicated in its source. This is a set operation: the
/// traversal order of the result is implementation-defined (currently
/// qualifying elements of `first` in first-occurrence order, then those
/// of `second`) and callers must not rely on it.
///
/// # Examples
///
/// ```
/// use u_seqkit::equivalence::symmetric_difference;
///
/// let mut result = symmetric_difference(&[1, 2, 2, 3], &[3, 4]);
/// result.sort();
/// assert_eq!(result, vec![1, 2, 4]);
/// ```
pub fn symmetric_difference<T: Clone + Eq + Hash>(first: &[T], second: &[T]) -> Vec<T> {
    symmetric_difference_with(first, second, &Structural)
}

/// Returns the elements present in exactly one of `first` and `second`,
/// under `comparer`. See [`symmetric_difference`].
pub fn symmetric_difference_with<T: Clone, C: Comparer<T>>(
    first: &[T],
    second: &[T],
    comparer: &C,
) -> Vec<T> {
    let mut in_first = Buckets::new(comparer);
    for value in first {
        in_first.insert(value);
    }
    let mut in_second = Buckets::new(comparer);
    for value in second {
        in_second.insert(value);
    }

    let mut emitted = Buckets::new(comparer);
    let mut out = Vec::new();
    for value in first {
        if !in_second.contains(value) && emitted.insert(value) {
            out.push(value.clone());
        }
    }
    for value in second {
        if !in_first.contains(value) && emitted.insert(value) {
            out.push(value.clone());
        }
    }
    out
}
