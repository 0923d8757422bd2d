//! Strategy-selected sequence equality.

use super::comparer::{Buckets, Comparer, Structural};

/// How two sequences are compared by a [`SequenceComparator`].
///
/// The strategies order strictly by strength: sequences equal under
/// [`SequenceEqual`](EqualityStrategy::SequenceEqual) are equal under
/// [`UnorderedEqual`](EqualityStrategy::UnorderedEqual), and sequences
/// equal under `UnorderedEqual` are equal under
/// [`SymmetricDifferenceEqual`](EqualityStrategy::SymmetricDifferenceEqual).
/// Neither implication reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EqualityStrategy {
    /// Identical length and pairwise-equal elements at matching
    /// positions. Order and multiplicity both matter.
    SequenceEqual,

    /// Equal as sets: the same distinct membership. Duplicate counts and
    /// order are irrelevant; `["a", "a"]` equals `["a"]`.
    SymmetricDifferenceEqual,

    /// Equal as multisets: the same elements with the same occurrence
    /// counts, in any order. Stricter than `SymmetricDifferenceEqual`
    /// because duplicate counts must match exactly.
    UnorderedEqual,
}

/// Compares sequences under one fixed [`EqualityStrategy`].
///
/// Sequences are passed as `Option<&[T]>` so that absence participates
/// in the comparison: two absent sequences are equal, an absent and a
/// present one never are.
///
/// # Examples
///
/// ```
/// use u_seqkit::equivalence::{EqualityStrategy, SequenceComparator};
///
/// let unordered = SequenceComparator::new(EqualityStrategy::UnorderedEqual);
/// assert!(unordered.are_equal(Some(&["abc", "def"]), Some(&["def", "abc"])));
/// assert!(!unordered.are_equal(Some(&["abc", "abc"]), Some(&["abc"])));
///
/// let as_sets = SequenceComparator::new(EqualityStrategy::SymmetricDifferenceEqual);
/// assert!(as_sets.are_equal(Some(&["abc", "abc"]), Some(&["abc"])));
/// ```
#[derive(Debug, Clone)]
pub struct SequenceComparator<C = Structural> {
    strategy: EqualityStrategy,
    comparer: C,
}

impl SequenceComparator {
    /// Creates a comparator using natural element equality.
    pub fn new(strategy: EqualityStrategy) -> Self {
        Self {
            strategy,
            comparer: Structural,
        }
    }
}

impl<C> SequenceComparator<C> {
    /// Creates a comparator using a caller-supplied element comparer.
    pub fn with_comparer(strategy: EqualityStrategy, comparer: C) -> Self {
        Self { strategy, comparer }
    }

    /// The strategy this comparator was constructed with.
    pub fn strategy(&self) -> EqualityStrategy {
        self.strategy
    }

    /// Compares two optional sequences under the fixed strategy.
    ///
    /// Both absent → `true`; exactly one absent → `false`; otherwise the
    /// strategy decides.
    pub fn are_equal<T>(&self, first: Option<&[T]>, second: Option<&[T]>) -> bool
    where
        C: Comparer<T>,
    {
        match (first, second) {
            (None, None) => true,
            (Some(first), Some(second)) => match self.strategy {
                EqualityStrategy::SequenceEqual => self.sequence_equal(first, second),
                EqualityStrategy::SymmetricDifferenceEqual => self.set_equal(first, second),
                EqualityStrategy::UnorderedEqual => self.multiset_equal(first, second),
            },
            _ => false,
        }
    }

    fn sequence_equal<T>(&self, first: &[T], second: &[T]) -> bool
    where
        C: Comparer<T>,
    {
        first.len() == second.len()
            && first
                .iter()
                .zip(second)
                .all(|(a, b)| self.comparer.eq(a, b))
    }

    /// Distinct-membership equality: every element of each side occurs
    /// somewhere in the other.
    fn set_equal<T>(&self, first: &[T], second: &[T]) -> bool
    where
        C: Comparer<T>,
    {
        let mut in_first = Buckets::new(&self.comparer);
        for value in first {
            in_first.insert(value);
        }
        let mut in_second = Buckets::new(&self.comparer);
        for value in second {
            in_second.insert(value);
        }
        first.iter().all(|value| in_second.contains(value))
            && second.iter().all(|value| in_first.contains(value))
    }

    /// Multiset equality: occurrence counts of `first` are consumed one
    /// by one by the elements of `second`.
    fn multiset_equal<T>(&self, first: &[T], second: &[T]) -> bool
    where
        C: Comparer<T>,
    {
        if first.len() != second.len() {
            return false;
        }
        let mut counts = Buckets::new(&self.comparer);
        for value in first {
            counts.insert(value);
        }
        second.iter().all(|value| counts.remove_one(value))
    }
}
