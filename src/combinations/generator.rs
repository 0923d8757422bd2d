//! Subset enumeration engine.

use std::hash::Hash;

use thiserror::Error;

use crate::equivalence::{distinct_with, Comparer, Structural};

/// A combination size window was invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CombinationError {
    /// `minimum_items` fell below 1, the smallest meaningful
    /// combination size.
    #[error("minimum_items must be at least 1, got {minimum}")]
    MinimumTooSmall {
        /// The rejected minimum.
        minimum: usize,
    },

    /// `maximum_items` fell below `minimum_items`.
    #[error("maximum_items ({maximum}) must not be less than minimum_items ({minimum})")]
    BoundsInverted {
        /// The configured minimum.
        minimum: usize,
        /// The rejected maximum.
        maximum: usize,
    },
}

/// Enumerates combinations of a sequence's distinct values.
///
/// Duplicates in the source are collapsed (under the configured comparer)
/// before enumeration, so a source like `[1, 2, 3, 2]` produces exactly
/// the combinations of `[1, 2, 3]`. Each combination lists its elements
/// in the first-occurrence order of the source; the order in which
/// combinations themselves are emitted is unspecified.
///
/// A sequence with `n` distinct values has `2ⁿ − 1` non-empty
/// combinations, so full enumeration is exponential by nature. For large
/// inputs, narrow the size window with [`with_minimum_items`] and
/// [`with_maximum_items`].
///
/// [`with_minimum_items`]: CombinationGenerator::with_minimum_items
/// [`with_maximum_items`]: CombinationGenerator::with_maximum_items
///
/// # Defaults
///
/// Minimum size 1; maximum size equal to the distinct count of the input.
///
/// # Examples
///
/// ```
/// use u_seqkit::combinations::CombinationGenerator;
///
/// let pairs = CombinationGenerator::new()
///     .with_minimum_items(2)
///     .with_maximum_items(2)
///     .generate(&['a', 'b', 'c'])
///     .unwrap();
///
/// assert_eq!(pairs.len(), 3);
/// assert!(pairs.contains(&vec!['a', 'b']));
/// assert!(pairs.contains(&vec!['a', 'c']));
/// assert!(pairs.contains(&vec!['b', 'c']));
/// ```
#[derive(Debug, Clone)]
pub struct CombinationGenerator<C = Structural> {
    minimum_items: usize,
    maximum_items: Option<usize>,
    comparer: C,
}

impl CombinationGenerator {
    /// Creates a generator with the default size window and natural
    /// element equality.
    pub fn new() -> Self {
        Self {
            minimum_items: 1,
            maximum_items: None,
            comparer: Structural,
        }
    }
}

impl Default for CombinationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> CombinationGenerator<C> {
    /// Sets the smallest combination size to emit. Must be at least 1.
    pub fn with_minimum_items(mut self, minimum: usize) -> Self {
        self.minimum_items = minimum;
        self
    }

    /// Sets the largest combination size to emit. Must not be less than
    /// the minimum. Unset, it defaults to the input's distinct count.
    pub fn with_maximum_items(mut self, maximum: usize) -> Self {
        self.maximum_items = Some(maximum);
        self
    }

    /// Replaces the element comparer used to collapse duplicates.
    pub fn with_comparer<C2>(self, comparer: C2) -> CombinationGenerator<C2> {
        CombinationGenerator {
            minimum_items: self.minimum_items,
            maximum_items: self.maximum_items,
            comparer,
        }
    }

    /// Generates every combination of `values`' distinct elements whose
    /// size lies within the configured window.
    ///
    /// A `minimum_items` exceeding the distinct count yields an empty
    /// result, not an error; only a malformed window itself fails.
    pub fn generate<T>(&self, values: &[T]) -> Result<Vec<Vec<T>>, CombinationError>
    where
        T: Clone,
        C: Comparer<T>,
    {
        if self.minimum_items < 1 {
            return Err(CombinationError::MinimumTooSmall {
                minimum: self.minimum_items,
            });
        }
        if let Some(maximum) = self.maximum_items {
            if maximum < self.minimum_items {
                return Err(CombinationError::BoundsInverted {
                    minimum: self.minimum_items,
                    maximum,
                });
            }
        }

        let pool = distinct_with(values, &self.comparer);
        let maximum = self.maximum_items.unwrap_or(pool.len());
        Ok(enumerate(&pool, self.minimum_items, maximum))
    }
}

/// Enumerates all non-empty combinations of `values`' distinct elements.
///
/// Equivalent to [`CombinationGenerator::new()`](CombinationGenerator::new)
/// followed by `generate`, with the default window this can never fail.
///
/// # Examples
///
/// ```
/// use u_seqkit::combinations::combinations;
///
/// // 2³ − 1 non-empty subsets, duplicates collapsed first
/// assert_eq!(combinations(&[1, 2, 3, 2]).len(), 7);
/// ```
pub fn combinations<T: Clone + Eq + Hash>(values: &[T]) -> Vec<Vec<T>> {
    let pool = distinct_with(values, &Structural);
    let maximum = pool.len();
    enumerate(&pool, 1, maximum)
}

/// Walks every non-empty subset of `pool` as a bit pattern of width
/// `pool.len()`, emitting those whose population count lies in
/// `[minimum, maximum]`. Elements within a combination appear in
/// increasing index order, which is the pool's first-occurrence order.
fn enumerate<T: Clone>(pool: &[T], minimum: usize, maximum: usize) -> Vec<Vec<T>> {
    let n = pool.len();
    let mut result = Vec::new();
    if n == 0 || minimum > n {
        return result;
    }
    debug_assert!(n < u128::BITS as usize);

    for mask in 1u128..(1u128 << n) {
        let size = mask.count_ones() as usize;
        if size < minimum || size > maximum {
            continue;
        }
        let mut combination = Vec::with_capacity(size);
        for (i, value) in pool.iter().enumerate() {
            if mask & (1u128 << i) != 0 {
                combination.push(value.clone());
            }
        }
        result.push(combination);
    }
    result
}
