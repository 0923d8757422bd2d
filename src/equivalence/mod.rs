//! Element and sequence equivalence semantics.
//!
//! The leaf module of the crate: everything else that needs a notion of
//! "same element" builds on it. Provides:
//!
//! - **Comparer injection**: the [`Comparer`] trait (an equality predicate
//!   plus a bucketing hash) with [`Structural`] as the natural-equality
//!   default. Every set operation has a `_with` variant accepting one.
//! - **Set operations**: [`symmetric_difference`] and first-occurrence
//!   [`distinct`] extraction.
//! - **Sequence comparison**: [`SequenceComparator`], a comparator fixed
//!   to one of three [`EqualityStrategy`] modes — positional, multiset,
//!   or set equality.

mod comparer;
mod difference;
mod strategy;

pub use comparer::{Comparer, Structural};
pub use difference::{distinct, distinct_with, symmetric_difference, symmetric_difference_with};
pub use strategy::{EqualityStrategy, SequenceComparator};
