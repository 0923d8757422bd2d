//! Combination enumeration over distinct values.
//!
//! A combination is an order-preserving subset of a sequence's *distinct*
//! elements: duplicates are collapsed before enumeration, each emitted
//! combination keeps the source's first-occurrence order, and no two
//! combinations share the same content.
//!
//! Enumeration is exponential in the distinct count (`2ⁿ − 1` subsets);
//! the size window on [`CombinationGenerator`] is the caller's tool for
//! keeping large inputs tractable.

mod generator;

pub use generator::{combinations, CombinationError, CombinationGenerator};
