//! Conditional grouping by optional key selectors.
//!
//! Groups elements by a composite key assembled from an ordered list of
//! selector slots, any of which may be unset for a given engine. One
//! data-driven algorithm handles every combination of set and unset
//! slots: the active sublist is computed per call and the composite key
//! is always an ordered list of exactly the active selectors' outputs.
//!
//! Grouping is stable: groups surface in first-key-occurrence order and
//! members keep their original relative order.

mod engine;
mod types;

pub use engine::ConditionalGrouper;
pub use types::Group;
