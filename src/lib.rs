//! Domain-agnostic sequence algorithm toolkit.
//!
//! Provides reusable algorithms layered on top of plain in-memory sequences:
//!
//! - **Equivalence**: pluggable element equality, distinct-value extraction,
//!   symmetric set difference, and a three-strategy sequence comparator
//!   ([`equivalence`]).
//! - **Combinations**: enumeration of every combination of a sequence's
//!   distinct values within a caller-chosen size window ([`combinations`]).
//! - **Conditional grouping**: stable grouping by a variable number of
//!   optional key selectors, with composite keys shaped by the selectors
//!   that are actually set ([`grouping`]).
//! - **Delimited records**: escaping-aware joining and splitting of optional
//!   string fields ([`delimited`]).
//!
//! # Architecture
//!
//! This crate sits at Layer 1 (Foundation) in the U-Engine ecosystem and
//! depends on no other U-Engine crate. It contains no domain-specific
//! concepts — scheduling, nesting, routing, etc. consume these primitives
//! at higher layers.
//!
//! # Concurrency
//!
//! Every operation is a synchronous pure function over an already
//! materialized sequence: inputs are never mutated and results are newly
//! allocated, so independent calls are safe from any number of threads
//! without synchronization.

pub mod combinations;
pub mod delimited;
pub mod equivalence;
pub mod grouping;
