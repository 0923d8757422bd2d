//! Delimited-record encoding of string sequences.
//!
//! A thin, mechanical collaborator of the sequence algorithms: joins a
//! sequence of optional string fields into one delimited record and
//! splits such records back, with quote-escaping and a lossless null
//! encoding so the round trip reproduces the original sequence exactly.

mod codec;

pub use codec::{DelimitedCodec, DelimitedError};
