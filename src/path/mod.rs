//! Slash-delimited path expressions over nested documents.
//!
//! A path names one node in a document tree. Segments are separated by
//! `/`; each segment is a map key, optionally followed by a bracketed
//! sequence index.
//!
//! # Supported syntax
//!
//! - `/` - the whole document
//! - `/key` - named entry of a map
//! - `/key[2]` - element 2 of the sequence stored under `key`
//! - `/servers[0]/host` - segments chain left to right
//!
//! Indices are non-negative integers; there is no escaping for `/`,
//! `[`, or `]` inside keys.

pub mod iter;
pub mod parser;
pub mod segment;

pub use iter::SegmentIter;
pub use parser::split;
pub use segment::Segment;
