//! Path index and query resolution
//!
//! [`PathIndexer`] enumerates every addressable path of a document once at
//! startup; [`resolve`] turns any one of those paths (or a hand-typed variant)
//! back into a display string.

pub mod indexer;
pub mod path;
pub mod resolver;

pub use indexer::{IndexOptions, PathIndexer, build_index};
pub use resolver::{NOT_FOUND, Resolved, lookup, resolve, resolve_bytes};
