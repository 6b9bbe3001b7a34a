//! jex library - JSON path explorer
//!
//! Indexes every reachable path of a JSON document and resolves path strings
//! back to values. The `jex` binary puts an interactive picker on top.

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod json;
pub mod query;
pub mod scroll;
pub mod search;
pub mod syntax_highlight;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
pub use error::JexError;
pub use json::Document;
pub use query::{IndexOptions, NOT_FOUND, PathIndexer, build_index, resolve, resolve_bytes};
