//! Path index construction
//!
//! Walks a parsed document depth-first and collects every addressable path,
//! in first-discovery order and without duplicates.

use std::collections::HashSet;

use serde_json::Value;

use super::path;

/// Which optional path shapes to include in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Offer `""` (the whole document) as the first candidate
    pub include_root: bool,
    /// Emit `name.#` for every array
    pub array_counts: bool,
    /// Emit `name[N]` for every array element, and walk below it
    pub array_indices: bool,
    /// Stop descending below this nesting depth
    pub max_depth: Option<usize>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            include_root: true,
            array_counts: false,
            array_indices: false,
            max_depth: None,
        }
    }
}

/// Ordered, deduplicated path collection for one walk
#[derive(Debug, Default)]
struct PathAccumulator {
    paths: Vec<String>,
    seen: HashSet<String>,
}

impl PathAccumulator {
    fn push(&mut self, path: String) {
        if !self.seen.contains(&path) {
            self.seen.insert(path.clone());
            self.paths.push(path);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PathIndexer {
    options: IndexOptions,
}

impl PathIndexer {
    pub fn new(options: IndexOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> IndexOptions {
        self.options
    }

    /// Build the candidate list for a document
    ///
    /// Every array element is visited, so fields that only appear in later
    /// elements of a heterogeneous array are still indexed. Bare wildcard
    /// leaves (`items[]`) are filtered out of the result.
    pub fn build(&self, root: &Value) -> Vec<String> {
        let mut acc = PathAccumulator::default();
        if self.options.include_root {
            acc.push(String::new());
        }

        self.walk("", root, 0, &mut acc);

        let paths: Vec<String> = acc
            .paths
            .into_iter()
            .filter(|p| !path::ends_with_wildcard(p))
            .collect();

        #[cfg(debug_assertions)]
        log::debug!("Built path index with {} entries", paths.len());

        paths
    }

    fn walk(&self, prefix: &str, value: &Value, depth: usize, acc: &mut PathAccumulator) {
        if self.options.max_depth.is_some_and(|max| depth >= max) {
            return;
        }

        match value {
            Value::Object(map) => {
                for (key, member) in map {
                    if !path::is_addressable_field(key) {
                        continue;
                    }
                    let full_key = path::join_field(prefix, key);
                    acc.push(full_key.clone());
                    self.walk(&full_key, member, depth + 1, acc);
                }
            }
            Value::Array(items) => {
                let wildcard = path::join_wildcard(prefix);
                acc.push(wildcard.clone());

                if self.options.array_counts {
                    acc.push(path::join_count(prefix));
                }

                for item in items {
                    self.walk(&wildcard, item, depth + 1, acc);
                }

                if self.options.array_indices {
                    for (index, item) in items.iter().enumerate() {
                        let element = path::join_index(prefix, index);
                        acc.push(element.clone());
                        self.walk(&element, item, depth + 1, acc);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Build an index with default options
pub fn build_index(root: &Value) -> Vec<String> {
    PathIndexer::default().build(root)
}

#[cfg(test)]
#[path = "indexer_tests.rs"]
mod indexer_tests;
