// Configuration type definitions

use serde::Deserialize;

use crate::query::IndexOptions;

/// How the search box narrows the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// Skim-style fuzzy matching, best score first
    #[default]
    Fuzzy,
    /// Query characters must appear in order; index order is kept
    Ordered,
}

/// Index configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    #[serde(default = "default_true")]
    pub include_root: bool,
    #[serde(default)]
    pub array_counts: bool,
    #[serde(default)]
    pub array_indices: bool,
}

fn default_true() -> bool {
    true
}

impl Default for IndexConfig {
    fn default() -> Self {
        IndexConfig {
            include_root: true,
            array_counts: false,
            array_indices: false,
        }
    }
}

impl IndexConfig {
    pub fn to_options(&self) -> IndexOptions {
        IndexOptions {
            include_root: self.include_root,
            array_counts: self.array_counts,
            array_indices: self.array_indices,
            ..IndexOptions::default()
        }
    }
}

/// Search configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchConfig {
    #[serde(default)]
    pub matcher: MatcherKind,
}

/// Preview pane configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewConfig {
    #[serde(default = "default_true")]
    pub highlight: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        PreviewConfig { highlight: true }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
