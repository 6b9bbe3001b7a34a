//! Search module
//!
//! Narrows the path index down to the candidates matching the search box.

mod matcher;
mod search_state;

pub use matcher::CandidateMatcher;
pub use search_state::SearchState;
