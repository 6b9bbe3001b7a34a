use ratatui::style::Style;
use tui_textarea::TextArea;

use super::matcher::CandidateMatcher;
use crate::config::MatcherKind;
use crate::theme;

/// Creates a TextArea configured for the search box.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// Search box text plus the candidates it currently matches
pub struct SearchState {
    textarea: TextArea<'static>,
    matcher: CandidateMatcher,
    /// Candidate indices, in display order
    filtered: Vec<usize>,
    /// Position of the selection within `filtered`
    selected: Option<usize>,
    /// First visible row of the candidate list
    list_offset: usize,
    last_query: String,
}

impl SearchState {
    pub fn new(kind: MatcherKind, candidates: &[String]) -> Self {
        let mut state = Self {
            textarea: create_search_textarea(),
            matcher: CandidateMatcher::new(kind),
            filtered: Vec::new(),
            selected: None,
            list_offset: 0,
            last_query: String::new(),
        };
        state.refilter(candidates);
        state
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    pub fn textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.textarea
    }

    pub fn matcher_kind(&self) -> MatcherKind {
        self.matcher.kind()
    }

    /// Re-run the matcher if the query changed since the last filter
    ///
    /// Returns true if the candidate list was rebuilt.
    pub fn sync(&mut self, candidates: &[String]) -> bool {
        if self.query() == self.last_query {
            return false;
        }
        self.refilter(candidates);
        true
    }

    /// Rebuild the candidate list and select the best match
    pub fn refilter(&mut self, candidates: &[String]) {
        let query = self.query().to_string();
        self.filtered = self.matcher.filter(&query, candidates);
        self.selected = if self.filtered.is_empty() { None } else { Some(0) };
        self.list_offset = 0;
        self.last_query = query;
    }

    /// Replace the search text (single line) and refilter
    pub fn set_query(&mut self, text: &str, candidates: &[String]) {
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text.replace(['\n', '\r'], ""));
        self.refilter(candidates);
    }

    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Position of the selection within the filtered list
    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// Index into the full candidate list of the selected entry
    pub fn selected_index(&self) -> Option<usize> {
        self.selected.map(|pos| self.filtered[pos])
    }

    pub fn select_next(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(pos) => (pos + 1) % self.filtered.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len();
        self.selected = Some(match self.selected {
            Some(pos) => (pos + len - 1) % len,
            None => len - 1,
        });
    }

    pub fn list_offset(&self) -> usize {
        self.list_offset
    }

    /// Scroll the candidate list so the selection is inside the viewport
    pub fn ensure_visible(&mut self, viewport_height: usize) {
        let Some(pos) = self.selected else {
            self.list_offset = 0;
            return;
        };
        if viewport_height == 0 {
            return;
        }
        if pos < self.list_offset {
            self.list_offset = pos;
        } else if pos >= self.list_offset + viewport_height {
            self.list_offset = pos + 1 - viewport_height;
        }
    }
}

#[cfg(test)]
#[path = "search_state_tests.rs"]
mod search_state_tests;
