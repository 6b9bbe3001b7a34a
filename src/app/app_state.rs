use crate::config::Config;
use crate::json::Document;
use crate::query::{self, PathIndexer};
use crate::scroll::ScrollState;
use crate::search::SearchState;

/// What to print once the UI has been torn down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// The resolved value of the selected path
    Results,
    /// The selected path itself
    Query,
}

pub struct App {
    pub document: Document,
    pub index: Vec<String>,
    pub search: SearchState,
    pub preview_scroll: ScrollState,
    pub output_mode: Option<OutputMode>,
    pub should_quit: bool,
    pub highlight: bool,
    /// Shown in the hint bar, e.g. a config file that failed to parse
    pub warning: Option<String>,
    /// Resolved text for `preview_for`
    preview: String,
    preview_for: Option<usize>,
    needs_render: bool,
}

impl App {
    pub fn new(document: Document, config: &Config) -> Self {
        let index = PathIndexer::new(config.index.to_options()).build(document.root());

        #[cfg(debug_assertions)]
        log::debug!("Indexed {} paths", index.len());

        let search = SearchState::new(config.search.matcher, &index);

        let mut app = Self {
            document,
            index,
            search,
            preview_scroll: ScrollState::new(),
            output_mode: None,
            should_quit: false,
            highlight: config.preview.highlight,
            warning: None,
            preview: String::new(),
            preview_for: None,
            needs_render: true,
        };
        app.refresh_preview();
        app
    }

    pub fn with_warning(mut self, warning: Option<String>) -> Self {
        self.warning = warning;
        self
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_mode(&self) -> Option<OutputMode> {
        self.output_mode
    }

    /// Path under the selection, if anything matches
    pub fn selected_path(&self) -> Option<&str> {
        self.search
            .selected_index()
            .and_then(|i| self.index.get(i))
            .map(String::as_str)
    }

    /// Resolved text of the selected path (empty when nothing is selected)
    pub fn preview(&self) -> &str {
        &self.preview
    }

    /// Re-resolve the preview if the selection moved to another path
    pub fn refresh_preview(&mut self) {
        let selected = self.search.selected_index();
        if selected == self.preview_for {
            return;
        }

        self.preview = match self.selected_path() {
            Some(path) => query::resolve(path, &self.document),
            None => String::new(),
        };
        self.preview_for = selected;
        self.preview_scroll.jump_to_top();
        self.mark_dirty();
    }

    /// Text printed to stdout after the terminal is restored
    pub fn final_output(&self) -> Option<String> {
        let path = self.selected_path()?;
        match self.output_mode? {
            OutputMode::Results => Some(query::resolve(path, &self.document)),
            OutputMode::Query => Some(path.to_string()),
        }
    }

    pub fn quit_with(&mut self, mode: Option<OutputMode>) {
        #[cfg(debug_assertions)]
        log::debug!("Quitting with output mode {:?}", mode);

        self.output_mode = mode;
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
