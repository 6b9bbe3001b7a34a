use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::{App, OutputMode};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => self.mark_dirty(),
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_paste_event(&mut self, text: String) {
        // The search box is a single line
        let text = text.replace(['\n', '\r'], "");
        self.search.textarea_mut().insert_str(&text);
        self.after_search_edit();
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if handle_global_keys(self, key) {
            return;
        }

        if handle_navigation_keys(self, key) {
            return;
        }

        // Everything else edits the search box
        if self.search.textarea_mut().input(key) {
            self.after_search_edit();
        }
    }

    fn after_search_edit(&mut self) {
        self.search.sync(&self.index);
        self.refresh_preview();
        self.mark_dirty();
    }

    /// Copy the selected path into the search box
    fn complete_selected_path(&mut self) {
        let Some(path) = self.selected_path().map(str::to_string) else {
            return;
        };
        self.search.set_query(&path, &self.index);
        self.refresh_preview();
        self.mark_dirty();
    }
}

/// Quit and output keys
fn handle_global_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => {
            app.quit_with(None);
            true
        }
        KeyCode::Esc => {
            app.quit_with(None);
            true
        }
        KeyCode::Enter => {
            // Nothing to print without a selection
            if app.selected_path().is_some() {
                let mode = if key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT) {
                    OutputMode::Query
                } else {
                    OutputMode::Results
                };
                app.quit_with(Some(mode));
            }
            true
        }
        _ => false,
    }
}

/// Candidate selection and preview scrolling
fn handle_navigation_keys(app: &mut App, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Down => app.search.select_next(),
        KeyCode::Char('n') if ctrl => app.search.select_next(),
        KeyCode::Up => app.search.select_previous(),
        KeyCode::Char('p') if ctrl => app.search.select_previous(),
        KeyCode::Tab => {
            app.complete_selected_path();
            return true;
        }
        KeyCode::PageDown => app.preview_scroll.half_page_down(),
        KeyCode::Char('d') if ctrl => app.preview_scroll.half_page_down(),
        KeyCode::PageUp => app.preview_scroll.half_page_up(),
        KeyCode::Char('u') if ctrl => app.preview_scroll.half_page_up(),
        _ => return false,
    }

    app.refresh_preview();
    app.mark_dirty();
    true
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
