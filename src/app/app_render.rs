use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::query::NOT_FOUND;
use crate::syntax_highlight::JsonHighlighter;
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

pub const SEARCH_BOX_HEIGHT: u16 = 3;
const HINT_BAR_HEIGHT: u16 = 1;
const MIN_LIST_HEIGHT: u16 = 5;
const LIST_HEIGHT_PERCENT: u16 = 40;

/// Label shown for the whole-document path
const ROOT_LABEL: &str = "(Full JSON)";

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        &[$(($key, $desc)),+]
    };
}

const HINTS: &[(&str, &str)] = hints![
    "↑/↓" => "Select",
    "Tab" => "Complete",
    "Enter" => "Print Result",
    "Shift+Enter" => "Print Path",
    "PgUp/PgDn" => "Scroll",
    "Esc" => "Quit",
];

/// Rows given to the candidate list out of what is left below the search box
pub fn candidate_list_height(remaining: u16) -> u16 {
    let share = (remaining as u32 * LIST_HEIGHT_PERCENT as u32 / 100) as u16;
    share.max(MIN_LIST_HEIGHT).min(remaining)
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let remaining = area
            .height
            .saturating_sub(SEARCH_BOX_HEIGHT + HINT_BAR_HEIGHT);
        let list_height = candidate_list_height(remaining);

        let layout = Layout::vertical([
            Constraint::Length(SEARCH_BOX_HEIGHT),
            Constraint::Length(list_height),
            Constraint::Min(0),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .split(area);

        self.render_search_box(frame, layout[0]);
        self.render_candidates(frame, layout[1]);
        self.render_preview(frame, layout[2]);
        self.render_hint_bar(frame, layout[3]);
    }

    fn render_search_box(&mut self, frame: &mut Frame, area: Rect) {
        let filtered = self.search.filtered_count();
        let count_style = if filtered == 0 {
            Style::default().fg(theme::search::NO_MATCHES)
        } else {
            Style::default().fg(theme::search::MATCH_COUNT)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Search Query ", theme::search::TITLE))
            .title_top(
                Line::from(Span::styled(
                    format!(" {}/{} ", filtered, self.index.len()),
                    count_style,
                ))
                .alignment(Alignment::Right),
            )
            .border_style(Style::default().fg(theme::search::BORDER));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let textarea = self.search.textarea_mut();
        textarea.set_style(Style::default().fg(theme::search::TEXT));
        frame.render_widget(&*textarea, inner);
    }

    fn render_candidates(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Paths ")
            .border_style(Style::default().fg(theme::candidates::BORDER));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.search.filtered_count() == 0 {
            let empty = Paragraph::new(Span::styled(
                " No matching paths",
                Style::default().fg(theme::candidates::EMPTY),
            ));
            frame.render_widget(empty, inner);
            return;
        }

        let viewport = inner.height as usize;
        self.search.ensure_visible(viewport);
        let offset = self.search.list_offset();
        let selected = self.search.selected_position();

        let lines: Vec<Line> = self
            .search
            .filtered()
            .iter()
            .enumerate()
            .skip(offset)
            .take(viewport)
            .map(|(position, &candidate)| {
                candidate_line(&self.index[candidate], selected == Some(position))
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
        render_vertical_scrollbar(
            frame,
            area,
            self.search.filtered_count(),
            viewport,
            offset,
            theme::candidates::SCROLLBAR,
        );
    }

    fn render_preview(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Preview ", theme::preview::TITLE))
            .border_style(Style::default().fg(theme::preview::BORDER));
        let inner = block.inner(area);

        let Some(path) = self.selected_path() else {
            frame.render_widget(block, area);
            return;
        };

        let header = if path.is_empty() {
            format!("Query: {}", ROOT_LABEL)
        } else {
            format!("Query: {}", path)
        };

        let mut lines = vec![
            Line::from(Span::styled(header, theme::preview::TITLE)),
            Line::default(),
        ];
        let body = self.preview();
        if body == NOT_FOUND {
            lines.push(Line::from(Span::styled(
                body.to_string(),
                Style::default().fg(theme::preview::NOT_FOUND),
            )));
        } else if self.highlight {
            lines.extend(JsonHighlighter::highlight_text(body));
        } else {
            lines.extend(
                body.lines()
                    .map(|l| Line::styled(l.to_string(), Style::default().fg(theme::preview::TEXT))),
            );
        }

        let total = lines.len();
        self.preview_scroll.update_bounds(total, inner.height);

        let paragraph = Paragraph::new(lines)
            .block(block)
            .scroll((self.preview_scroll.offset, 0));
        frame.render_widget(paragraph, area);
        render_vertical_scrollbar(
            frame,
            area,
            total,
            inner.height as usize,
            self.preview_scroll.offset as usize,
            theme::preview::SCROLLBAR,
        );
    }

    fn render_hint_bar(&self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(theme::help_line::KEY);
        let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
        let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

        let mut spans = Vec::with_capacity(HINTS.len() * 4 + 2);
        spans.push(Span::raw(" "));

        if let Some(warning) = &self.warning {
            spans.push(Span::styled(
                format!("⚠ {}", warning),
                Style::default()
                    .fg(theme::help_line::WARNING)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }

        for (i, (key, desc)) in HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" \u{2022} ", sep_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(*desc, desc_style));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn candidate_line(path: &str, is_selected: bool) -> Line<'static> {
    let (label, label_color) = if path.is_empty() {
        (ROOT_LABEL.to_string(), theme::candidates::ROOT_LABEL)
    } else {
        (path.to_string(), theme::candidates::ITEM_FG)
    };

    if is_selected {
        Line::from(vec![
            Span::styled(
                "▌ ",
                Style::default().fg(theme::candidates::ITEM_SELECTED_INDICATOR),
            ),
            Span::styled(
                label,
                Style::default()
                    .fg(theme::candidates::ITEM_SELECTED_FG)
                    .bg(theme::candidates::ITEM_SELECTED_BG)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label, Style::default().fg(label_color)),
        ])
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
