//! Preview colouring for rendered JSON
//!
//! Works on the display text rather than the parsed value, so projections
//! (one compact value per line) and bare scalars are coloured the same way
//! as pretty-printed documents.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::theme;

/// Single-pass JSON token highlighter
pub struct JsonHighlighter;

impl JsonHighlighter {
    /// Highlight multi-line text, one ratatui line per input line
    pub fn highlight_text(text: &str) -> Vec<Line<'static>> {
        text.lines().map(Self::highlight_line).collect()
    }

    /// Highlight a single line
    pub fn highlight_line(line: &str) -> Line<'static> {
        Line::from(Self::highlight(line))
    }

    /// Tokenize one line into styled spans
    pub fn highlight(text: &str) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let chars: Vec<char> = text.chars().collect();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];

            if c.is_whitespace() {
                let start = i;
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                spans.push(Span::raw(collect(&chars[start..i])));
                continue;
            }

            if c == '"' {
                let start = i;
                i += 1;
                while i < chars.len() {
                    match chars[i] {
                        '\\' if i + 1 < chars.len() => i += 2,
                        '"' => {
                            i += 1;
                            break;
                        }
                        _ => i += 1,
                    }
                }
                let color = if followed_by_colon(&chars, i) {
                    theme::syntax::KEY
                } else {
                    theme::syntax::STRING
                };
                spans.push(styled(&chars[start..i], color));
                continue;
            }

            if c.is_ascii_digit() || (c == '-' && chars.get(i + 1).is_some_and(char::is_ascii_digit))
            {
                let start = i;
                i += 1;
                while i < chars.len() && is_number_char(chars[i]) {
                    i += 1;
                }
                spans.push(styled(&chars[start..i], theme::syntax::NUMBER));
                continue;
            }

            if is_punctuation(c) {
                spans.push(styled(&chars[i..=i], theme::syntax::PUNCTUATION));
                i += 1;
                continue;
            }

            // Bare words: literals, or plain text such as unquoted strings in a projection
            let start = i;
            while i < chars.len() && !chars[i].is_whitespace() && !is_punctuation(chars[i]) && chars[i] != '"' {
                i += 1;
            }
            let word = &chars[start..i];
            let color = match collect(word).as_str() {
                "true" | "false" => theme::syntax::BOOLEAN,
                "null" => theme::syntax::NULL,
                _ => theme::syntax::PLAIN,
            };
            spans.push(styled(word, color));
        }

        spans
    }
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn styled(chars: &[char], color: ratatui::style::Color) -> Span<'static> {
    Span::styled(collect(chars), Style::default().fg(color))
}

fn is_punctuation(c: char) -> bool {
    matches!(c, '{' | '}' | '[' | ']' | ':' | ',')
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-')
}

/// True if the next non-whitespace character at or after `from` is `:`
fn followed_by_colon(chars: &[char], from: usize) -> bool {
    chars[from.min(chars.len())..]
        .iter()
        .find(|c| !c.is_whitespace())
        .is_some_and(|&c| c == ':')
}

#[cfg(test)]
#[path = "syntax_highlight_tests.rs"]
mod syntax_highlight_tests;
