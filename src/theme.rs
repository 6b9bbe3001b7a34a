//! Centralized theme configuration for all UI components.
//!
//! Render files use `theme::module::CONSTANT` instead of hardcoding
//! `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette shared by the component modules below
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const MAGENTA: Color = Color::Rgb(198, 120, 221);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search box styles
pub mod search {
    use super::*;

    pub const BORDER: Color = palette::PINK;
    pub const TEXT: Color = palette::TEXT;
    pub const TITLE: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);
    pub const MATCH_COUNT: Color = palette::TEXT_MUTED;
    pub const NO_MATCHES: Color = palette::RED;
}

/// Candidate list styles
pub mod candidates {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const ITEM_FG: Color = Color::Rgb(180, 182, 200);
    pub const ITEM_SELECTED_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_BG: Color = palette::BG_HIGHLIGHT;
    pub const ITEM_SELECTED_INDICATOR: Color = palette::PINK;
    pub const ROOT_LABEL: Color = palette::TEXT_MUTED;
    pub const EMPTY: Color = palette::TEXT_DIM;
    pub const SCROLLBAR: Color = palette::CYAN;
}

/// Preview pane styles
pub mod preview {
    use super::*;

    pub const BORDER: Color = palette::PURPLE;
    pub const TITLE: Style = Style::new()
        .fg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);
    pub const TEXT: Color = palette::TEXT;
    pub const NOT_FOUND: Color = palette::RED;
    pub const SCROLLBAR: Color = palette::PURPLE;
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const WARNING: Color = palette::YELLOW;
}

/// JSON syntax colors for the preview
pub mod syntax {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const STRING: Color = palette::GREEN;
    pub const NUMBER: Color = palette::PURPLE;
    pub const BOOLEAN: Color = palette::ORANGE;
    pub const NULL: Color = palette::MAGENTA;
    pub const PUNCTUATION: Color = palette::TEXT_MUTED;
    pub const PLAIN: Color = palette::TEXT;
}
