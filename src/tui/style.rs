//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;
    pub const SELECTED_BG: Color = Color::DarkGray;
    pub const STATUS_FG: Color = Color::Yellow;
    pub const ERROR_FG: Color = Color::Red;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected table row.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Row position column and key hints.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Status line for notices such as empty results.
    pub fn status() -> Style {
        Style::default().fg(Theme::STATUS_FG)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR_FG)
            .add_modifier(Modifier::BOLD)
    }
}
