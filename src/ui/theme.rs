//! Color theme for the application

use ratatui::prelude::*;

/// Default dark theme
pub struct DefaultTheme;

impl DefaultTheme {
    pub const PRIMARY: Color = Color::Rgb(97, 175, 239);
    pub const TEXT: Color = Color::Rgb(220, 223, 228);
    pub const TEXT_DIM: Color = Color::Rgb(140, 146, 158);
    pub const TEXT_MUTED: Color = Color::Rgb(92, 97, 106);
    pub const BG_PANEL: Color = Color::Rgb(30, 34, 42);
    pub const GREEN: Color = Color::Rgb(152, 195, 121);
    pub const YELLOW: Color = Color::Rgb(229, 192, 123);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn active_border() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn inactive_border() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn normal_text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dim_text() -> Style {
        Style::default().fg(Self::TEXT_DIM)
    }

    pub fn info() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::GREEN)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::YELLOW)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::RED).add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlighted() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG_PANEL)
    }

    pub fn table_header() -> Style {
        Style::default()
            .fg(Self::YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn table_row_alt() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BG_PANEL)
    }

    pub fn row_number() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn header() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn status_bar() -> Style {
        Style::default().bg(Self::BG_PANEL).fg(Self::TEXT_DIM)
    }

    pub fn popup() -> Style {
        Style::default().bg(Self::BG_PANEL)
    }

    pub fn popup_border() -> Style {
        Style::default().fg(Self::YELLOW)
    }
}
