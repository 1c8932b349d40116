//! Layout management

use crate::app::{ActivePanel, App};
use crate::ui::{draw_countries_table, draw_menu, DefaultTheme};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use rust_i18n::t;

/// Draw the main layout
pub fn draw_layout(f: &mut Frame, app: &mut App, area: Rect) {
    // Main vertical layout: header, content, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

/// Draw the header with title and subtitle
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(24), // Title
            Constraint::Min(20),    // Subtitle
            Constraint::Length(30), // Quick hints
        ])
        .split(area);

    // Title
    let logo = Paragraph::new(vec![
        Line::from(Span::styled("╔════════════════════╗", DefaultTheme::title())),
        Line::from(vec![
            Span::styled("║ ", DefaultTheme::title()),
            Span::styled(
                format!("{:<18}", t!("app_title")),
                Style::default().fg(DefaultTheme::TEXT),
            ),
            Span::styled(" ║", DefaultTheme::title()),
        ]),
        Line::from(Span::styled("╚════════════════════╝", DefaultTheme::title())),
    ])
    .style(DefaultTheme::header());
    f.render_widget(logo, header_chunks[0]);

    // Subtitle reflecting the current view
    let subtitle = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("● ", DefaultTheme::success()),
            Span::styled(app.subtitle(), DefaultTheme::normal_text()),
        ]),
        Line::from(""),
    ])
    .style(DefaultTheme::header());
    f.render_widget(subtitle, header_chunks[1]);

    // Quick hints
    let hints = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", DefaultTheme::info()),
            Span::styled(format!(":{} ", t!("apply")), DefaultTheme::dim_text()),
            Span::styled("F1", DefaultTheme::info()),
            Span::styled(format!(":{} ", t!("help")), DefaultTheme::dim_text()),
        ]),
        Line::from(""),
    ])
    .style(DefaultTheme::header())
    .alignment(Alignment::Right);
    f.render_widget(hints, header_chunks[2]);
}

/// Draw main content area
fn draw_content(f: &mut Frame, app: &mut App, area: Rect) {
    // Horizontal split: menu on the left, table on the right
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(34), // Menu
            Constraint::Min(40),    // Table
        ])
        .split(area);

    let is_menu_active = app.active_panel == ActivePanel::Menu;
    let is_table_active = app.active_panel == ActivePanel::Table;

    draw_menu(f, app, h_chunks[0], is_menu_active);
    draw_countries_table(f, app, h_chunks[1], is_table_active);
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),    // Messages
            Constraint::Length(40), // Status info
        ])
        .split(area);

    // Messages (error or success)
    let message = if let Some(ref err) = app.error {
        Paragraph::new(Span::styled(format!("❌ {}", err), DefaultTheme::error()))
    } else if let Some(ref msg) = app.message {
        Paragraph::new(Span::styled(format!("✓ {}", msg), DefaultTheme::success()))
    } else {
        Paragraph::new(Span::styled(
            t!("status_hint").to_string(),
            DefaultTheme::dim_text(),
        ))
    };

    f.render_widget(message.style(DefaultTheme::status_bar()), chunks[0]);

    // Status info
    let status_info = format!(" {} ", app.status);
    let status = Paragraph::new(status_info)
        .style(DefaultTheme::status_bar())
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[1]);
}

/// Draw help popup
pub fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);

    // Clear the area
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(DefaultTheme::popup_border())
        .title(Span::styled(
            format!(" {} ", t!("help_title")),
            DefaultTheme::title(),
        ))
        .style(DefaultTheme::popup());
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            t!("help_rule_navigation").to_string(),
            DefaultTheme::info(),
        )),
        Line::from(""),
        Line::from(t!("help_tab").to_string()),
        Line::from(t!("help_arrows").to_string()),
        Line::from(t!("help_enter").to_string()),
        Line::from(t!("help_tabs").to_string()),
        Line::from(""),
        Line::from(Span::styled(
            t!("help_rule_export").to_string(),
            DefaultTheme::info(),
        )),
        Line::from(""),
        Line::from(t!("help_export_csv").to_string()),
        Line::from(t!("help_export_json").to_string()),
        Line::from(""),
        Line::from(Span::styled(
            t!("help_rule_other").to_string(),
            DefaultTheme::info(),
        )),
        Line::from(""),
        Line::from(t!("help_help").to_string()),
        Line::from(t!("help_quit").to_string()),
    ];

    f.render_widget(Paragraph::new(lines), inner);
}

/// Helper to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
