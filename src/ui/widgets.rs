//! UI widgets for the application

use crate::app::{App, TableTab};
use crate::format::format_number_for_language;
use crate::ui::DefaultTheme;
use ratatui::layout::Margin;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Cell, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
    ScrollbarState, Table,
};
use rust_i18n::t;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Draw the view menu panel
pub fn draw_menu(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let border_style = if active {
        DefaultTheme::active_border()
    } else {
        DefaultTheme::inactive_border()
    };

    let title = format!(" {} ", t!("menu_title"));

    let items: Vec<ListItem> = app
        .menu
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let style = if idx == app.menu_selected {
                if active {
                    DefaultTheme::selected()
                } else {
                    DefaultTheme::highlighted()
                }
            } else {
                DefaultTheme::normal_text()
            };
            let marker = if idx == app.menu_selected { "▸ " } else { "  " };
            ListItem::new(Line::from(Span::styled(
                format!("{}{}", marker, entry.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, DefaultTheme::title())),
    );

    f.render_widget(list, area);
}

/// Draw the countries table panel with tabs
pub fn draw_countries_table(f: &mut Frame, app: &mut App, area: Rect, active: bool) {
    // Draw tabs header
    let tabs_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: 2,
    };

    let content_area = Rect {
        x: area.x,
        y: area.y + 2,
        width: area.width,
        height: area.height.saturating_sub(2),
    };

    draw_table_tabs(f, app, tabs_area, active);

    // Draw content based on selected tab
    match app.table_tab {
        TableTab::Data => draw_table_data(f, app, content_area, active),
        TableTab::Stats => draw_table_stats(f, app, content_area, active),
    }
}

/// Draw the tabs bar
fn draw_table_tabs(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let tabs = vec![
        (format!("1:{}", t!("tab_data")), TableTab::Data),
        (format!("2:{}", t!("tab_stats")), TableTab::Stats),
    ];

    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for (label, tab) in tabs {
        let style = if app.table_tab == tab {
            Style::default()
                .fg(DefaultTheme::TEXT)
                .bg(DefaultTheme::PRIMARY)
                .add_modifier(Modifier::BOLD)
        } else if active {
            Style::default().fg(DefaultTheme::TEXT_DIM)
        } else {
            Style::default().fg(DefaultTheme::TEXT_MUTED)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    // Add row count on the right
    if !app.rows.is_empty() {
        let info = format!("│ {} ", t!("rows_count", count = app.rows.len()));
        spans.push(Span::styled(info, DefaultTheme::dim_text()));
    }

    let tabs_line = Line::from(spans);
    let tabs_widget = Paragraph::new(tabs_line);
    f.render_widget(tabs_widget, area);
}

/// Draw the data tab (country rows)
fn draw_table_data(f: &mut Frame, app: &mut App, area: Rect, active: bool) {
    let border_style = if active {
        DefaultTheme::active_border()
    } else {
        DefaultTheme::inactive_border()
    };

    let title = format!(" {} ", app.subtitle());

    if app.rows.is_empty() {
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(
                t!("no_rows").to_string(),
                DefaultTheme::dim_text(),
            )),
        ];
        let empty_msg = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(Span::styled(title, DefaultTheme::title())),
            )
            .alignment(Alignment::Center);
        f.render_widget(empty_msg, area);
        return;
    }

    let row_num_width = (app.rows.len().to_string().len() + 2).max(4) as u16;

    let widths = [
        Constraint::Length(row_num_width),
        Constraint::Length(6),  // Code
        Constraint::Min(18),    // Name
        Constraint::Length(10), // Continent
        Constraint::Min(14),    // Capital
        Constraint::Length(12), // Area
        Constraint::Length(15), // Population
    ];

    let header = Row::new(vec![
        Cell::from(" # ").style(DefaultTheme::table_header()),
        Cell::from(t!("col_code").to_string()).style(DefaultTheme::table_header()),
        Cell::from(t!("col_name").to_string()).style(DefaultTheme::table_header()),
        Cell::from(t!("col_continent").to_string()).style(DefaultTheme::table_header()),
        Cell::from(t!("col_capital").to_string()).style(DefaultTheme::table_header()),
        Cell::from(t!("col_area").to_string()).style(DefaultTheme::table_header()),
        Cell::from(t!("col_population").to_string()).style(DefaultTheme::table_header()),
    ])
    .height(1);

    // Keep the selected row visible
    let visible_height = area.height.saturating_sub(3) as usize;
    let scroll_offset = if app.table_selected >= visible_height {
        app.table_selected.saturating_sub(visible_height - 1)
    } else {
        0
    };

    let rows: Vec<Row> = app
        .rows
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(row_idx, country)| {
            let row_style = if active && row_idx == app.table_selected {
                DefaultTheme::selected()
            } else if row_idx % 2 == 1 {
                DefaultTheme::table_row_alt()
            } else {
                DefaultTheme::normal_text()
            };

            let row_num_style = if active && row_idx == app.table_selected {
                DefaultTheme::selected()
            } else {
                DefaultTheme::row_number()
            };

            Row::new(vec![
                Cell::from(format!(
                    "{:>width$} ",
                    row_idx + 1,
                    width = row_num_width as usize - 1
                ))
                .style(row_num_style),
                Cell::from(country.code.clone()).style(row_style),
                Cell::from(fit_cell(&country.name, 24)).style(row_style),
                Cell::from(country.continent.clone()).style(row_style),
                Cell::from(fit_cell(&country.capital, 18)).style(row_style),
                Cell::from(format!("{:>10}", country.area_in_km2)).style(row_style),
                Cell::from(format!("{:>13}", country.population)).style(row_style),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, DefaultTheme::title())),
    );

    f.render_widget(table, area);

    // Draw scrollbar if needed
    if app.rows.len() > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("▲"))
            .end_symbol(Some("▼"))
            .track_symbol(Some("│"));

        let mut scrollbar_state =
            ScrollbarState::new(app.rows.len()).position(app.table_selected);

        f.render_stateful_widget(
            scrollbar,
            area.inner(&Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }

    // Draw position indicator at bottom right
    let pos_text = format!(" {}/{} ", app.table_selected + 1, app.rows.len());
    let pos_len = pos_text.len() as u16;
    let pos_x = area.x + area.width.saturating_sub(pos_len + 2);
    let pos_y = area.y + area.height.saturating_sub(1);

    if pos_x > area.x && pos_y < area.y + area.height {
        let pos_span = Span::styled(pos_text, DefaultTheme::dim_text());
        f.render_widget(Paragraph::new(pos_span), Rect::new(pos_x, pos_y, pos_len, 1));
    }
}

/// Draw the stats tab (aggregates for the current view)
fn draw_table_stats(f: &mut Frame, app: &App, area: Rect, active: bool) {
    let border_style = if active {
        DefaultTheme::active_border()
    } else {
        DefaultTheme::inactive_border()
    };

    let language = app.view_language();

    // Build stats text with aligned labels
    let labels = [
        t!("stats_countries").to_string(),
        t!("stats_total_population").to_string(),
        t!("stats_total_area").to_string(),
        t!("stats_most_populous").to_string(),
    ];
    let max_label_len = labels.iter().map(|l| l.trim().len()).max().unwrap_or(0);

    let pad_label = |label: &str| -> String {
        let trimmed = label.trim();
        format!("  {:<width$}  ", trimmed, width = max_label_len)
    };

    let most_populous = app
        .most_populous()
        .map(|country| country.name.clone())
        .unwrap_or_else(|| "—".to_string());

    let stats_lines: Vec<Line> = vec![
        Line::from(""),
        Line::from(Span::styled(app.subtitle(), DefaultTheme::info())),
        Line::from(""),
        Line::from(vec![
            Span::styled(pad_label(&labels[0]), DefaultTheme::dim_text()),
            Span::styled(format!("{}", app.rows.len()), DefaultTheme::info()),
        ]),
        Line::from(vec![
            Span::styled(pad_label(&labels[1]), DefaultTheme::dim_text()),
            Span::styled(
                format_number_for_language(app.total_population(), language),
                DefaultTheme::info(),
            ),
        ]),
        Line::from(vec![
            Span::styled(pad_label(&labels[2]), DefaultTheme::dim_text()),
            Span::styled(
                format!(
                    "{} km²",
                    format_number_for_language(app.total_area(), language)
                ),
                DefaultTheme::normal_text(),
            ),
        ]),
        Line::from(vec![
            Span::styled(pad_label(&labels[3]), DefaultTheme::dim_text()),
            Span::styled(most_populous, DefaultTheme::success()),
        ]),
    ];

    let stats_widget = Paragraph::new(stats_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(
                format!(" {} ", t!("stats_title")),
                DefaultTheme::title(),
            )),
    );

    f.render_widget(stats_widget, area);
}

/// Truncate a value to a display width, appending an ellipsis when cut
fn fit_cell(value: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(value) <= max_width {
        return value.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        width += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_cell_leaves_short_values_alone() {
        assert_eq!(fit_cell("Canada", 10), "Canada");
    }

    #[test]
    fn fit_cell_truncates_by_display_width() {
        let fitted = fit_cell("South Africa", 8);
        assert!(UnicodeWidthStr::width(fitted.as_str()) <= 8);
        assert!(fitted.ends_with('…'));

        // Wide CJK characters count double
        let fitted = fit_cell("アフガニスタン", 6);
        assert!(UnicodeWidthStr::width(fitted.as_str()) <= 6);
    }
}
