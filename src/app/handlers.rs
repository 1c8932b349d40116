//! Event handlers for the application

use crate::app::{ActivePanel, App, TableTab};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use std::time::Duration;

impl App {
    /// Main event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| crate::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear transient messages on any keypress
        if key.code != KeyCode::Enter {
            self.message = None;
        }

        // Quit shortcuts - always work
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // Help toggle
        if key.code == KeyCode::F(1) || key.code == KeyCode::Char('?') {
            self.show_help = !self.show_help;
            return;
        }

        if self.show_help {
            if key.code == KeyCode::Esc {
                self.show_help = false;
            }
            return;
        }

        // Export shortcuts work from any panel
        match (key.code, key.modifiers) {
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.export_view_csv();
                return;
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
                self.export_view_json();
                return;
            }
            _ => {}
        }

        // Tab switches panels
        if key.code == KeyCode::Tab {
            self.active_panel = match self.active_panel {
                ActivePanel::Menu => ActivePanel::Table,
                ActivePanel::Table => ActivePanel::Menu,
            };
            return;
        }

        // Table tab selection
        if self.active_panel == ActivePanel::Table {
            match key.code {
                KeyCode::Char('1') => {
                    self.table_tab = TableTab::Data;
                    return;
                }
                KeyCode::Char('2') => {
                    self.table_tab = TableTab::Stats;
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Home | KeyCode::Char('g') => self.scroll_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll_bottom(),
            KeyCode::Enter => {
                if self.active_panel == ActivePanel::Menu {
                    self.apply_selected_entry();
                }
            }
            _ => {}
        }
    }

    /// Handle mouse input (scroll events)
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_up(3); // Scroll 3 lines at a time
            }
            MouseEventKind::ScrollDown => {
                self.scroll_down(3); // Scroll 3 lines at a time
            }
            _ => {}
        }
    }

    /// Scroll up in the current panel
    pub(crate) fn scroll_up(&mut self, amount: usize) {
        match self.active_panel {
            ActivePanel::Menu => {
                self.menu_selected = self.menu_selected.saturating_sub(amount);
            }
            ActivePanel::Table => {
                self.table_selected = self.table_selected.saturating_sub(amount);
            }
        }
    }

    /// Scroll down in the current panel
    pub(crate) fn scroll_down(&mut self, amount: usize) {
        match self.active_panel {
            ActivePanel::Menu => {
                let max = self.menu.len().saturating_sub(1);
                self.menu_selected = (self.menu_selected + amount).min(max);
            }
            ActivePanel::Table => {
                let max = self.rows.len().saturating_sub(1);
                self.table_selected = (self.table_selected + amount).min(max);
            }
        }
    }

    /// Jump to the first entry of the current panel
    fn scroll_top(&mut self) {
        match self.active_panel {
            ActivePanel::Menu => self.menu_selected = 0,
            ActivePanel::Table => self.table_selected = 0,
        }
    }

    /// Jump to the last entry of the current panel
    fn scroll_bottom(&mut self) {
        match self.active_panel {
            ActivePanel::Menu => self.menu_selected = self.menu.len().saturating_sub(1),
            ActivePanel::Table => self.table_selected = self.rows.len().saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;

    fn app() -> App {
        App::new(Dataset::embedded().unwrap(), None)
    }

    #[test]
    fn scrolling_is_clamped_to_bounds() {
        let mut app = app();
        app.active_panel = ActivePanel::Menu;
        app.scroll_up(5);
        assert_eq!(app.menu_selected, 0);
        app.scroll_down(1000);
        assert_eq!(app.menu_selected, app.menu.len() - 1);

        app.active_panel = ActivePanel::Table;
        app.scroll_down(1000);
        assert_eq!(app.table_selected, app.rows.len() - 1);
        app.scroll_up(1000);
        assert_eq!(app.table_selected, 0);
    }

    #[test]
    fn applying_a_view_resets_the_table_cursor() {
        let mut app = app();
        app.active_panel = ActivePanel::Table;
        app.scroll_down(5);
        assert_eq!(app.table_selected, 5);

        app.menu_selected = app.menu.len() - 2; // Americas >= 1M km²
        app.apply_selected_entry();
        assert_eq!(app.table_selected, 0);
        assert!(app.rows.iter().all(|row| row.continent == "Americas"));
    }
}
