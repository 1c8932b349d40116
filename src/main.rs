//! Country TUI - Terminal explorer for world country data

use anyhow::Result;
use country_tui::app::App;
use country_tui::config::AppConfig;
use country_tui::data::Dataset;
use country_tui::init_locale;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use std::io;

fn main() -> Result<()> {
    let config = AppConfig::load();
    init_locale(config.locale.as_deref());

    // Load the dataset before touching the terminal so load errors print normally
    let dataset = Dataset::load(config.dataset.as_deref())?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(dataset, config.start_language.as_deref());
    let result = app.run(&mut terminal);

    // Restore the terminal even if the app loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}
