//! UI rendering

mod layout;
mod theme;
mod widgets;

pub use layout::{draw_help_popup, draw_layout};
pub use theme::DefaultTheme;
pub use widgets::{draw_countries_table, draw_menu};

use crate::app::App;
use ratatui::prelude::*;

/// Draw the whole frame
pub fn draw(f: &mut Frame, app: &mut App) {
    draw_layout(f, app, f.size());

    if app.show_help {
        draw_help_popup(f, f.size());
    }
}
