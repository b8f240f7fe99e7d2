//! UI module for rendering the TUI

mod components;
mod errors;
mod forms;
mod layout;
mod text;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    if let Some(notice) = &app.state.notice {
        components::render_notice_dialog(frame, notice);
    }
}
