//! Layout and status bar

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the main area and a one-row status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let status_height = 1.min(area.height);
    let main = Rect {
        height: area.height - status_height,
        ..area
    };
    let status = Rect {
        y: area.y + main.height,
        height: status_height,
        ..area
    };
    (main, status)
}

/// Key hints for the current focus
fn get_hints(app: &App) -> String {
    if app.state.has_notice() {
        return "Enter/Esc: dismiss".to_string();
    }
    let mut hints = String::from("Tab: next field  ");
    if app.state.form.is_buttons_row_active() {
        hints.push_str("↑/↓: select  Enter: press  ");
    }
    hints.push_str(&format!("{SUBMIT_SHORTCUT}: submit  {RESET_SHORTCUT}: reset  Esc: quit"));
    hints
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.state.status_message {
        let color = if app.state.form.errors.is_some() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
