//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FormButton, BUTTONS_ROW};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::errors::{draw_errors, errors_height};
use crate::validator::FieldRole;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the contact form with its action sidebar
pub fn draw_contact(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_contact_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Field rects in `FieldRole::ALL` order, and the errors rect below them.
///
/// The errors area is sized first and only clipped when `inner` itself is
/// shorter than the report; the message box takes what is left.
fn form_regions(inner: Rect, errors_rows: u16) -> ([Rect; 5], Rect) {
    let errors_rows = errors_rows.min(inner.height);
    let fields_area = Rect {
        height: inner.height - errors_rows,
        ..inner
    };
    let errors_area = Rect {
        y: inner.y + fields_area.height,
        height: errors_rows,
        ..inner
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // First / last name
            Constraint::Length(3), // Email / mobile
            Constraint::Min(3),    // Message
        ])
        .split(fields_area);
    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };
    let names = halves(rows[0]);
    let contact = halves(rows[1]);

    (
        [names[0], names[1], contact[0], contact[1], rows[2]],
        errors_area,
    )
}

/// Draw the form fields and, below them, the errors area
fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let errors = form.errors.as_ref();

    let inner = area.inner(Margin::new(1, 1));
    let (field_areas, errors_area) = form_regions(inner, errors_height(errors, inner.width));

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (index, role) in FieldRole::ALL.into_iter().enumerate() {
        draw_field(
            frame,
            field_areas[index],
            form.field(role),
            form.active_field_index == index,
        );
    }

    if let Some(report) = errors {
        draw_errors(frame, errors_area, report);
    }
}

/// Draw the action panel sidebar
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_focused = form.active_field_index == BUTTONS_ROW;

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),                // remaining space
        ])
        .split(inner_area);

    for (index, button) in FormButton::ALL.into_iter().enumerate() {
        let accent = match button {
            FormButton::Submit => Color::Green,
            FormButton::Reset => Color::Gray,
        };
        render_action_button(
            frame,
            button_chunks[index],
            button.label(),
            is_focused && form.selected() == button,
            accent,
        );
    }
}
