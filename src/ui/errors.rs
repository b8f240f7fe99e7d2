//! Errors area rendering

use crate::ui::text::wrapped_height;
use crate::validator::{ErrorReport, ERRORS_TARGET};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const BULLET: &str = "• ";

/// Rows the errors area needs at `width` columns, borders included.
///
/// The heading and each bullet are measured wrapped to the inner width.
pub fn errors_height(report: Option<&ErrorReport>, width: u16) -> u16 {
    let Some(report) = report else {
        return 0;
    };
    let inner_width = width.saturating_sub(2) as usize;
    let heading = wrapped_height(ErrorReport::HEADING, inner_width);
    let bullets: usize = report
        .messages()
        .iter()
        .map(|message| wrapped_height(&format!("{BULLET}{message}"), inner_width))
        .sum();
    // borders + heading + blank + bullets
    (2 + heading + 1 + bullets).min(u16::MAX as usize) as u16
}

/// Bold heading followed by one bullet per message, in validation order
pub fn report_lines(report: &ErrorReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            ErrorReport::HEADING,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(report.messages().iter().map(|message| {
        Line::from(vec![
            Span::styled(BULLET, Style::default().fg(Color::Red)),
            Span::raw(message.to_string()),
        ])
    }));
    lines
}

pub fn draw_errors(frame: &mut Frame, area: Rect, report: &ErrorReport) {
    let block = Block::default()
        .title(format!(" {ERRORS_TARGET} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));

    let paragraph = Paragraph::new(report_lines(report))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}
