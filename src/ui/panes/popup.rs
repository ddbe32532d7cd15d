//! Modal error notification

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Fixed message shown when evaluation fails
pub const INVALID_INPUT: &str = "Invalid input";

const POPUP_WIDTH: u16 = 30;
const POPUP_HEIGHT: u16 = 5;

/// A rectangle of at most `width` x `height` centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render the error popup over whatever is already drawn.
pub fn render_error_popup(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);

    let block = Block::default()
        .title(" Error ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(DEFAULT_THEME.bg));

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center),
        popup,
    );
}
