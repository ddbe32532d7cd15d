//! Status bar rendering with keybindings and the last message

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            " CALC ",
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(DEFAULT_THEME.bg).fg(if is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled("Enter", key_style),
        Span::styled(" eval  ", hint_style),
        Span::styled("Esc", key_style),
        Span::styled(" clear  ", hint_style),
        Span::styled("←↑↓→/Space", key_style),
        Span::styled(" keypad  ", hint_style),
        Span::styled("^Q", key_style),
        Span::styled(" quit ", hint_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
