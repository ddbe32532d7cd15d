//! Entry field rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the entry field showing the current input text.
///
/// Text wider than the field is clipped from the left so the end, where
/// presses append, stays visible.
pub fn render_display_pane(frame: &mut Frame, area: Rect, text: &str, showing_error: bool) {
    let border_style = if showing_error {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(" Calculator ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    // Borders + padding
    let width = area.width.saturating_sub(4) as usize;
    let visible = tail(text, width);

    let line = Line::from(vec![
        Span::styled(visible, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("▏", Style::default().fg(DEFAULT_THEME.primary)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

/// The last `width - 1` characters of `text`, leaving room for the cursor.
fn tail(text: &str, width: usize) -> &str {
    let keep = width.saturating_sub(1);
    let count = text.chars().count();
    if count <= keep {
        return text;
    }
    match text.char_indices().nth(count - keep) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}
