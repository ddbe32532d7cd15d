//! Button grid rendering and hit testing

use crate::calculator::layout::{button_at, ButtonAction, ButtonDef, COLUMNS, ROWS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen area occupied by one button, recorded for mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonArea {
    pub area: Rect,
    pub button: &'static ButtonDef,
}

/// Find the button under a terminal cell.
pub fn hit_test(areas: &[ButtonArea], column: u16, row: u16) -> Option<&'static ButtonDef> {
    areas
        .iter()
        .find(|b| {
            column >= b.area.x
                && column < b.area.x.saturating_add(b.area.width)
                && row >= b.area.y
                && row < b.area.y.saturating_add(b.area.height)
        })
        .map(|b| b.button)
}

/// Split `area` into the button grid.
pub fn button_areas(area: Rect) -> Vec<ButtonArea> {
    let button_rows = (ROWS - 1) as u32;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..button_rows).map(|_| Constraint::Ratio(1, button_rows)))
        .split(area);

    let mut areas = Vec::with_capacity((ROWS - 1) * COLUMNS);
    for (i, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..COLUMNS).map(|_| Constraint::Ratio(1, COLUMNS as u32)))
            .split(*row_area);

        for (col, cell) in cols.iter().enumerate() {
            // Row 0 of the layout table is the entry field
            if let Some(button) = button_at(i + 1, col) {
                areas.push(ButtonArea {
                    area: *cell,
                    button,
                });
            }
        }
    }
    areas
}

fn label_color(button: &ButtonDef) -> Color {
    match button.action() {
        ButtonAction::Clear => DEFAULT_THEME.error,
        ButtonAction::Evaluate => DEFAULT_THEME.success,
        ButtonAction::Append => {
            if button.label.chars().all(|c| c.is_ascii_digit() || c == '.') {
                DEFAULT_THEME.digit
            } else if button.label.chars().any(|c| c.is_ascii_alphabetic()) {
                DEFAULT_THEME.function
            } else {
                DEFAULT_THEME.operator
            }
        }
    }
}

/// Render the keypad and return the areas it drew, for hit testing.
///
/// `focused` is the (row, col) of the keyboard-selected button.
pub fn render_keypad_pane(
    frame: &mut Frame,
    area: Rect,
    focused: (usize, usize),
) -> Vec<ButtonArea> {
    let areas = button_areas(area);

    for cell in &areas {
        let is_focused = (cell.button.row, cell.button.col) == focused;

        let (border_style, bg) = if is_focused {
            (
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .add_modifier(Modifier::BOLD),
                DEFAULT_THEME.button_focused_bg,
            )
        } else {
            (
                Style::default().fg(DEFAULT_THEME.border_normal),
                DEFAULT_THEME.button_bg,
            )
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(bg));

        // Vertically center the label inside the border
        let inner_height = cell.area.height.saturating_sub(2);
        let top_pad = "\n".repeat((inner_height.saturating_sub(1) / 2) as usize);

        let paragraph = Paragraph::new(format!("{}{}", top_pad, cell.button.label))
            .block(block)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(label_color(cell.button))
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(paragraph, cell.area);
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_covers_every_button() {
        let areas = button_areas(Rect::new(0, 0, 50, 18));
        assert_eq!(areas.len(), 30);
        assert_eq!(areas[0].button.label, "7");
        assert_eq!(areas[0].area, Rect::new(0, 0, 10, 3));
        assert_eq!(areas[29].button.label, "e");
        assert_eq!(areas[29].area, Rect::new(40, 15, 10, 3));
    }

    #[test]
    fn test_hit_test() {
        let areas = button_areas(Rect::new(0, 0, 50, 18));
        assert_eq!(hit_test(&areas, 0, 0).map(|b| b.label), Some("7"));
        assert_eq!(hit_test(&areas, 45, 4).map(|b| b.label), Some("x^2"));
        assert_eq!(hit_test(&areas, 35, 10).map(|b| b.label), Some("="));
        assert_eq!(hit_test(&areas, 50, 0), None);
        assert_eq!(hit_test(&areas, 0, 18), None);
    }
}
