//! Main TUI application state and logic

use crate::calculator::layout::{button_at, COLUMNS, EVALUATE, CLEAR, ROWS};
use crate::calculator::{Calculator, Outcome};
use crate::evaluator::Value;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::debug;

use super::panes::{self, ButtonArea, INVALID_INPUT};

/// Largest area the calculator occupies; the rest of the terminal is blank.
const MAX_WIDTH: u16 = 60;
const MAX_HEIGHT: u16 = 26;

/// The main application state
pub struct App {
    /// The controller owning the input text
    pub calculator: Calculator,

    /// Keyboard-selected button as (row, col) in the layout table
    pub focus: (usize, usize),

    /// Button cells from the last render, for mouse hit testing
    pub button_areas: Vec<ButtonArea>,

    /// Message of the open error popup, if any
    pub error_popup: Option<&'static str>,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        App {
            calculator: Calculator::new(),
            focus: (1, 0),
            button_areas: Vec::new(),
            error_popup: None,
            status_message: String::from("Ready!"),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Block until the next event; every event is handled to
            // completion before the next redraw.
            let event = event::read()?;
            self.handle_event(event);
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = panes::popup::centered(frame.area(), MAX_WIDTH, MAX_HEIGHT);

        // Entry (top) | Keypad | Status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        panes::render_display_pane(
            frame,
            chunks[0],
            self.calculator.text(),
            self.error_popup.is_some(),
        );

        self.button_areas = panes::render_keypad_pane(frame, chunks[1], self.focus);

        panes::render_status_bar(
            frame,
            chunks[2],
            &self.status_message,
            self.error_popup.is_some(),
        );

        if let Some(message) = self.error_popup {
            panes::render_error_popup(frame, size, message);
        }
    }

    /// Dispatch a terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            self.should_quit = true;
            return;
        }

        // The popup is modal: the key only dismisses it
        if self.error_popup.take().is_some() {
            self.status_message = String::from("Ready!");
            return;
        }

        // Chords are not text; only the quit chords above do anything
        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        match key.code {
            KeyCode::Char(_) if chord => {}
            KeyCode::Enter | KeyCode::Char('=') => self.press(EVALUATE),
            KeyCode::Esc => self.press(CLEAR),
            KeyCode::Backspace => {
                self.calculator.backspace();
                self.status_message = String::from("Editing");
            }
            KeyCode::Up => self.move_focus(-1, 0),
            KeyCode::Down => self.move_focus(1, 0),
            KeyCode::Left => self.move_focus(0, -1),
            KeyCode::Right => self.move_focus(0, 1),
            KeyCode::Char(' ') => {
                if let Some(button) = button_at(self.focus.0, self.focus.1) {
                    self.press(button.label);
                }
            }
            KeyCode::Char(c) => {
                // Typing goes straight into the entry field
                let mut buf = [0u8; 4];
                self.calculator.append(c.encode_utf8(&mut buf));
                self.status_message = String::from("Editing");
            }
            _ => {}
        }
    }

    /// Handle mouse events: a left click presses the button under it
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }

        if self.error_popup.take().is_some() {
            self.status_message = String::from("Ready!");
            return;
        }

        if let Some(button) = panes::hit_test(&self.button_areas, mouse.column, mouse.row) {
            self.focus = (button.row, button.col);
            self.press(button.label);
        }
    }

    /// Move the keypad focus, clamped to the button rows
    fn move_focus(&mut self, d_row: isize, d_col: isize) {
        let row = self.focus.0.saturating_add_signed(d_row).clamp(1, ROWS - 1);
        let col = self.focus.1.saturating_add_signed(d_col).min(COLUMNS - 1);
        self.focus = (row, col);
    }

    /// Send a button label to the calculator and reflect the outcome
    fn press(&mut self, label: &str) {
        match self.calculator.press(label) {
            Outcome::Edited => {
                self.status_message = if self.calculator.text().is_empty() {
                    String::from("Cleared")
                } else {
                    String::from("Editing")
                };
            }
            Outcome::Evaluated(value) => {
                self.status_message = match value {
                    Value::Real(_) => String::from("Result"),
                    Value::Symbolic(_) => String::from("Symbolic result"),
                };
            }
            Outcome::Rejected(err) => {
                debug!(error = %err, "showing error popup");
                self.status_message = err.to_string();
                self.error_popup = Some(INVALID_INPUT);
            }
        }
    }
}
