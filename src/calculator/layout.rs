//! Fixed button grid
//!
//! Row 0 belongs to the entry field, which spans all [`COLUMNS`]; buttons
//! occupy rows 1 through [`ROWS`] - 1.

/// Number of grid rows, including the entry row.
pub const ROWS: usize = 7;
/// Number of grid columns.
pub const COLUMNS: usize = 5;

/// Label for the clear button
pub const CLEAR: &str = "C";
/// Label for the evaluate button
pub const EVALUATE: &str = "=";

/// What pressing a button does to the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Append,
    Clear,
    Evaluate,
}

impl ButtonAction {
    pub fn of(label: &str) -> Self {
        match label {
            CLEAR => ButtonAction::Clear,
            EVALUATE => ButtonAction::Evaluate,
            _ => ButtonAction::Append,
        }
    }
}

/// A button's label and grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDef {
    pub label: &'static str,
    pub row: usize,
    pub col: usize,
}

impl ButtonDef {
    const fn new(label: &'static str, row: usize, col: usize) -> Self {
        ButtonDef { label, row, col }
    }

    pub fn action(&self) -> ButtonAction {
        ButtonAction::of(self.label)
    }
}

#[rustfmt::skip]
pub const BUTTONS: [ButtonDef; 30] = [
    ButtonDef::new("7", 1, 0), ButtonDef::new("8", 1, 1), ButtonDef::new("9", 1, 2), ButtonDef::new("/", 1, 3), ButtonDef::new("C", 1, 4),
    ButtonDef::new("4", 2, 0), ButtonDef::new("5", 2, 1), ButtonDef::new("6", 2, 2), ButtonDef::new("*", 2, 3), ButtonDef::new("x^2", 2, 4),
    ButtonDef::new("1", 3, 0), ButtonDef::new("2", 3, 1), ButtonDef::new("3", 3, 2), ButtonDef::new("-", 3, 3), ButtonDef::new("x^3", 3, 4),
    ButtonDef::new("0", 4, 0), ButtonDef::new(".", 4, 1), ButtonDef::new("+", 4, 2), ButtonDef::new("=", 4, 3), ButtonDef::new("sqrt", 4, 4),
    ButtonDef::new("frac", 5, 0), ButtonDef::new("sin", 5, 1), ButtonDef::new("cos", 5, 2), ButtonDef::new("tan", 5, 3), ButtonDef::new("cot", 5, 4),
    ButtonDef::new("(", 6, 0), ButtonDef::new(")", 6, 1), ButtonDef::new("log", 6, 2), ButtonDef::new("pi", 6, 3), ButtonDef::new("e", 6, 4),
];

/// The button at a grid position, if any
pub fn button_at(row: usize, col: usize) -> Option<&'static ButtonDef> {
    BUTTONS.iter().find(|b| b.row == row && b.col == col)
}

/// The button with the given label, if any
pub fn find(label: &str) -> Option<&'static ButtonDef> {
    BUTTONS.iter().find(|b| b.label == label)
}
