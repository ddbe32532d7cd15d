//! TUI pane rendering modules
//!
//! - [`display`]: The entry field holding the input text
//! - [`keypad`]: The button grid, plus mouse hit testing
//! - [`status`]: Status bar with keybindings and the last message
//! - [`popup`]: The modal "Invalid input" notification
//!
//! Each module exports a `render_*` function that draws into a given area.
//! Only the keypad returns anything: the cell areas it drew, which the app
//! keeps for mouse clicks.

pub mod display;
pub mod keypad;
pub mod popup;
pub mod status;

pub use display::render_display_pane;
pub use keypad::{hit_test, render_keypad_pane, ButtonArea};
pub use popup::{render_error_popup, INVALID_INPUT};
pub use status::render_status_bar;
