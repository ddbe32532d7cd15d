use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub digit: Color,
    pub operator: Color,
    pub function: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub button_bg: Color,
    pub button_focused_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    digit: Color::Rgb(205, 214, 244),          // Plain text for digits
    operator: Color::Rgb(250, 179, 135),       // Orange for operators
    function: Color::Rgb(249, 226, 175),       // Yellow for functions and constants
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    button_bg: Color::Rgb(49, 50, 68),
    button_focused_bg: Color::Rgb(69, 71, 90),
};
