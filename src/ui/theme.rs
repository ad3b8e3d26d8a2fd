use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub panel_bg: Color,
    pub highlight: Color,    // Yellow for highlighted cells
    pub highlight_fg: Color, // Text drawn on top of a highlight
    pub bar: Color,          // Teal for sort bars
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    number: Color::Rgb(250, 179, 135),         // Orange for values
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    panel_bg: Color::Rgb(50, 50, 70),          // Slightly lighter BG for bars
    highlight: Color::Rgb(249, 226, 175),
    highlight_fg: Color::Rgb(30, 30, 46),
    bar: Color::Rgb(148, 226, 213),
};
