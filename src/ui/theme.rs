use crate::analysis::ScoreLabel;
use ratatui::style::Color;

pub struct Theme {
    pub card_bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Purple
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar_track: Color,
    pub placeholder: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    card_bg: Color::Rgb(250, 250, 252),
    fg: Color::Rgb(30, 30, 46),
    primary: Color::Rgb(29, 78, 216),    // Blue for headings
    secondary: Color::Rgb(126, 34, 206), // Purple for result title
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(34, 197, 94),
    error: Color::Rgb(220, 38, 38),
    warning: Color::Rgb(234, 179, 8),
    border_focused: Color::Rgb(59, 130, 246), // Blue ring while typing
    border_normal: Color::Rgb(209, 213, 219),
    status_bg: Color::Rgb(50, 50, 70),
    bar_track: Color::Rgb(229, 231, 235),
    placeholder: Color::Rgb(156, 163, 175),
};

/// Badge and bar color for a score class
pub fn label_color(label: ScoreLabel) -> Color {
    match label {
        ScoreLabel::Positive => DEFAULT_THEME.success,
        ScoreLabel::Negative => DEFAULT_THEME.error,
        ScoreLabel::Neutral => Color::Rgb(107, 114, 128),
        ScoreLabel::Mixed => DEFAULT_THEME.warning,
    }
}
