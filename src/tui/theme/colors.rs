//! Interface colors - monochrome chrome so the palettes carry the color

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub bg_primary: Color,
    pub bg_highlight: Color,
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub favorite: Color,
    pub error: Color,
}

impl ThemeColors {
    pub const MONO: Self = Self {
        bg_primary: Color::Rgb(0, 0, 0),          // #000000
        bg_highlight: Color::Rgb(48, 48, 48),    // #303030
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        accent: Color::Rgb(255, 255, 255),       // #ffffff
        accent_alt: Color::Rgb(200, 200, 200),   // #c8c8c8
        border: Color::Rgb(64, 64, 64),          // #404040
        favorite: Color::Rgb(250, 204, 21),      // #facc15
        error: Color::Rgb(248, 113, 113),        // #f87171
    };
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::MONO
    }
}
