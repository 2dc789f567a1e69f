pub mod add_modal;
pub mod header;
pub mod help;
pub mod palette_detail;
pub mod palette_list;
pub mod root;
pub mod status_bar;

use crate::palette::{hex, Color as PaletteColor};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Terminal color for a palette entry; malformed hex renders as black.
pub fn swatch_color(color: &PaletteColor) -> Color {
    let [r, g, b] = color.rgb().unwrap_or([0, 0, 0]);
    Color::Rgb(r, g, b)
}

/// Filled swatch with text that stays readable on top of it.
pub fn swatch_style(color: &PaletteColor) -> Style {
    let fg = if hex::is_light(&color.hex) {
        Color::Rgb(30, 30, 30)
    } else {
        Color::Rgb(255, 255, 255)
    };
    Style::default().bg(swatch_color(color)).fg(fg)
}

/// A `width` x `height` box centered in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

pub fn truncate_str(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    let char_count: usize = s.chars().count();
    if char_count <= max_len {
        s.to_string()
    } else if max_len > 3 {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    } else {
        s.chars().take(max_len).collect()
    }
}
