//! Look of the chrome around the palettes

pub mod colors;
pub mod icons;

pub use colors::ThemeColors;
pub use icons::{Icons, LoadingSpinner};

use ratatui::style::{Color, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders};

#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ThemeColors,
    pub icons: Icons,
    pub border: border::Set<'static>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            colors: ThemeColors::MONO,
            icons: Icons::nerd(),
            border: border::ROUNDED,
        }
    }

    /// Bordered panel in the theme's border set.
    pub fn panel(&self, border_color: Color) -> Block<'static> {
        Block::default()
            .borders(Borders::ALL)
            .border_set(self.border)
            .border_style(Style::default().fg(border_color))
    }

    /// Panel with an accent-colored title.
    pub fn titled_panel(&self, title: String, border_color: Color) -> Block<'static> {
        self.panel(border_color)
            .title(title)
            .title_style(Style::default().fg(self.colors.accent))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}
