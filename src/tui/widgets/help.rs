//! Help overlay showing keybindings

use crate::app::state::AppState;
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;

pub fn render(frame: &mut Frame, _state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let modal = centered_rect(84, 24, area);

    frame.render_widget(Clear, modal);
    let block = theme.titled_panel(format!(" {} Keybinds ", icons.help), theme.colors.border);

    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let left_content = vec![
        section_header("Mood prompt", &theme),
        keybind("Enter", "Generate palette", &theme),
        keybind("Ctrl+u", "Clear input", &theme),
        keybind("Tab / Esc", "Browse palettes", &theme),
        Line::default(),
        section_header("Browse", &theme),
        keybind("j / k", "Move down / up", &theme),
        keybind("g / G", "Top / bottom", &theme),
        keybind("Enter", "Open palette", &theme),
        keybind("Tab", "Trending / My Palettes", &theme),
        keybind("f", "Toggle favorite", &theme),
        keybind("a", "Add palette by hand", &theme),
        keybind("e", "Adjust (My Palettes)", &theme),
        keybind("K / J", "Move up / down (adjust)", &theme),
        keybind("d / Del", "Delete (adjust)", &theme),
        keybind("/ or i", "Back to prompt", &theme),
    ];
    frame.render_widget(
        Paragraph::new(left_content).wrap(Wrap { trim: false }),
        cols[0],
    );

    let right_content = vec![
        section_header("Palette", &theme),
        keybind("1-5", "Copy hex code", &theme),
        keybind("i", "Edit image keywords", &theme),
        keybind("v / Enter", "Generate mood image", &theme),
        keybind("x", "Discard mood image", &theme),
        keybind("s", "Export PNG", &theme),
        keybind("f", "Toggle favorite", &theme),
        keybind("Esc", "Back", &theme),
        Line::default(),
        section_header("General", &theme),
        keybind("L / F2", "Cycle language", &theme),
        keybind("r", "Reset to home", &theme),
        keybind("? / F1", "Toggle this help", &theme),
        keybind("q", "Quit", &theme),
        keybind("Ctrl+c", "Quit from anywhere", &theme),
    ];
    frame.render_widget(
        Paragraph::new(right_content).wrap(Wrap { trim: false }),
        cols[1],
    );
}

fn section_header(title: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.colors.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:12}", key),
            Style::default()
                .fg(theme.colors.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.colors.fg_primary)),
    ])
}
