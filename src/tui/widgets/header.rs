//! Title, mood prompt and generation status

use crate::app::state::{AppState, HomeFocus, View};
use crate::tui::theme::{get_theme, LoadingSpinner};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Rows the header needs: title, prompt box, status line.
pub const HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let session = &state.session;
    let text = session.language.text();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Line::from(vec![
        Span::styled(
            format!("{} {}", theme.icons.palette, text.title),
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", text.hero),
            Style::default().fg(theme.colors.fg_secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), rows[0]);

    let focused = state.view() == View::Home && state.home_focus == HomeFocus::Prompt;
    let border_color = if focused {
        theme.colors.accent
    } else {
        theme.colors.border
    };
    let block = theme.panel(border_color);

    let prompt = if session.prompt.is_empty() {
        Span::styled(text.placeholder, Style::default().fg(theme.colors.fg_secondary))
    } else {
        Span::styled(
            session.prompt.as_str(),
            Style::default().fg(theme.colors.fg_primary),
        )
    };
    let mut spans = vec![prompt];
    if focused && !session.is_generating {
        spans.push(Span::styled(theme.icons.cursor, Style::default().fg(theme.colors.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[1]);

    let status = if session.is_generating {
        Line::from(Span::styled(
            format!("{} {}", LoadingSpinner::frame(state.tick), text.generating),
            Style::default().fg(theme.colors.accent_alt),
        ))
    } else if let Some(err) = &session.error {
        Line::from(Span::styled(
            format!("{} {}", theme.icons.error, err),
            Style::default().fg(theme.colors.error),
        ))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Left), rows[2]);
}
