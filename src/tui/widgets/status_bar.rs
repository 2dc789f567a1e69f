use crate::app::state::{AppState, HomeFocus, ToastKind, View};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let icons = &theme.icons;
    let language = state.session.language;

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let left = match &state.toast {
        Some(toast) => {
            let (icon, color) = match toast.kind {
                ToastKind::Success => (icons.success, theme.colors.accent),
                ToastKind::Error => (icons.error, theme.colors.error),
            };
            Line::from(Span::styled(
                format!("{icon} {}", toast.message),
                Style::default().fg(color),
            ))
        }
        None => Line::from(Span::styled(
            hints(state),
            Style::default().fg(theme.colors.fg_secondary),
        )),
    };
    frame.render_widget(Paragraph::new(left), cols[0]);

    let right = Paragraph::new(Line::from(Span::styled(
        format!("{} {}", icons.language, language.label()),
        Style::default().fg(theme.colors.accent_alt),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(right, cols[1]);
}

fn hints(state: &AppState) -> &'static str {
    match state.view() {
        View::AddForm => "Tab next field · Enter create · Esc cancel",
        View::Detail if state.editing_keywords => "Enter paint · Esc done",
        View::Detail => "1-5 copy · v paint · s export · Esc back · ? help",
        View::Home => match state.home_focus {
            HomeFocus::Prompt => "Enter generate · Tab browse · F2 language · F1 help",
            HomeFocus::Browse => "Enter open · f favorite · Tab switch · / prompt · ? help · q quit",
        },
    }
}
