//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, View};
use crate::tui::theme::get_theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::{add_modal, header, help, palette_detail, palette_list, status_bar};

/// Main layout structure:
/// ┌─────────────────────────────────────────────┐
/// │ Title · hero                                │
/// │ ╭ prompt ────────────────────────────────╮  │
/// │ status / error                              │
/// ├─────────────────────────────────────────────┤
/// │  Tabs + palette list   or   palette detail  │
/// ├─────────────────────────────────────────────┤
/// │ hints / toast                      language │
/// └─────────────────────────────────────────────┘
/// The add form and help render as overlays on top.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(root);

    header::render(frame, state, rows[0]);
    render_main_content(frame, state, rows[1]);
    status_bar::render(frame, state, rows[2]);

    if state.view() == View::AddForm {
        add_modal::render(frame, state, root);
    }
    if state.show_help {
        help::render(frame, state, root);
    }
}

fn render_main_content(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    let main = theme.panel(theme.colors.border);
    let inner = main.inner(area);
    frame.render_widget(main, area);

    match state.view() {
        View::Detail => palette_detail::render(frame, state, inner),
        View::Home | View::AddForm => palette_list::render(frame, state, inner),
    }
}
