//! Trending / My Palettes tabs with the browsable palette rows

use crate::app::state::{AppState, HomeFocus};
use crate::palette::Palette;
use crate::session::Tab;
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{swatch_color, truncate_str};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = get_theme();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    render_tabs(frame, state, &theme, layout[0]);

    let list_area = layout[1];
    state.update_scroll(list_area.height as usize);

    let session = &state.session;
    let text = session.language.text();
    let palettes = state.visible();

    if palettes.is_empty() {
        let empty = Paragraph::new(Line::from(text.no_history))
            .style(Style::default().fg(theme.colors.fg_secondary));
        frame.render_widget(empty, list_area);
        return;
    }

    let focused = state.home_focus == HomeFocus::Browse;
    let show_time = session.active_tab == Tab::History;
    let name_width = (list_area.width as usize).saturating_sub(40).max(8);

    let items: Vec<ListItem> = palettes
        .iter()
        .skip(state.scroll_offset)
        .take(list_area.height as usize)
        .map(|p| {
            row(
                p,
                session.is_favorite(&p.id),
                session.is_editing,
                show_time,
                name_width,
                &theme,
            )
        })
        .collect();

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.selected.saturating_sub(state.scroll_offset)));
    }

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(theme.colors.bg_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(format!("{} ", theme.icons.selected));

    frame.render_stateful_widget(list, list_area, &mut list_state);

    // Scroll position indicator
    let total = palettes.len();
    if total > list_area.height as usize {
        let pos_text = format!("{}/{}", state.selected + 1, total);
        let pos_len = pos_text.len() as u16;
        let pos_x = list_area.x + list_area.width.saturating_sub(pos_len);
        frame.render_widget(
            Paragraph::new(pos_text).style(Style::default().fg(theme.colors.fg_secondary)),
            Rect::new(pos_x, list_area.y, pos_len, 1),
        );
    }
}

fn render_tabs(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let session = &state.session;
    let text = session.language.text();
    let icons = &theme.icons;

    let tabs = [
        (format!("{} {}", icons.trending, text.trending), Tab::Trending),
        (format!("{} {}", icons.history, text.my_palettes), Tab::History),
    ];

    let mut spans: Vec<Span> = Vec::new();
    for (label, tab) in tabs {
        let selected = session.active_tab == tab;
        let style = if selected {
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.colors.fg_secondary)
        };
        spans.push(Span::styled("[", style));
        spans.push(Span::styled(label, style));
        spans.push(Span::styled("]  ", style));
    }

    let hint = Style::default().fg(theme.colors.fg_secondary);
    spans.push(Span::styled(format!("{} {} (a)", icons.add, text.add_palette), hint));
    if session.active_tab == Tab::History {
        let label = if session.is_editing { text.done } else { text.adjust };
        let style = if session.is_editing {
            Style::default().fg(theme.colors.accent)
        } else {
            hint
        };
        spans.push(Span::styled(format!("   {} {} (e)", icons.edit, label), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn row(
    palette: &Palette,
    favorite: bool,
    editing: bool,
    show_time: bool,
    name_width: usize,
    theme: &Theme,
) -> ListItem<'static> {
    let icons = &theme.icons;
    let mut spans = Vec::new();

    if editing {
        spans.push(Span::styled(
            format!("{} ", icons.grip),
            Style::default().fg(theme.colors.fg_secondary),
        ));
    }

    let (marker, marker_style) = if favorite {
        (icons.favorite, Style::default().fg(theme.colors.favorite))
    } else {
        (icons.unfavorite, Style::default().fg(theme.colors.border))
    };
    spans.push(Span::styled(format!("{marker} "), marker_style));

    for color in &palette.colors {
        spans.push(Span::styled("██", Style::default().fg(swatch_color(color))));
    }

    spans.push(Span::styled(
        format!("  {:<width$}", truncate_str(&palette.name, name_width), width = name_width),
        Style::default().fg(theme.colors.fg_primary),
    ));

    if show_time {
        spans.push(Span::styled(
            format!(" {}", palette.created_label()),
            Style::default().fg(theme.colors.fg_secondary),
        ));
    }

    if editing {
        spans.push(Span::styled(
            format!("  K/J  d {}", icons.delete),
            Style::default().fg(theme.colors.fg_secondary),
        ));
    }

    ListItem::new(Line::from(spans))
}
