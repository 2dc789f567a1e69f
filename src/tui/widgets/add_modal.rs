//! Manual palette entry modal

use crate::app::state::{AppState, FormField};
use crate::palette::{hex, PALETTE_SIZE};
use crate::tui::theme::{get_theme, Theme};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::centered_rect;

const WIDTH: u16 = 56;
const HEIGHT: u16 = 13 + PALETTE_SIZE as u16;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let text = state.session.language.text();
    let modal = centered_rect(WIDTH, HEIGHT, area);

    frame.render_widget(Clear, modal);
    let block = theme
        .titled_panel(
            format!(" {} {} ", theme.icons.add, text.add_palette),
            theme.colors.accent,
        )
        .title_style(
            Style::default()
                .fg(theme.colors.accent)
                .add_modifier(Modifier::BOLD),
        );

    let mut lines = vec![
        label(text.palette_name, &theme),
        field_line(state, FormField::Name, &theme),
        Line::default(),
        label(text.palette_desc, &theme),
        field_line(state, FormField::Description, &theme),
        Line::default(),
        label(text.color_codes, &theme),
    ];
    for i in 0..PALETTE_SIZE {
        lines.push(color_line(state, i, text.invalid_hex, &theme));
    }
    lines.push(Line::default());

    let valid = state.form.is_valid();
    let create_style = if valid {
        Style::default()
            .fg(theme.colors.bg_primary)
            .bg(theme.colors.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.colors.border)
    };
    lines.push(Line::from(vec![
        Span::styled(format!(" Enter {} ", text.create), create_style),
        Span::raw("   "),
        Span::styled(
            format!("Esc {}", text.cancel),
            Style::default().fg(theme.colors.fg_secondary),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).block(block), modal);
}

fn label(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(theme.colors.fg_secondary),
    ))
}

fn focus_marker(state: &AppState, field: FormField, theme: &Theme) -> Span<'static> {
    if state.form_field == field {
        Span::styled(
            format!("{} ", theme.icons.selected),
            Style::default().fg(theme.colors.accent),
        )
    } else {
        Span::raw("  ")
    }
}

fn field_line(state: &AppState, field: FormField, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        focus_marker(state, field, theme),
        Span::styled(
            state.form_value(field).to_string(),
            Style::default().fg(theme.colors.fg_primary),
        ),
    ];
    if state.form_field == field {
        spans.push(Span::styled(theme.icons.cursor, Style::default().fg(theme.colors.accent)));
    }
    Line::from(spans)
}

fn color_line(state: &AppState, index: usize, invalid: &'static str, theme: &Theme) -> Line<'static> {
    let field = FormField::Color(index);
    let value = state.form_value(field).to_string();

    let preview = match hex::to_rgb(&value) {
        Some([r, g, b]) => Span::styled("    ", Style::default().bg(Color::Rgb(r, g, b))),
        None => Span::styled("····", Style::default().fg(theme.colors.border)),
    };

    let mut spans = vec![
        focus_marker(state, field, theme),
        preview,
        Span::raw(" "),
        Span::styled(format!("{value:<7}"), Style::default().fg(theme.colors.fg_primary)),
    ];
    if state.form_field == field {
        spans.push(Span::styled(theme.icons.cursor, Style::default().fg(theme.colors.accent)));
    }
    if !value.is_empty() && !state.form.is_color_valid(index) {
        spans.push(Span::styled(
            format!("  {invalid}"),
            Style::default().fg(theme.colors.error),
        ));
    }
    Line::from(spans)
}
