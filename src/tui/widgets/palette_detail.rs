//! Selected palette: swatches, design advice and the mood image panel

use crate::app::state::AppState;
use crate::export::Thumbnail;
use crate::palette::Palette;
use crate::tui::theme::{get_theme, LoadingSpinner, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
    Frame,
};

use super::{swatch_style, truncate_str};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let Some(palette) = state.session.current.as_ref() else {
        return;
    };
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(6),
        ])
        .split(area);

    render_title(frame, state, palette, &theme, rows[0]);
    render_swatches(frame, palette, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[2]);
    render_advice(frame, state, palette, &theme, cols[0]);
    render_image_panel(frame, state, &theme, cols[1]);
}

fn render_title(frame: &mut Frame, state: &AppState, palette: &Palette, theme: &Theme, area: Rect) {
    let text = state.session.language.text();
    let favorite = if state.session.is_favorite(&palette.id) {
        Span::styled(
            format!("{} ", theme.icons.favorite),
            Style::default().fg(theme.colors.favorite),
        )
    } else {
        Span::raw("")
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("← {} (Esc)  ", text.back),
                Style::default().fg(theme.colors.fg_secondary),
            ),
            favorite,
            Span::styled(
                palette.name.clone(),
                Style::default()
                    .fg(theme.colors.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("\"{}\"", palette.description),
            Style::default()
                .fg(theme.colors.fg_secondary)
                .add_modifier(Modifier::ITALIC),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_swatches(frame: &mut Frame, palette: &Palette, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for (i, (color, col)) in palette.colors.iter().zip(cols.iter()).enumerate() {
        let width = col.width as usize;
        let style = swatch_style(color);
        let lines = vec![
            Line::from(format!(" {}", i + 1)),
            Line::default(),
            Line::from(Span::styled(
                color.hex.to_uppercase(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(truncate_str(&color.name, width.saturating_sub(2))),
        ];
        frame.render_widget(
            Paragraph::new(lines).style(style).alignment(Alignment::Center),
            *col,
        );
    }
}

fn render_advice(frame: &mut Frame, state: &AppState, palette: &Palette, theme: &Theme, area: Rect) {
    let text = state.session.language.text();
    let block = theme.titled_panel(
        format!(" {} {} ", theme.icons.advice, text.design_advice),
        theme.colors.border,
    );

    let mut lines = vec![Line::from(Span::styled(
        palette.design_advice.clone(),
        Style::default().fg(theme.colors.fg_primary),
    ))];
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("{} 1-5", theme.icons.copy),
        Style::default().fg(theme.colors.fg_secondary),
    )));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn render_image_panel(frame: &mut Frame, state: &AppState, theme: &Theme, area: Rect) {
    let session = &state.session;
    let text = session.language.text();

    let block = theme.titled_panel(
        format!(" {} {} ", theme.icons.image, text.visualize),
        theme.colors.border,
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    // Keyword input
    let key_style = if state.editing_keywords {
        Style::default().fg(theme.colors.accent)
    } else {
        Style::default().fg(theme.colors.fg_secondary)
    };
    let mut spans = vec![Span::styled(format!("{}: ", text.keywords), key_style)];
    spans.push(Span::styled(
        state.keywords.clone(),
        Style::default().fg(theme.colors.fg_primary),
    ));
    if state.editing_keywords {
        spans.push(Span::styled(theme.icons.cursor, Style::default().fg(theme.colors.accent)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[0]);

    let hint = if session.generated_image.is_some() {
        format!(
            "v {}  x {}  s {} {}",
            text.visualize,
            text.cancel,
            theme.icons.export,
            text.export
        )
    } else {
        format!("i {}  v {}  s {} {}", text.keywords, text.visualize, theme.icons.export, text.export)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(theme.colors.fg_secondary),
        ))),
        rows[1],
    );

    let body = rows[2];
    if session.is_generating_image {
        let painting = Paragraph::new(Line::from(format!(
            "{} {}",
            LoadingSpinner::frame(state.tick),
            text.painting
        )))
        .style(Style::default().fg(theme.colors.accent_alt))
        .alignment(Alignment::Center);
        frame.render_widget(painting, body);
    } else if let Some(thumb) = &state.preview {
        frame.render_widget(HalfBlockImage(thumb), body);
    } else if let Some(err) = &session.image_error {
        frame.render_widget(
            Paragraph::new(Line::from(format!("{} {}", theme.icons.error, err)))
                .style(Style::default().fg(theme.colors.error))
                .wrap(Wrap { trim: true }),
            body,
        );
    }
}

/// Draws a thumbnail with `▀`: foreground is the upper pixel, background the lower.
struct HalfBlockImage<'a>(&'a Thumbnail);

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let thumb = self.0;
        let cols = (thumb.width as u16).min(area.width);
        let rows = (thumb.height.div_ceil(2) as u16).min(area.height);
        let left = area.x + (area.width - cols) / 2;
        for row in 0..rows {
            for col in 0..cols {
                let x = u32::from(col);
                let y = u32::from(row) * 2;
                let Some([r, g, b]) = thumb.pixel(x, y) else {
                    continue;
                };
                let mut style = Style::default().fg(Color::Rgb(r, g, b));
                if let Some([r, g, b]) = thumb.pixel(x, y + 1) {
                    style = style.bg(Color::Rgb(r, g, b));
                }
                buf.set_string(left + col, area.y + row, "▀", style);
            }
        }
    }
}
