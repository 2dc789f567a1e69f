//! Text rasterization for the mood board
//!
//! Each character is drawn with the first loaded font face that has a glyph
//! for it. Characters no face covers fall back to the built-in 8x8 bitmap
//! font, and anything beyond that becomes an empty box.

use super::blend;
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use anyhow::{Context, Result, anyhow};
use font8x8::UnicodeFonts;
use image::{Rgb, RgbImage};
use std::path::Path;

/// System families tried in order. The CJK ones cover zh-TW, ja and ko text.
const FAMILIES: &[&str] = &[
    "Inter",
    "Helvetica Neue",
    "Helvetica",
    "Arial",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Noto Sans CJK TC",
    "Noto Sans TC",
    "PingFang TC",
    "Microsoft JhengHei",
    "Noto Sans CJK JP",
    "Hiragino Sans",
    "Yu Gothic",
    "Noto Sans CJK KR",
    "Apple SD Gothic Neo",
    "Malgun Gothic",
];

const ELLIPSIS: &str = "...";
/// Baseline offset from the top of a line, as a fraction of the size.
const ASCENT: f32 = 0.8;
const BITMAP_ASPECT: f32 = 0.75;
const MISSING_ASPECT: f32 = 0.6;

pub struct Typesetter {
    faces: Vec<FontVec>,
}

enum Source<'a> {
    Outline(&'a FontVec, GlyphId),
    Bitmap([u8; 8]),
    Missing,
}

impl Typesetter {
    /// Bitmap glyphs only. Output does not depend on installed fonts.
    pub fn bitmap() -> Self {
        Self { faces: Vec::new() }
    }

    /// `font` first when given, then whatever system faces are installed.
    pub fn load(font: Option<&Path>) -> Self {
        let mut faces = Vec::new();
        if let Some(path) = font {
            match read_face(path) {
                Ok(face) => faces.push(face),
                Err(e) => tracing::warn!("board font unusable: {e:#}"),
            }
        }
        faces.extend(system_faces());
        tracing::debug!(faces = faces.len(), "board fonts loaded");
        Self { faces }
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn source(&self, c: char) -> Source<'_> {
        if let Some(face) = self.faces.iter().find(|f| f.glyph_id(c).0 != 0) {
            return Source::Outline(face, face.glyph_id(c));
        }
        bitmap_glyph(c).map_or(Source::Missing, Source::Bitmap)
    }

    fn advance(&self, c: char, size: f32) -> f32 {
        match self.source(c) {
            Source::Outline(face, id) => face.as_scaled(PxScale::from(size)).h_advance(id),
            Source::Bitmap(_) => size * BITMAP_ASPECT,
            Source::Missing => size * MISSING_ASPECT,
        }
    }

    pub fn measure(&self, text: &str, size: f32) -> f32 {
        text.chars().map(|c| self.advance(c, size)).sum()
    }

    /// Draw `text` with the top-left of its line box at `(x, y)`.
    pub fn draw(&self, img: &mut RgbImage, text: &str, x: f32, y: f32, size: f32, color: Rgb<u8>) {
        let mut pen = x;
        for c in text.chars() {
            match self.source(c) {
                Source::Outline(face, id) => {
                    let glyph =
                        id.with_scale_and_position(PxScale::from(size), point(pen, y + size * ASCENT));
                    if let Some(outline) = face.outline_glyph(glyph) {
                        let bounds = outline.px_bounds();
                        outline.draw(|gx, gy, coverage| {
                            let px = bounds.min.x as i64 + i64::from(gx);
                            let py = bounds.min.y as i64 + i64::from(gy);
                            plot(img, px, py, color, coverage);
                        });
                    }
                }
                Source::Bitmap(rows) => draw_bitmap(img, &rows, pen, y, size, color),
                Source::Missing => {
                    if !c.is_whitespace() {
                        draw_box(img, pen, y, size, color);
                    }
                }
            }
            pen += self.advance(c, size);
        }
    }

    pub fn draw_centered(
        &self,
        img: &mut RgbImage,
        text: &str,
        center_x: f32,
        y: f32,
        size: f32,
        color: Rgb<u8>,
    ) {
        let x = center_x - self.measure(text, size) / 2.0;
        self.draw(img, text, x, y, size, color);
    }

    pub fn draw_right(
        &self,
        img: &mut RgbImage,
        text: &str,
        right_x: f32,
        y: f32,
        size: f32,
        color: Rgb<u8>,
    ) {
        let x = right_x - self.measure(text, size);
        self.draw(img, text, x, y, size, color);
    }

    /// Longest prefix of `text` no wider than `budget`.
    fn fit(&self, text: &str, size: f32, budget: f32) -> String {
        let mut out = String::new();
        let mut width = 0.0;
        for c in text.chars() {
            let w = self.advance(c, size);
            if width + w > budget {
                break;
            }
            width += w;
            out.push(c);
        }
        out
    }

    /// One line, cut with an ellipsis when it does not fit.
    pub fn truncate(&self, text: &str, size: f32, max_width: f32) -> String {
        if self.measure(text, size) <= max_width {
            return text.to_string();
        }
        self.ellipsize(text, size, max_width)
    }

    fn ellipsize(&self, text: &str, size: f32, max_width: f32) -> String {
        let budget = max_width - self.measure(ELLIPSIS, size);
        let mut out = self.fit(text, size, budget).trim_end().to_string();
        out.push_str(ELLIPSIS);
        out
    }

    /// Greedy line breaking that prefers the last space on a line and breaks
    /// anywhere otherwise, since CJK text has no spaces. At most `max_lines`
    /// lines; an overflowing last line ends with an ellipsis.
    pub fn wrap(&self, text: &str, size: f32, max_width: f32, max_lines: usize) -> Vec<String> {
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut width = 0.0;
        for c in text.chars() {
            let w = self.advance(c, size);
            if width + w > max_width && !line.is_empty() {
                let carry = match line.rfind(' ') {
                    Some(i) if c != ' ' => line.split_off(i + 1),
                    _ => String::new(),
                };
                lines.push(line.trim_end().to_string());
                width = self.measure(&carry, size);
                line = carry;
                if c == ' ' {
                    continue;
                }
            }
            line.push(c);
            width += w;
        }
        if !line.trim().is_empty() {
            lines.push(line.trim_end().to_string());
        }

        if lines.len() > max_lines {
            lines.truncate(max_lines);
            if let Some(last) = lines.last_mut() {
                *last = self.ellipsize(last, size, max_width);
            }
        }
        lines
    }
}

fn read_face(path: &Path) -> Result<FontVec> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    FontVec::try_from_vec(data).map_err(|e| anyhow!("parse {}: {e}", path.display()))
}

fn system_faces() -> Vec<FontVec> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut ids = Vec::new();
    for &family in FAMILIES {
        let families = [fontdb::Family::Name(family)];
        let query = fontdb::Query {
            families: &families,
            ..fontdb::Query::default()
        };
        if let Some(id) = db.query(&query)
            && !ids.contains(&id)
        {
            ids.push(id);
        }
    }
    if ids.is_empty()
        && let Some(face) = db.faces().next()
    {
        ids.push(face.id);
    }

    ids.into_iter()
        .filter_map(|id| {
            db.with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))
        })
        .filter_map(|face| {
            face.inspect_err(|e| tracing::debug!("skipping system font: {e}"))
                .ok()
        })
        .collect()
}

fn bitmap_glyph(c: char) -> Option<[u8; 8]> {
    font8x8::BASIC_FONTS
        .get(c)
        .or_else(|| font8x8::LATIN_FONTS.get(c))
        .or_else(|| font8x8::GREEK_FONTS.get(c))
        .or_else(|| font8x8::HIRAGANA_FONTS.get(c))
}

fn plot(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(img.width()) || y >= i64::from(img.height()) {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    let base = *img.get_pixel(x, y);
    img.put_pixel(x, y, blend(base, color, coverage.clamp(0.0, 1.0)));
}

fn fill(img: &mut RgbImage, x: f32, y: f32, w: f32, h: f32, color: Rgb<u8>) {
    let (x0, y0) = (x.round() as i64, y.round() as i64);
    let (x1, y1) = ((x + w).round() as i64, (y + h).round() as i64);
    for py in y0..y1.max(y0 + 1) {
        for px in x0..x1.max(x0 + 1) {
            plot(img, px, py, color, 1.0);
        }
    }
}

/// Row bytes of a font8x8 glyph; bit 0 is the leftmost pixel.
fn draw_bitmap(img: &mut RgbImage, rows: &[u8; 8], x: f32, y: f32, size: f32, color: Rgb<u8>) {
    let cell_w = size * BITMAP_ASPECT / 8.0;
    let cell_h = size / 8.0;
    for (r, bits) in rows.iter().enumerate() {
        for b in 0..8 {
            if bits & (1 << b) != 0 {
                let px = x + b as f32 * cell_w;
                let py = y + r as f32 * cell_h;
                fill(img, px, py, cell_w, cell_h, color);
            }
        }
    }
}

fn draw_box(img: &mut RgbImage, x: f32, y: f32, size: f32, color: Rgb<u8>) {
    let stroke = (size / 16.0).max(1.0);
    let (left, top) = (x + size * 0.1, y + size * 0.15);
    let (w, h) = (size * (MISSING_ASPECT - 0.2), size * 0.7);
    fill(img, left, top, w, stroke, color);
    fill(img, left, top + h - stroke, w, stroke, color);
    fill(img, left, top, stroke, h, color);
    fill(img, left + w - stroke, top, stroke, h, color);
}
