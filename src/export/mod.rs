//! Mood-board PNG export and terminal thumbnails
//!
//! The board is a white 1080 px card: cover image (or color bands), a row of
//! swatch circles labeled with hex code and color name, a footer with the
//! palette name and description, and a strip of the five colors.

mod text;

pub use text::Typesetter;

use crate::palette::{Color, MoodImage, Palette};
use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

pub const BOARD_WIDTH: u32 = 1080;
const PADDING: u32 = 64;
const GAP: u32 = 48;
const CIRCLE: u32 = 128;
const CIRCLE_RING: u32 = 4;
const CIRCLE_INSET: u32 = 16;
const RULE: u32 = 2;
const STRIP: u32 = 40;

const LABEL_GAP: u32 = 16;
const HEX_SIZE: f32 = 20.0;
const HEX_LINE: u32 = 26;
const COLOR_NAME_SIZE: f32 = 15.0;
const COLOR_NAME_LINE: u32 = 22;

const FOOTER_PAD: u32 = 40;
const TITLE_SIZE: f32 = 48.0;
const TITLE_LINE: u32 = 60;
const TITLE_GAP: u32 = 16;
const DESC_SIZE: f32 = 22.0;
const DESC_LINE: u32 = 33;
const DESC_LINES: usize = 3;
const FOOTER_TEXT_WIDTH: f32 = 672.0;
const BRAND_SIZE: f32 = 14.0;
const BRAND_LINE: u32 = 24;

const WHITE: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);
const PLACEHOLDER: Rgb<u8> = Rgb([0xF8, 0xFA, 0xFC]);
const RULE_COLOR: Rgb<u8> = Rgb([0xF1, 0xF5, 0xF9]);
const INK_TITLE: Rgb<u8> = Rgb([0x0F, 0x17, 0x2A]);
const INK: Rgb<u8> = Rgb([0x1E, 0x29, 0x3B]);
const INK_SOFT: Rgb<u8> = Rgb([0x64, 0x74, 0x8B]);
const INK_FAINT: Rgb<u8> = Rgb([0x94, 0xA3, 0xB8]);
/// Band opacity over the placeholder when there is no mood image.
const BAND_ALPHA: f32 = 0.3;

fn inner_width() -> u32 {
    BOARD_WIDTH - 2 * PADDING
}

fn visual_height() -> u32 {
    inner_width() * 3 / 4
}

fn swatch_row_height() -> u32 {
    CIRCLE + LABEL_GAP + HEX_LINE + COLOR_NAME_LINE
}

fn footer_height() -> u32 {
    FOOTER_PAD + TITLE_LINE + TITLE_GAP + DESC_LINE * DESC_LINES as u32
}

pub fn board_height() -> u32 {
    PADDING
        + visual_height()
        + GAP
        + swatch_row_height()
        + GAP
        + RULE
        + footer_height()
        + GAP
        + STRIP
        + PADDING
}

/// `MoodPalette_<name>.png` where every whitespace run, leading and trailing
/// ones included, becomes a single `_`.
pub fn file_name(palette: &Palette) -> String {
    let mut name = String::with_capacity(palette.name.len());
    let mut in_space = false;
    for c in palette.name.chars() {
        if c.is_whitespace() {
            if !in_space {
                name.push('_');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        name.push(if matches!(c, '/' | '\\') { '_' } else { c });
    }
    if name.is_empty() {
        name.push_str("Untitled");
    }
    format!("MoodPalette_{name}.png")
}

fn rgb(color: &Color) -> Rgb<u8> {
    Rgb(color.rgb().unwrap_or([0, 0, 0]))
}

fn blend(base: Rgb<u8>, over: Rgb<u8>, alpha: f32) -> Rgb<u8> {
    let mix = |b: u8, o: u8| (f32::from(b) * (1.0 - alpha) + f32::from(o) * alpha).round() as u8;
    Rgb([
        mix(base[0], over[0]),
        mix(base[1], over[1]),
        mix(base[2], over[2]),
    ])
}

fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = (x + w).min(img.width());
    let y_end = (y + h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

fn fill_circle(img: &mut RgbImage, cx: u32, cy: u32, radius: u32, color: Rgb<u8>) {
    let r = radius as i64;
    let (cx, cy) = (cx as i64, cy as i64);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (px, py) = (cx + dx, cy + dy);
            if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                img.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

/// Split `total` into `count` column spans that cover it exactly.
fn spans(total: u32, count: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..count).map(move |i| {
        let start = total * i / count;
        let end = total * (i + 1) / count;
        (start, end - start)
    })
}

fn draw_visual(board: &mut RgbImage, palette: &Palette, cover: Option<&image::DynamicImage>) {
    let (w, h) = (inner_width(), visual_height());
    match cover {
        Some(img) => {
            let fitted = img.resize_to_fill(w, h, FilterType::Triangle).to_rgb8();
            imageops::replace(board, &fitted, PADDING as i64, PADDING as i64);
        }
        None => {
            for ((x, span), color) in spans(w, palette.colors.len() as u32).zip(&palette.colors) {
                let band = blend(PLACEHOLDER, rgb(color), BAND_ALPHA);
                fill_rect(board, PADDING + x, PADDING, span, h, band);
            }
        }
    }
}

fn draw_swatches(board: &mut RgbImage, palette: &Palette, fonts: &Typesetter, top: u32) {
    let left = PADDING + CIRCLE_INSET;
    let usable = inner_width() - 2 * CIRCLE_INSET;
    let count = palette.colors.len() as u32;
    // justify-between: first and last circles touch the inset edges
    let step = (usable - CIRCLE) / (count - 1);
    let radius = CIRCLE / 2;
    let label_width = (step - 8) as f32;
    let hex_top = (top + CIRCLE + LABEL_GAP) as f32;
    let name_top = hex_top + HEX_LINE as f32;
    for (i, color) in palette.colors.iter().enumerate() {
        let cx = left + step * i as u32 + radius;
        let cy = top + radius;
        fill_circle(board, cx, cy, radius, WHITE);
        fill_circle(board, cx, cy, radius - CIRCLE_RING, rgb(color));

        let center = cx as f32;
        let hex = color.hex.to_uppercase();
        fonts.draw_centered(board, &hex, center, hex_top, HEX_SIZE, INK);
        let name = fonts.truncate(&color.name, COLOR_NAME_SIZE, label_width);
        fonts.draw_centered(board, &name, center, name_top, COLOR_NAME_SIZE, INK_SOFT);
    }
}

/// Name and description on the left, the app mark on the right.
fn draw_footer(board: &mut RgbImage, palette: &Palette, fonts: &Typesetter, top: u32) {
    let left = PADDING as f32;
    let title_top = (top + FOOTER_PAD) as f32;
    let title = fonts.truncate(&palette.name, TITLE_SIZE, FOOTER_TEXT_WIDTH);
    fonts.draw(board, &title, left, title_top, TITLE_SIZE, INK_TITLE);

    let mut line_top = title_top + (TITLE_LINE + TITLE_GAP) as f32;
    for line in fonts.wrap(&palette.description, DESC_SIZE, FOOTER_TEXT_WIDTH, DESC_LINES) {
        fonts.draw(board, &line, left, line_top, DESC_SIZE, INK_SOFT);
        line_top += DESC_LINE as f32;
    }

    let right = (BOARD_WIDTH - PADDING) as f32;
    fonts.draw_right(board, "MOOD PALETTE", right, title_top, BRAND_SIZE, INK_FAINT);
    let tagline_top = title_top + BRAND_LINE as f32;
    fonts.draw_right(board, "AI Color Inspiration", right, tagline_top, BRAND_SIZE, INK_FAINT);
}

fn draw_strip(board: &mut RgbImage, palette: &Palette, top: u32) {
    for ((x, span), color) in spans(inner_width(), palette.colors.len() as u32).zip(&palette.colors) {
        fill_rect(board, PADDING + x, top, span, STRIP, rgb(color));
    }
}

/// Render the board in memory.
pub fn render_board(
    palette: &Palette,
    image: Option<&MoodImage>,
    fonts: &Typesetter,
) -> Result<RgbImage> {
    let cover = image
        .map(|img| -> Result<image::DynamicImage> {
            let bytes = img.bytes()?;
            image::load_from_memory(&bytes).context("decode mood image")
        })
        .transpose()?;

    let mut board = RgbImage::from_pixel(BOARD_WIDTH, board_height(), WHITE);
    draw_visual(&mut board, palette, cover.as_ref());

    let swatches_top = PADDING + visual_height() + GAP;
    draw_swatches(&mut board, palette, fonts, swatches_top);

    let rule_top = swatches_top + swatch_row_height() + GAP;
    fill_rect(&mut board, PADDING, rule_top, inner_width(), RULE, RULE_COLOR);

    let footer_top = rule_top + RULE;
    draw_footer(&mut board, palette, fonts, footer_top);

    draw_strip(&mut board, palette, footer_top + footer_height() + GAP);
    Ok(board)
}

/// Write the board into `dir`, creating it if needed. Returns the file path.
pub fn export_png(
    palette: &Palette,
    image: Option<&MoodImage>,
    dir: &Path,
    fonts: &Typesetter,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let board = render_board(palette, image, fonts)?;
    let path = dir.join(file_name(palette));
    board
        .save_with_format(&path, image::ImageFormat::Png)
        .with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported mood board");
    Ok(path)
}

/// Downscaled RGB grid for half-block rendering in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pixels: Vec<[u8; 3]>,
}

impl Thumbnail {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Decode and fit the image into `cols` x `rows` terminal cells. Each cell
/// holds two vertical pixels.
pub fn thumbnail(image: &MoodImage, cols: u16, rows: u16) -> Result<Thumbnail> {
    let bytes = image.bytes()?;
    let decoded = image::load_from_memory(&bytes).context("decode mood image")?;
    let max_w = u32::from(cols.max(1));
    let max_h = u32::from(rows.max(1)) * 2;
    let rgb = decoded.resize(max_w, max_h, FilterType::Triangle).to_rgb8();
    Ok(Thumbnail {
        width: rgb.width(),
        height: rgb.height(),
        pixels: rgb.pixels().map(|p| p.0).collect(),
    })
}
