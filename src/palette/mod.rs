//! Palette domain types
//!
//! A palette is always exactly five colors. The fixed-size array keeps that
//! invariant in the type, so generated, curated and hand-made palettes can
//! never drift from it.

pub mod curated;
pub mod form;
pub mod hex;
pub mod mood_image;

pub use form::{FormError, PaletteForm};
pub use mood_image::MoodImage;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub hex: String,
    pub name: String,
}

impl Color {
    pub fn new(hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
        }
    }

    /// RGB triple for rendering; `None` when the hex string is malformed.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        self::hex::to_rgb(&self.hex)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaletteId(String);

impl PaletteId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Fresh, globally unique id.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaletteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identity attached to a palette when it is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: PaletteId,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl Stamp {
    pub fn now() -> Self {
        let millis = time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self {
            id: PaletteId::generate(),
            created_at: millis as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: PaletteId,
    pub name: String,
    pub description: String,
    pub design_advice: String,
    pub colors: [Color; PALETTE_SIZE],
    pub created_at: i64,
}

impl Palette {
    pub fn from_draft(draft: PaletteDraft, stamp: Stamp) -> Self {
        Self {
            id: stamp.id,
            name: draft.name,
            description: draft.description,
            design_advice: draft.design_advice,
            colors: draft.colors,
            created_at: stamp.created_at,
        }
    }

    /// Creation time rendered in the local offset, falling back to UTC.
    pub fn created_label(&self) -> String {
        let nanos = i128::from(self.created_at) * 1_000_000;
        let Ok(utc) = time::OffsetDateTime::from_unix_timestamp_nanos(nanos) else {
            return String::new();
        };
        let local = time::UtcOffset::current_local_offset()
            .map(|off| utc.to_offset(off))
            .unwrap_or(utc);
        local
            .format(time::macros::format_description!(
                "[year]-[month]-[day] [hour]:[minute]"
            ))
            .unwrap_or_default()
    }
}

/// Validated generation result, not yet stamped with an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteDraft {
    pub name: String,
    pub description: String,
    pub design_advice: String,
    pub colors: [Color; PALETTE_SIZE],
}

#[cfg(test)]
pub(crate) fn sample_colors() -> [Color; PALETTE_SIZE] {
    [
        Color::new("#FF0000", "Red"),
        Color::new("#00FF00", "Green"),
        Color::new("#0000FF", "Blue"),
        Color::new("#FFFF00", "Yellow"),
        Color::new("#FF00FF", "Magenta"),
    ]
}

#[cfg(test)]
pub(crate) fn sample_palette(id: &str) -> Palette {
    Palette {
        id: PaletteId::new(id),
        name: format!("Palette {id}"),
        description: "desc".to_string(),
        design_advice: "advice".to_string(),
        colors: sample_colors(),
        created_at: 0,
    }
}
