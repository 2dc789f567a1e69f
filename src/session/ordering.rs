use crate::palette::{Palette, PaletteId};
use std::collections::HashSet;

/// Favorites first, stable within both groups. While editing the stored
/// order is returned untouched so rows do not jump under the cursor.
pub fn display_order<'a>(
    items: &'a [Palette],
    favorites: &HashSet<PaletteId>,
    editing: bool,
) -> Vec<&'a Palette> {
    let mut out: Vec<&Palette> = items.iter().collect();
    if !editing {
        // sort_by_key is stable
        out.sort_by_key(|p| !favorites.contains(&p.id));
    }
    out
}
