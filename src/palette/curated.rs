//! Built-in "trending" palettes shown before anything is generated

use super::{Color, Palette, PaletteId};
use once_cell::sync::Lazy;

static POPULAR: Lazy<Vec<Palette>> = Lazy::new(|| {
    vec![
        curated(
            1,
            "Morning Fog",
            "Quiet greys warmed by first light over still water.",
            "Calm dashboards, wellness apps and editorial layouts that need breathing room.",
            [
                ("#E8E6E1", "Mist"),
                ("#C9C5BA", "Pebble"),
                ("#9FA3A0", "Harbor"),
                ("#6E7B80", "Slate Tide"),
                ("#3F4A4F", "Deep Pier"),
            ],
        ),
        curated(
            2,
            "Citrus Market",
            "Bright, juicy and a little loud, like a summer stall.",
            "Food branding, promotional banners and playful call-to-action buttons.",
            [
                ("#FFB627", "Mango"),
                ("#FF7F11", "Tangerine"),
                ("#E2711D", "Blood Orange"),
                ("#CC5803", "Paprika"),
                ("#2E933C", "Lime Leaf"),
            ],
        ),
        curated(
            3,
            "Nordic Cabin",
            "Pine, wool and timber under a pale winter sky.",
            "Furniture and lifestyle brands, cozy interiors and seasonal campaigns.",
            [
                ("#F4F1EA", "Wool"),
                ("#D8C3A5", "Birch"),
                ("#8E8D8A", "Smoke"),
                ("#4A5D50", "Pine"),
                ("#2B2D2F", "Charcoal"),
            ],
        ),
        curated(
            4,
            "Neon Alley",
            "Electric signage reflected in rain-soaked streets.",
            "Gaming, nightlife posters and dark-mode interfaces with strong accents.",
            [
                ("#0D0221", "Midnight"),
                ("#261447", "Ultraviolet"),
                ("#FF3864", "Hot Signal"),
                ("#2DE2E6", "Cyan Glow"),
                ("#F6019D", "Magenta Sign"),
            ],
        ),
        curated(
            5,
            "Sakura Tea",
            "Petals drifting into a cup of pale green tea.",
            "Beauty packaging, stationery and gentle illustration work.",
            [
                ("#FCE4EC", "Petal"),
                ("#F8BBD0", "Blossom"),
                ("#E8A1B0", "Rose Dust"),
                ("#C5D8A4", "Matcha Milk"),
                ("#7A9E7E", "Tea Leaf"),
            ],
        ),
        curated(
            6,
            "Desert Dusk",
            "Terracotta dunes cooling into violet evening.",
            "Travel sites, outdoor apparel and warm photographic overlays.",
            [
                ("#F2CC8F", "Sand"),
                ("#E07A5F", "Terracotta"),
                ("#B56576", "Dusk Rose"),
                ("#6D597A", "Mesa Violet"),
                ("#355070", "Night Sky"),
            ],
        ),
        curated(
            7,
            "Deep Forest",
            "Moss, bark and shade far from the trail.",
            "Sustainability brands, outdoor gear and nature documentaries.",
            [
                ("#DAD7CD", "Lichen"),
                ("#A3B18A", "Sage"),
                ("#588157", "Fern"),
                ("#3A5A40", "Moss"),
                ("#344E41", "Canopy"),
            ],
        ),
        curated(
            8,
            "Ocean Breeze",
            "Salt air, white foam and clear turquoise shallows.",
            "Hospitality, swimwear and fresh, airy landing pages.",
            [
                ("#F1FAEE", "Foam"),
                ("#A8DADC", "Shallows"),
                ("#48CAE4", "Lagoon"),
                ("#457B9D", "Current"),
                ("#1D3557", "Deep Water"),
            ],
        ),
    ]
});

fn curated(
    n: u32,
    name: &str,
    description: &str,
    advice: &str,
    colors: [(&str, &str); 5],
) -> Palette {
    Palette {
        id: PaletteId::new(format!("popular-{n}")),
        name: name.to_string(),
        description: description.to_string(),
        design_advice: advice.to_string(),
        colors: colors.map(|(hex, name)| Color::new(hex, name)),
        created_at: 0,
    }
}

pub fn popular() -> Vec<Palette> {
    POPULAR.clone()
}
