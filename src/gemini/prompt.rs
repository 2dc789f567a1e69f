//! Prompt construction for palette and mood-image requests

use crate::i18n::Language;
use crate::palette::Palette;
use serde_json::json;

/// Keyword input is capped like the image keyword field.
pub const KEYWORDS_MAX: usize = 30;

pub fn palette_prompt(mood: &str, language: Language) -> String {
    format!(
        r#"Create a professional color palette based on the user request: "{mood}".
The palette should have 5 distinct, harmonious colors.

IMPORTANT: The output MUST be in {lang}.

Provide:
1. A creative name for the palette.
2. A short, evocative description of the vibe.
3. Practical design advice on where to use these colors (e.g., UI, Branding, Illustration).
4. 5 colors with Hex codes and creative names."#,
        mood = mood.trim(),
        lang = language.prompt_name(),
    )
}

/// JSON schema the text model is constrained to.
pub fn palette_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": { "type": "STRING", "description": "A creative name for the palette" },
            "description": { "type": "STRING", "description": "A short description of the vibe" },
            "designAdvice": { "type": "STRING", "description": "Advice on usage" },
            "colors": {
                "type": "ARRAY",
                "minItems": 5,
                "maxItems": 5,
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "hex": { "type": "STRING", "description": "Hex color code, e.g. #FFFFFF" },
                        "name": { "type": "STRING", "description": "A creative name for the color" }
                    },
                    "required": ["hex", "name"]
                }
            }
        },
        "required": ["name", "description", "designAdvice", "colors"]
    })
}

/// Trimmed, length-capped keywords; blank input counts as none.
pub fn clean_keywords(keywords: Option<&str>) -> Option<String> {
    let k = keywords?.trim();
    if k.is_empty() {
        None
    } else {
        Some(k.chars().take(KEYWORDS_MAX).collect())
    }
}

pub fn image_prompt(palette: &Palette, keywords: Option<&str>) -> String {
    let color_list = palette
        .colors
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {} ({})", i + 1, c.hex, c.name))
        .collect::<Vec<_>>()
        .join("\n");

    let subject = match clean_keywords(keywords) {
        Some(k) => format!("Specific Subject: {k}"),
        None => format!("Subject: Abstract representation of \"{}\"", palette.name),
    };

    format!(
        r#"Create a high-quality, artistic image.

{subject}

STRICT COLOR CONSTRAINT:
The image MUST use the following 5 colors as the dominant palette. Do not deviate significantly.
{color_list}

Style: Minimalist, High-end, Cinematic, Clean.

NEGATIVE PROMPT (FORBIDDEN CONTENT):
- NO TEXT
- NO LETTERS
- NO WATERMARKS
- NO TYPOGRAPHY
- NO SIGNATURES
- NO WORDS

Ensure the atmosphere matches: {description}."#,
        description = palette.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::sample_palette;

    #[test]
    fn palette_prompt_embeds_mood_and_language() {
        let p = palette_prompt("  calm morning beach ", Language::Ja);
        assert!(p.contains("\"calm morning beach\""));
        assert!(p.contains("MUST be in Japanese"));
        assert!(p.contains("5 colors with Hex codes"));
    }

    #[test]
    fn schema_requires_every_field() {
        let s = palette_schema();
        let required: Vec<&str> = s["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, ["name", "description", "designAdvice", "colors"]);
        assert_eq!(s["properties"]["colors"]["items"]["required"][0], "hex");
    }

    #[test]
    fn image_prompt_lists_colors_and_forbids_text() {
        let palette = sample_palette("1");
        let p = image_prompt(&palette, None);
        assert!(p.contains("1. #FF0000 (Red)"));
        assert!(p.contains("5. #FF00FF (Magenta)"));
        assert!(p.contains("Subject: Abstract representation of \"Palette 1\""));
        assert!(p.contains("- NO WATERMARKS"));
        assert!(p.contains("Ensure the atmosphere matches: desc."));
    }

    #[test]
    fn image_prompt_prefers_keywords() {
        let palette = sample_palette("1");
        let p = image_prompt(&palette, Some("  lighthouse at dawn "));
        assert!(p.contains("Specific Subject: lighthouse at dawn"));
        assert!(!p.contains("Abstract representation"));
        let blank = image_prompt(&palette, Some("   "));
        assert!(blank.contains("Abstract representation"));
    }

    #[test]
    fn keywords_are_capped() {
        let long = "a".repeat(50);
        assert_eq!(clean_keywords(Some(&long)).unwrap().len(), KEYWORDS_MAX);
        assert_eq!(clean_keywords(None), None);
    }
}
