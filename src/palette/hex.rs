//! Hex color string helpers

/// True for `#RRGGBB` with hex digits in either case.
pub fn is_valid(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// Input normalisation used by the manual form and reply validation:
/// a six character entry without a leading `#` gets one prepended.
pub fn normalize_input(value: &str) -> String {
    if value.chars().count() == 6 && !value.starts_with('#') {
        format!("#{value}")
    } else {
        value.to_string()
    }
}

pub fn to_rgb(value: &str) -> Option<[u8; 3]> {
    if !is_valid(value) {
        return None;
    }
    let bytes = ::hex::decode(&value[1..]).ok()?;
    Some([bytes[0], bytes[1], bytes[2]])
}

/// Rough perceived brightness check used to pick readable text over a swatch.
pub fn is_light(value: &str) -> bool {
    match to_rgb(value) {
        Some([r, g, b]) => {
            (f32::from(r) * 0.299 + f32::from(g) * 0.587 + f32::from(b) * 0.114) > 150.0
        }
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid("#A1b2C3"));
        assert!(is_valid("#000000"));
        assert!(!is_valid("A1B2C3"));
        assert!(!is_valid("#A1B2C"));
        assert!(!is_valid("#A1B2C3D"));
        assert!(!is_valid("#GGGGGG"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_normalize_input() {
        assert_eq!(normalize_input("FF0000"), "#FF0000");
        assert_eq!(normalize_input("#FF0000"), "#FF0000");
        // Only a full six characters triggers the prefix.
        assert_eq!(normalize_input("FF00"), "FF00");
        assert_eq!(normalize_input("#FF00"), "#FF00");
    }

    #[test]
    fn test_to_rgb_and_brightness() {
        assert_eq!(to_rgb("#FF8000"), Some([255, 128, 0]));
        assert_eq!(to_rgb("nope"), None);
        assert!(is_light("#FFFFFF"));
        assert!(!is_light("#101010"));
    }
}
