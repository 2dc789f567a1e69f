//! Manual palette entry form

use super::{hex, Color, Palette, Stamp, PALETTE_SIZE};

/// Longest accepted color input, `#` included.
pub const COLOR_INPUT_MAX: usize = 7;

const DEFAULT_DESCRIPTION: &str = "Custom Palette";
const DEFAULT_ADVICE: &str = "Manual creation";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("palette name is blank")]
    BlankName,
    #[error("color {} is not a #RRGGBB value: {value:?}", .index + 1)]
    InvalidColor { index: usize, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteForm {
    pub name: String,
    pub description: String,
    colors: [String; PALETTE_SIZE],
}

impl PaletteForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(&self) -> &[String; PALETTE_SIZE] {
        &self.colors
    }

    /// Replace one color field, applying the `#` auto-prefix.
    pub fn set_color(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.colors.get_mut(index) {
            let value: String = value.chars().take(COLOR_INPUT_MAX).collect();
            *slot = hex::normalize_input(&value);
        }
    }

    pub fn is_color_valid(&self, index: usize) -> bool {
        self.colors.get(index).is_some_and(|c| hex::is_valid(c))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::BlankName);
        }
        for (index, value) in self.colors.iter().enumerate() {
            if !hex::is_valid(value) {
                return Err(FormError::InvalidColor {
                    index,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build the palette; hand-made colors are named by their hex value.
    pub fn build(&self, stamp: Stamp) -> Result<Palette, FormError> {
        self.validate()?;
        let description = if self.description.is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            self.description.clone()
        };
        Ok(Palette {
            id: stamp.id,
            name: self.name.clone(),
            description,
            design_advice: DEFAULT_ADVICE.to_string(),
            colors: self.colors.clone().map(|hex| Color::new(hex.clone(), hex)),
            created_at: stamp.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteId;

    fn filled(name: &str, colors: [&str; PALETTE_SIZE]) -> PaletteForm {
        let mut form = PaletteForm::new();
        form.name = name.to_string();
        for (i, c) in colors.iter().enumerate() {
            form.set_color(i, c);
        }
        form
    }

    fn stamp() -> Stamp {
        Stamp {
            id: PaletteId::new("manual-1"),
            created_at: 7,
        }
    }

    #[test]
    fn sunset_entry_is_auto_prefixed() {
        let form = filled(
            "Sunset",
            ["FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"],
        );
        assert!(form.is_valid());
        let palette = form.build(stamp()).unwrap();
        let hexes: Vec<&str> = palette.colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(
            hexes,
            ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]
        );
        assert_eq!(palette.colors[0].name, "#FF0000");
        assert_eq!(palette.description, "Custom Palette");
        assert_eq!(palette.design_advice, "Manual creation");
        assert_eq!(palette.id.as_str(), "manual-1");
    }

    #[test]
    fn blank_name_is_invalid() {
        let form = filled("   ", ["#000000"; PALETTE_SIZE]);
        assert_eq!(form.validate(), Err(FormError::BlankName));
        assert!(form.build(stamp()).is_err());
    }

    #[test]
    fn each_color_is_checked_independently() {
        let mut form = filled("Ok", ["#000000"; PALETTE_SIZE]);
        assert!(form.is_valid());
        form.set_color(3, "#12345");
        assert!(!form.is_color_valid(3));
        assert!(form.is_color_valid(2));
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidColor {
                index: 3,
                value: "#12345".into()
            })
        );
    }

    #[test]
    fn empty_form_is_invalid() {
        let mut form = PaletteForm::new();
        form.name = "Named".into();
        assert!(!form.is_valid());
    }

    #[test]
    fn color_input_is_capped() {
        let mut form = PaletteForm::new();
        form.set_color(0, "#ABCDEF0");
        assert_eq!(form.colors()[0], "#ABCDEF");
        form.set_color(9, "#000000");
        assert_eq!(form.colors().len(), PALETTE_SIZE);
    }
}
