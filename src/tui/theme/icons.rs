//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

#[derive(Debug, Clone)]
pub struct Icons {
    pub palette: &'static str,
    pub trending: &'static str,
    pub history: &'static str,
    pub help: &'static str,
    pub image: &'static str,
    pub advice: &'static str,
    pub add: &'static str,
    pub edit: &'static str,
    pub grip: &'static str,
    pub delete: &'static str,
    pub copy: &'static str,
    pub export: &'static str,
    pub language: &'static str,

    pub success: &'static str,
    pub error: &'static str,

    pub favorite: &'static str,
    pub unfavorite: &'static str,
    pub selected: &'static str,
    pub cursor: &'static str,
}

impl Icons {
    pub const fn nerd() -> Self {
        Self {
            palette: "\u{f1fc}",    // nf-fa-paint_brush
            trending: "\u{f201}",   // nf-fa-line_chart
            history: "\u{f1da}",    // nf-fa-history
            help: "\u{f059}",       // nf-fa-question_circle
            image: "\u{f03e}",      // nf-fa-picture_o
            advice: "\u{f0eb}",     // nf-fa-lightbulb_o
            add: "\u{f067}",        // nf-fa-plus
            edit: "\u{f040}",       // nf-fa-pencil
            grip: "\u{f0dc}",       // nf-fa-sort
            delete: "\u{f1f8}",     // nf-fa-trash
            copy: "\u{f0c5}",       // nf-fa-files_o
            export: "\u{f019}",     // nf-fa-download
            language: "\u{f1ab}",   // nf-fa-language

            success: "\u{f00c}",    // nf-fa-check
            error: "\u{f00d}",      // nf-fa-times

            favorite: "\u{f004}",   // nf-fa-heart
            unfavorite: "\u{f08a}", // nf-fa-heart_o
            selected: "\u{f054}",   // nf-fa-chevron_right
            cursor: "▏",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}

/// Loading spinner frames
pub struct LoadingSpinner;

impl LoadingSpinner {
    /// Braille-based smooth spinner
    pub const BRAILLE: [&'static str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

    pub fn frame(tick: u64) -> &'static str {
        let idx = (tick / 2) as usize % Self::BRAILLE.len();
        Self::BRAILLE[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles() {
        assert_eq!(LoadingSpinner::frame(0), LoadingSpinner::frame(16));
        assert_ne!(LoadingSpinner::frame(0), LoadingSpinner::frame(2));
    }
}
