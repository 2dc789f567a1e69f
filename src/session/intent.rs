use super::state::{Direction, Tab};
use crate::gemini::GenerateError;
use crate::i18n::Language;
use crate::palette::{MoodImage, Palette, PaletteDraft, PaletteForm, PaletteId, Stamp};

/// Everything a view or a finished request can ask of the session.
#[derive(Debug, Clone)]
pub enum Intent {
    SetPrompt(String),
    SetLanguage(Language),
    SubmitPrompt,
    PaletteGenerated {
        result: Result<PaletteDraft, GenerateError>,
        stamp: Stamp,
    },

    GenerateImage {
        keywords: Option<String>,
    },
    ImageGenerated {
        palette_id: PaletteId,
        result: Result<MoodImage, GenerateError>,
    },
    DiscardImage,

    Select(PaletteId),
    Back,
    Reset,

    SetTab(Tab),
    ToggleFavorite(PaletteId),
    ToggleEditing,
    Delete(PaletteId),
    Move { index: usize, direction: Direction },

    OpenAddForm,
    CloseAddForm,
    ManualAdd { form: PaletteForm, stamp: Stamp },
}

/// Side effect the shell must run after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    GeneratePalette { mood: String, language: Language },
    GenerateImage { palette: Palette, keywords: Option<String> },
}
