use crate::export::Thumbnail;
use crate::gemini::GenerateError;
use crate::palette::{MoodImage, PaletteDraft, PaletteId};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Network(NetworkEvent),
    Tick,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

/// Results of background work, delivered back to the loop.
#[derive(Debug, Clone)]
pub enum NetworkEvent {
    PaletteReady(Result<PaletteDraft, GenerateError>),
    ImageReady {
        palette_id: PaletteId,
        result: Result<MoodImage, GenerateError>,
    },
    Exported(Result<PathBuf, String>),
    /// Terminal preview of a mood image, decoded off the loop.
    PreviewReady {
        palette_id: PaletteId,
        result: Result<Thumbnail, String>,
    },
}
