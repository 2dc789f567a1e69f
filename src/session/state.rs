use super::ordering;
use crate::i18n::Language;
use crate::palette::{curated, MoodImage, Palette, PaletteId};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Trending,
    History,
}

impl Tab {
    pub fn toggle(self) -> Self {
        match self {
            Tab::Trending => Tab::History,
            Tab::History => Tab::Trending,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards index 0.
    Left,
    Right,
}

/// Everything the palette workflow knows. Mutated only by [`super::reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub language: Language,
    pub prompt: String,
    pub current: Option<Palette>,
    pub is_generating: bool,
    pub is_generating_image: bool,
    pub generated_image: Option<MoodImage>,
    /// Palette generation failure, localized.
    pub error: Option<String>,
    /// Mood image failure, localized; shown beside the image panel only.
    pub image_error: Option<String>,
    pub curated: Vec<Palette>,
    pub history: Vec<Palette>,
    pub favorites: HashSet<PaletteId>,
    pub active_tab: Tab,
    pub is_editing: bool,
    pub is_adding: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl SessionState {
    pub fn new(language: Language) -> Self {
        Self::with_curated(language, curated::popular())
    }

    pub fn with_curated(language: Language, curated: Vec<Palette>) -> Self {
        Self {
            language,
            prompt: String::new(),
            current: None,
            is_generating: false,
            is_generating_image: false,
            generated_image: None,
            error: None,
            image_error: None,
            curated,
            history: Vec::new(),
            favorites: HashSet::new(),
            active_tab: Tab::default(),
            is_editing: false,
            is_adding: false,
        }
    }

    pub fn is_favorite(&self, id: &PaletteId) -> bool {
        self.favorites.contains(id)
    }

    pub fn find(&self, id: &PaletteId) -> Option<&Palette> {
        self.history
            .iter()
            .chain(self.curated.iter())
            .find(|p| &p.id == id)
    }

    pub fn history_index(&self, id: &PaletteId) -> Option<usize> {
        self.history.iter().position(|p| &p.id == id)
    }

    pub fn visible_curated(&self) -> Vec<&Palette> {
        ordering::display_order(&self.curated, &self.favorites, self.is_editing)
    }

    pub fn visible_history(&self) -> Vec<&Palette> {
        ordering::display_order(&self.history, &self.favorites, self.is_editing)
    }

    /// Palettes of the active tab, in display order.
    pub fn visible(&self) -> Vec<&Palette> {
        match self.active_tab {
            Tab::Trending => self.visible_curated(),
            Tab::History => self.visible_history(),
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.prompt.trim().is_empty() && !self.is_generating
    }
}
