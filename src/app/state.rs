use crate::export::Thumbnail;
use crate::i18n::Language;
use crate::palette::{Palette, PaletteForm, PALETTE_SIZE};
use crate::session::SessionState;
use std::time::{Duration, Instant};

/// Where keystrokes go on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    #[default]
    Prompt,
    Browse,
}

/// Which screen is showing; derived from the session, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Detail,
    AddForm,
}

/// Add-form field order: name, description, then the five colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Color(usize),
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Description,
            FormField::Description => FormField::Color(0),
            FormField::Color(i) if i + 1 < PALETTE_SIZE => FormField::Color(i + 1),
            FormField::Color(_) => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Color(PALETTE_SIZE - 1),
            FormField::Description => FormField::Name,
            FormField::Color(0) => FormField::Description,
            FormField::Color(i) => FormField::Color(i - 1),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
            ttl: Duration::from_secs(3),
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub tick: u64,

    pub session: SessionState,

    // Home
    pub home_focus: HomeFocus,
    pub selected: usize,
    pub scroll_offset: usize,

    // Detail
    pub keywords: String,
    pub editing_keywords: bool,
    pub preview: Option<Thumbnail>,

    // Add form
    pub form: PaletteForm,
    pub form_field: FormField,

    pub show_help: bool,
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(language: Language) -> Self {
        Self::with_session(SessionState::new(language))
    }

    pub fn with_session(session: SessionState) -> Self {
        Self {
            should_quit: false,
            tick: 0,
            session,
            home_focus: HomeFocus::default(),
            selected: 0,
            scroll_offset: 0,
            keywords: String::new(),
            editing_keywords: false,
            preview: None,
            form: PaletteForm::new(),
            form_field: FormField::default(),
            show_help: false,
            toast: None,
        }
    }

    pub fn view(&self) -> View {
        if self.session.is_adding {
            View::AddForm
        } else if self.session.current.is_some() {
            View::Detail
        } else {
            View::Home
        }
    }

    pub fn visible(&self) -> Vec<&Palette> {
        self.session.visible()
    }

    pub fn selected_palette(&self) -> Option<&Palette> {
        self.visible().get(self.selected).copied()
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Keep the cursor inside the list after it shrinks.
    pub fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn update_scroll(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + visible_height {
            self.scroll_offset = self.selected - visible_height + 1;
        }
    }

    /// Text buffer of the focused add-form field.
    pub fn form_value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.form.name,
            FormField::Description => &self.form.description,
            FormField::Color(i) => self.form.colors()[i].as_str(),
        }
    }

    pub fn edit_form_field(&mut self, edit: impl FnOnce(&mut String)) {
        match self.form_field {
            FormField::Name => edit(&mut self.form.name),
            FormField::Description => edit(&mut self.form.description),
            FormField::Color(i) => {
                let mut value = self.form.colors()[i].clone();
                edit(&mut value);
                self.form.set_color(i, &value);
            }
        }
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Something on screen animates, so ticks need a redraw.
    pub fn is_animating(&self) -> bool {
        self.session.is_generating || self.session.is_generating_image || self.toast.is_some()
    }
}
