pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::export::{self, Typesetter};
use crate::gemini::GeminiClient;
use crate::input;
use crate::palette::{FormError, PaletteForm, PaletteId, Stamp};
use crate::session::{self, Direction, Effect, Intent, Tab};
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, NetworkEvent};
use once_cell::sync::OnceCell;
use state::{AppState, FormField, HomeFocus, Toast, View};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const TICK_INTERVAL: Duration = Duration::from_millis(80);
const COPY_TOAST_TTL: Duration = Duration::from_secs(2);
/// Terminal cells the mood image preview is decoded for.
const PREVIEW_COLS: u16 = 64;
const PREVIEW_ROWS: u16 = 18;

pub struct App {
    cfg: Config,
    config_path: std::path::PathBuf,
    state: AppState,
    client: GeminiClient,
    /// Effects returned by the reducer, run by the loop after each event.
    pending: Vec<Effect>,
    /// Board fonts, loaded on the first export.
    fonts: Arc<OnceCell<Typesetter>>,
}

impl App {
    pub fn new(cfg: Config, config_path: std::path::PathBuf, client: GeminiClient) -> Self {
        let state = AppState::new(cfg.ui.language);
        Self {
            cfg,
            config_path,
            state,
            client,
            pending: Vec::new(),
            fonts: Arc::new(OnceCell::new()),
        }
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone(), self.cfg.input.mouse);
        spawn_ticker(tx.clone());

        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            let redraw = match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                    true
                }
                Event::Network(ne) => {
                    self.handle_network(ne, &tx);
                    true
                }
                Event::Tick => {
                    self.state.tick = self.state.tick.wrapping_add(1);
                    self.state.is_animating()
                }
            };
            self.run_pending(&tx);

            if self.state.should_quit {
                break;
            }

            if redraw {
                tui::draw(terminal, &mut self.state)?;
            }
        }

        self.save_state_on_quit();
        Ok(())
    }

    fn save_state_on_quit(&mut self) {
        self.cfg.ui.language = self.state.session.language;
        if let Err(e) = crate::config::save(&self.cfg, Some(&self.config_path)) {
            tracing::warn!("failed to save config: {e:#}");
        }
    }

    /// Run one intent through the reducer and queue whatever it asks for.
    fn dispatch(&mut self, intent: Intent) {
        let current = std::mem::take(&mut self.state.session);
        let (next, effect) = session::reduce(current, intent);
        self.state.session = next;

        if self.state.session.generated_image.is_none() {
            self.state.preview = None;
        }
        self.state.clamp_selection();

        self.pending.extend(effect);
    }

    fn run_pending(&mut self, tx: &mpsc::Sender<Event>) {
        for effect in std::mem::take(&mut self.pending) {
            self.run_effect(effect, tx);
        }
    }

    fn run_effect(&self, effect: Effect, tx: &mpsc::Sender<Event>) {
        let client = self.client.clone();
        let tx = tx.clone();
        match effect {
            Effect::GeneratePalette { mood, language } => {
                tracing::info!(%mood, lang = language.code(), "generating palette");
                tokio::spawn(async move {
                    let result = client.generate_palette(&mood, language).await;
                    let _ = tx
                        .send(Event::Network(NetworkEvent::PaletteReady(result)))
                        .await;
                });
            }
            Effect::GenerateImage { palette, keywords } => {
                tracing::info!(palette = %palette.id, "generating mood image");
                tokio::spawn(async move {
                    let result = client.generate_image(&palette, keywords.as_deref()).await;
                    let _ = tx
                        .send(Event::Network(NetworkEvent::ImageReady {
                            palette_id: palette.id,
                            result,
                        }))
                        .await;
                });
            }
        }
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Resize => {}
            Action::CycleLanguage => {
                let next = self.state.session.language.next();
                self.dispatch(Intent::SetLanguage(next));
            }
            Action::Reset => {
                self.dispatch(Intent::Reset);
                self.state.keywords.clear();
                self.state.editing_keywords = false;
                self.state.home_focus = HomeFocus::Prompt;
            }

            Action::FocusPrompt => self.state.home_focus = HomeFocus::Prompt,
            Action::FocusBrowse => self.state.home_focus = HomeFocus::Browse,

            Action::InputChar(c) => self.edit_focused(|buf| buf.push(c)),
            Action::Backspace => self.edit_focused(|buf| {
                buf.pop();
            }),
            Action::ClearInput => self.edit_focused(String::clear),
            Action::Submit => self.dispatch(Intent::SubmitPrompt),

            Action::ListUp => self.state.select_prev(),
            Action::ListDown => self.state.select_next(),
            Action::GoTop => self.state.selected = 0,
            Action::GoBottom => {
                self.state.selected = self.state.visible().len().saturating_sub(1);
            }
            Action::Activate => {
                if let Some(id) = self.state.selected_palette().map(|p| p.id.clone()) {
                    self.state.keywords.clear();
                    self.state.editing_keywords = false;
                    self.dispatch(Intent::Select(id));
                }
            }
            Action::SwitchTab => {
                let tab = self.state.session.active_tab.toggle();
                self.dispatch(Intent::SetTab(tab));
                self.state.selected = 0;
                self.state.scroll_offset = 0;
            }
            Action::ToggleFavorite => {
                let id = match self.state.view() {
                    View::Detail => self.state.session.current.as_ref().map(|p| p.id.clone()),
                    _ => self.state.selected_palette().map(|p| p.id.clone()),
                };
                if let Some(id) = id {
                    self.dispatch(Intent::ToggleFavorite(id));
                }
            }
            Action::ToggleEditing => {
                if self.state.session.active_tab == Tab::History {
                    self.dispatch(Intent::ToggleEditing);
                }
            }
            Action::DeleteSelected => {
                if let Some(id) = self.editable_selection().map(|(_, id)| id) {
                    self.dispatch(Intent::Delete(id));
                }
            }
            Action::MoveSelected(direction) => {
                if let Some((index, _)) = self.editable_selection() {
                    self.dispatch(Intent::Move { index, direction });
                    self.state.selected = match direction {
                        Direction::Left => index.saturating_sub(1),
                        Direction::Right => index + 1,
                    };
                    self.state.clamp_selection();
                }
            }

            Action::OpenAddForm => {
                self.state.form = PaletteForm::new();
                self.state.form_field = FormField::Name;
                self.dispatch(Intent::OpenAddForm);
            }
            Action::FormNextField => self.state.form_field = self.state.form_field.next(),
            Action::FormPrevField => self.state.form_field = self.state.form_field.prev(),
            Action::FormCancel => self.dispatch(Intent::CloseAddForm),
            Action::FormSubmit => {
                if let Err(e) = self.state.form.validate() {
                    tracing::debug!("add form rejected: {e}");
                    let text = self.state.session.language.text();
                    let message = match e {
                        FormError::BlankName => text.palette_name,
                        FormError::InvalidColor { .. } => text.invalid_hex,
                    };
                    self.state.toast = Some(Toast::error(message));
                    return;
                }
                let form = std::mem::take(&mut self.state.form);
                self.dispatch(Intent::ManualAdd {
                    form,
                    stamp: Stamp::now(),
                });
                self.state.selected = 0;
                self.state.scroll_offset = 0;
                self.state.home_focus = HomeFocus::Browse;
            }

            Action::Back => {
                self.state.editing_keywords = false;
                self.dispatch(Intent::Back);
            }
            Action::EditKeywords => self.state.editing_keywords = true,
            Action::FinishKeywords => self.state.editing_keywords = false,
            Action::GenerateImage => {
                self.state.editing_keywords = false;
                let keywords = Some(self.state.keywords.clone());
                self.dispatch(Intent::GenerateImage { keywords });
            }
            Action::DiscardImage => self.dispatch(Intent::DiscardImage),
            Action::Export => self.spawn_export(tx),
            Action::CopyColor(index) => self.copy_color(index),
        }
    }

    /// Apply a text edit to the buffer that currently owns the keyboard.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.state.view() {
            View::AddForm => self.state.edit_form_field(edit),
            View::Detail if self.state.editing_keywords => {
                edit(&mut self.state.keywords);
                let capped: String = self
                    .state
                    .keywords
                    .chars()
                    .take(crate::gemini::prompt::KEYWORDS_MAX)
                    .collect();
                self.state.keywords = capped;
            }
            View::Home if self.state.home_focus == HomeFocus::Prompt => {
                let mut prompt = self.state.session.prompt.clone();
                edit(&mut prompt);
                self.dispatch(Intent::SetPrompt(prompt));
            }
            _ => {}
        }
    }

    /// Selected history row and its id, only while reordering is allowed.
    fn editable_selection(&self) -> Option<(usize, PaletteId)> {
        let s = &self.state.session;
        if !s.is_editing || s.active_tab != Tab::History {
            return None;
        }
        let id = self.state.selected_palette()?.id.clone();
        let index = s.history_index(&id)?;
        Some((index, id))
    }

    fn copy_color(&mut self, index: usize) {
        let Some(color) = self
            .state
            .session
            .current
            .as_ref()
            .and_then(|p| p.colors.get(index))
        else {
            return;
        };
        let hex = color.hex.clone();
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(hex.clone())) {
            Ok(()) => {
                let text = self.state.session.language.text();
                self.state.toast =
                    Some(Toast::success(format!("{} {hex}", text.copied)).with_ttl(COPY_TOAST_TTL));
            }
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
                self.state.toast = Some(Toast::error(format!("clipboard: {e}")));
            }
        }
    }

    fn spawn_export(&mut self, tx: &mpsc::Sender<Event>) {
        let Some(palette) = self.state.session.current.clone() else {
            return;
        };
        let image = self.state.session.generated_image.clone();
        let dir = self.cfg.paths.export_dir.clone();
        let font = self.cfg.paths.font.clone();
        let fonts = Arc::clone(&self.fonts);
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                let fonts = fonts.get_or_init(|| Typesetter::load(font.as_deref()));
                export::export_png(&palette, image.as_ref(), &dir, fonts)
            })
            .await;
            let result = match result {
                Ok(Ok(path)) => Ok(path),
                Ok(Err(e)) => Err(format!("{e:#}")),
                Err(e) => Err(format!("export task: {e}")),
            };
            let _ = tx.send(Event::Network(NetworkEvent::Exported(result))).await;
        });
    }

    fn handle_network(&mut self, ne: NetworkEvent, tx: &mpsc::Sender<Event>) {
        match ne {
            NetworkEvent::PaletteReady(result) => {
                if let Err(e) = &result {
                    tracing::warn!("palette generation failed: {e}");
                }
                let ok = result.is_ok();
                self.dispatch(Intent::PaletteGenerated {
                    result,
                    stamp: Stamp::now(),
                });
                if ok {
                    self.state.selected = 0;
                    self.state.scroll_offset = 0;
                    self.state.keywords.clear();
                    self.state.editing_keywords = false;
                }
            }
            NetworkEvent::ImageReady { palette_id, result } => {
                if let Err(e) = &result {
                    tracing::warn!(palette = %palette_id, "mood image failed: {e}");
                }
                self.dispatch(Intent::ImageGenerated { palette_id, result });
                self.spawn_preview(tx);
            }
            NetworkEvent::Exported(result) => {
                let text = self.state.session.language.text();
                self.state.toast = Some(match result {
                    Ok(path) => Toast::success(format!("{}: {}", text.exported, path.display())),
                    Err(e) => {
                        tracing::error!("export failed: {e}");
                        Toast::error(e)
                    }
                });
            }
            NetworkEvent::PreviewReady { palette_id, result } => {
                let session = &self.state.session;
                let showing = session.current.as_ref().map(|p| &p.id) == Some(&palette_id)
                    && session.generated_image.is_some()
                    && !session.is_generating_image;
                if !showing {
                    tracing::debug!(palette = %palette_id, "dropping stale preview");
                    return;
                }
                match result {
                    Ok(thumb) => self.state.preview = Some(thumb),
                    Err(e) => tracing::warn!("cannot preview mood image: {e}"),
                }
            }
        }
    }

    /// Decode the current mood image for the terminal on the blocking pool.
    fn spawn_preview(&mut self, tx: &mpsc::Sender<Event>) {
        self.state.preview = None;
        let session = &self.state.session;
        let (Some(palette), Some(image)) = (&session.current, session.generated_image.clone())
        else {
            return;
        };
        let palette_id = palette.id.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = tokio::task::spawn_blocking(move || {
                export::thumbnail(&image, PREVIEW_COLS, PREVIEW_ROWS)
            })
            .await;
            let result = match result {
                Ok(Ok(thumb)) => Ok(thumb),
                Ok(Err(e)) => Err(format!("{e:#}")),
                Err(e) => Err(format!("preview task: {e}")),
            };
            let _ = tx
                .send(Event::Network(NetworkEvent::PreviewReady { palette_id, result }))
                .await;
        });
    }
}

fn spawn_ticker(tx: mpsc::Sender<Event>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).await.is_err() {
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeminiConfig;
    use crate::gemini::GenerateError;
    use crate::i18n::Language;
    use crate::palette::{sample_colors, MoodImage, PaletteDraft};
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
    use image::{Rgb, RgbImage};
    use std::io::Cursor;

    fn app() -> App {
        let mut cfg = Config::default();
        cfg.ui.language = Language::En;
        let client = GeminiClient::new(&GeminiConfig::default(), "test-key").unwrap();
        let mut app = App::new(cfg, std::env::temp_dir().join("moodpal-test.toml"), client);
        app.state.session.curated.truncate(2);
        app
    }

    fn channel() -> (mpsc::Sender<Event>, mpsc::Receiver<Event>) {
        mpsc::channel(8)
    }

    fn draft(name: &str) -> PaletteDraft {
        PaletteDraft {
            name: name.into(),
            description: "d".into(),
            design_advice: "a".into(),
            colors: sample_colors(),
        }
    }

    #[test]
    fn typing_then_submit_queues_generation() {
        let mut app = app();
        let (tx, _rx) = channel();
        for c in "dusk".chars() {
            app.handle_action(Action::InputChar(c), &tx);
        }
        app.handle_action(Action::Backspace, &tx);
        assert_eq!(app.state.session.prompt, "dus");
        assert!(app.pending.is_empty());

        app.handle_action(Action::Submit, &tx);
        assert!(app.state.session.is_generating);
        assert_eq!(
            app.pending,
            [Effect::GeneratePalette {
                mood: "dus".into(),
                language: Language::En,
            }]
        );

        // a second submit while generating is refused
        app.handle_action(Action::Submit, &tx);
        assert_eq!(app.pending.len(), 1);
    }

    fn mood_image(color: [u8; 3]) -> MoodImage {
        let img = RgbImage::from_pixel(8, 8, Rgb(color));
        let mut raw = Cursor::new(Vec::new());
        img.write_to(&mut raw, image::ImageFormat::Png).unwrap();
        MoodImage::new(None, BASE64_STANDARD.encode(raw.into_inner()))
    }

    #[tokio::test]
    async fn image_result_builds_preview_off_the_loop() {
        let mut app = app();
        deliver(&mut app, NetworkEvent::PaletteReady(Ok(draft("Dusk"))));
        let id = app.state.session.current.as_ref().unwrap().id.clone();

        let (tx, mut rx) = channel();
        app.handle_action(Action::GenerateImage, &tx);
        assert!(matches!(app.pending.as_slice(), [Effect::GenerateImage { .. }]));
        app.pending.clear();

        let result = Ok(mood_image([200, 10, 10]));
        app.handle_network(NetworkEvent::ImageReady { palette_id: id, result }, &tx);
        assert!(app.state.session.generated_image.is_some());
        assert!(app.state.preview.is_none());

        let Some(Event::Network(ne)) = rx.recv().await else {
            panic!("preview never arrived");
        };
        assert!(matches!(ne, NetworkEvent::PreviewReady { .. }));
        app.handle_network(ne, &tx);
        let [r, g, b] = app.state.preview.as_ref().unwrap().pixel(0, 0).unwrap();
        assert!(r > 190 && g < 20 && b < 20, "{:?}", [r, g, b]);
    }

    #[tokio::test]
    async fn preview_for_another_palette_is_dropped() {
        let mut app = app();
        deliver(&mut app, NetworkEvent::PaletteReady(Ok(draft("Dusk"))));
        let first = app.state.session.current.as_ref().unwrap().id.clone();
        let (tx, mut rx) = channel();
        app.handle_action(Action::GenerateImage, &tx);
        let result = Ok(mood_image([1, 2, 3]));
        app.handle_network(NetworkEvent::ImageReady { palette_id: first, result }, &tx);
        let Some(Event::Network(preview)) = rx.recv().await else {
            panic!("preview never arrived");
        };

        // the user opened a new palette before the preview landed
        deliver(&mut app, NetworkEvent::PaletteReady(Ok(draft("Dawn"))));
        app.handle_network(preview, &tx);
        assert!(app.state.preview.is_none());
    }

    fn deliver(app: &mut App, ne: NetworkEvent) {
        let (tx, _rx) = channel();
        app.handle_network(ne, &tx);
    }

    #[test]
    fn palette_result_opens_detail_on_history_tab() {
        let mut app = app();
        deliver(&mut app, NetworkEvent::PaletteReady(Ok(draft("Dusk"))));
        assert_eq!(app.state.view(), View::Detail);
        assert_eq!(app.state.session.active_tab, Tab::History);
        assert_eq!(app.state.session.history[0].name, "Dusk");

        let (tx, _rx) = channel();
        app.handle_action(Action::Back, &tx);
        assert_eq!(app.state.view(), View::Home);
        assert_eq!(app.state.selected_palette().unwrap().name, "Dusk");
    }

    #[test]
    fn failed_generation_shows_localized_error() {
        let mut app = app();
        deliver(&mut app, NetworkEvent::PaletteReady(Err(GenerateError::EmptyReply)));
        assert_eq!(
            app.state.session.error.as_deref(),
            Some(Language::En.text().error)
        );
        assert_eq!(app.state.view(), View::Home);
    }

    #[test]
    fn add_form_flow_prepends_palette() {
        let mut app = app();
        let (tx, _rx) = channel();
        app.handle_action(Action::OpenAddForm, &tx);
        assert_eq!(app.state.view(), View::AddForm);
        for c in "Sunset".chars() {
            app.handle_action(Action::InputChar(c), &tx);
        }
        app.handle_action(Action::FormNextField, &tx);
        app.handle_action(Action::FormNextField, &tx);
        for hex in ["FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"] {
            for c in hex.chars() {
                app.handle_action(Action::InputChar(c), &tx);
            }
            app.handle_action(Action::FormNextField, &tx);
        }
        app.handle_action(Action::FormSubmit, &tx);
        assert_eq!(app.state.view(), View::Home);
        assert_eq!(app.state.session.active_tab, Tab::History);
        let first = &app.state.session.history[0];
        assert_eq!(first.name, "Sunset");
        assert_eq!(first.colors[0].hex, "#FF0000");
    }

    #[test]
    fn invalid_form_stays_open_with_toast() {
        let mut app = app();
        let (tx, _rx) = channel();
        app.handle_action(Action::OpenAddForm, &tx);
        app.handle_action(Action::InputChar('x'), &tx);
        app.handle_action(Action::FormSubmit, &tx);
        assert_eq!(app.state.view(), View::AddForm);
        assert!(app.state.toast.is_some());
        assert!(app.state.session.history.is_empty());
    }

    #[test]
    fn reorder_follows_the_cursor() {
        let mut app = app();
        for name in ["c", "b", "a"] {
            deliver(&mut app, NetworkEvent::PaletteReady(Ok(draft(name))));
        }
        let (tx, _rx) = channel();
        app.handle_action(Action::Back, &tx);
        app.handle_action(Action::ToggleEditing, &tx);
        app.handle_action(Action::MoveSelected(Direction::Right), &tx);
        let names: Vec<&str> = app
            .state
            .session
            .history
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(app.state.selected, 1);

        app.handle_action(Action::DeleteSelected, &tx);
        assert_eq!(app.state.session.history.len(), 2);
    }

    #[test]
    fn editing_is_ignored_on_trending_tab() {
        let mut app = app();
        let (tx, _rx) = channel();
        app.handle_action(Action::ToggleEditing, &tx);
        assert!(!app.state.session.is_editing);
    }

    #[test]
    fn keywords_are_capped_while_typing() {
        let mut app = app();
        deliver(&mut app, NetworkEvent::PaletteReady(Ok(draft("x"))));
        let (tx, _rx) = channel();
        app.handle_action(Action::EditKeywords, &tx);
        for _ in 0..40 {
            app.handle_action(Action::InputChar('k'), &tx);
        }
        assert_eq!(app.state.keywords.chars().count(), crate::gemini::prompt::KEYWORDS_MAX);
    }

    #[test]
    fn export_result_becomes_toast() {
        let mut app = app();
        deliver(&mut app, NetworkEvent::Exported(Ok("/tmp/MoodPalette_x.png".into())));
        let toast = app.state.toast.as_ref().unwrap();
        assert_eq!(toast.kind, state::ToastKind::Success);
        assert!(toast.message.contains("MoodPalette_x.png"));
    }
}
