use super::intent::{Effect, Intent};
use super::state::{Direction, SessionState, Tab};
use crate::gemini::prompt;
use crate::palette::Palette;

/// Apply one intent. Pure: no clock, no I/O. Anything that needs the outside
/// world comes back as an [`Effect`] for the caller to run.
pub fn reduce(state: SessionState, intent: Intent) -> (SessionState, Option<Effect>) {
    let mut s = state;
    let effect = match intent {
        Intent::SetPrompt(prompt) => {
            s.prompt = prompt;
            None
        }
        Intent::SetLanguage(language) => {
            s.language = language;
            None
        }
        Intent::SubmitPrompt => {
            if !s.can_submit() {
                return (s, None);
            }
            s.error = None;
            s.image_error = None;
            s.generated_image = None;
            s.current = None;
            s.is_generating = true;
            Some(Effect::GeneratePalette {
                mood: s.prompt.trim().to_string(),
                language: s.language,
            })
        }
        Intent::PaletteGenerated { result, stamp } => {
            s.is_generating = false;
            match result {
                Ok(draft) => {
                    let palette = Palette::from_draft(draft, stamp);
                    s.history.insert(0, palette.clone());
                    s.active_tab = Tab::History;
                    s.is_editing = false;
                    s.current = Some(palette);
                }
                Err(_) => {
                    s.error = Some(s.language.text().error.to_string());
                }
            }
            None
        }

        Intent::GenerateImage { keywords } => {
            if s.is_generating_image {
                return (s, None);
            }
            let Some(palette) = s.current.clone() else {
                return (s, None);
            };
            s.is_generating_image = true;
            s.image_error = None;
            Some(Effect::GenerateImage {
                palette,
                keywords: prompt::clean_keywords(keywords.as_deref()),
            })
        }
        Intent::ImageGenerated { palette_id, result } => {
            s.is_generating_image = false;
            let still_current = s.current.as_ref().is_some_and(|p| p.id == palette_id);
            if still_current {
                match result {
                    Ok(image) => s.generated_image = Some(image),
                    Err(_) => s.image_error = Some(s.language.text().image_error.to_string()),
                }
            }
            None
        }
        Intent::DiscardImage => {
            s.generated_image = None;
            s.image_error = None;
            None
        }

        Intent::Select(id) => {
            if let Some(palette) = s.find(&id).cloned() {
                s.current = Some(palette);
                s.generated_image = None;
                s.error = None;
                s.image_error = None;
            }
            None
        }
        Intent::Back => {
            s.current = None;
            s.generated_image = None;
            s.image_error = None;
            None
        }
        Intent::Reset => {
            s.current = None;
            s.generated_image = None;
            s.error = None;
            s.image_error = None;
            s.prompt.clear();
            None
        }

        Intent::SetTab(tab) => {
            s.active_tab = tab;
            if tab == Tab::Trending {
                s.is_editing = false;
            }
            None
        }
        Intent::ToggleFavorite(id) => {
            if !s.favorites.remove(&id) {
                s.favorites.insert(id);
            }
            None
        }
        Intent::ToggleEditing => {
            s.is_editing = !s.is_editing;
            None
        }
        Intent::Delete(id) => {
            if s.is_editing {
                s.history.retain(|p| p.id != id);
            }
            None
        }
        Intent::Move { index, direction } => {
            if s.is_editing {
                move_adjacent(&mut s.history, index, direction);
            }
            None
        }

        Intent::OpenAddForm => {
            s.is_adding = true;
            None
        }
        Intent::CloseAddForm => {
            s.is_adding = false;
            None
        }
        Intent::ManualAdd { form, stamp } => {
            if let Ok(palette) = form.build(stamp) {
                s.history.insert(0, palette);
                s.is_adding = false;
                s.active_tab = Tab::History;
                s.is_editing = false;
            }
            None
        }
    };
    (s, effect)
}

/// Swap with the neighbour in `direction`; no-op at either boundary.
fn move_adjacent<T>(items: &mut [T], index: usize, direction: Direction) {
    let target = match direction {
        Direction::Left => index.checked_sub(1),
        Direction::Right => index.checked_add(1),
    };
    if let Some(target) = target
        && index < items.len()
        && target < items.len()
    {
        items.swap(index, target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gemini::GenerateError;
    use crate::i18n::Language;
    use crate::palette::{
        sample_colors, sample_palette, MoodImage, PaletteDraft, PaletteForm, PaletteId, Stamp,
    };

    fn stamp(id: &str) -> Stamp {
        Stamp {
            id: PaletteId::new(id),
            created_at: 1_700_000_000_000,
        }
    }

    fn draft() -> PaletteDraft {
        PaletteDraft {
            name: "Calm Morning".into(),
            description: "Soft light".into(),
            design_advice: "Backgrounds".into(),
            colors: sample_colors(),
        }
    }

    fn apply(state: SessionState, intents: Vec<Intent>) -> SessionState {
        intents.into_iter().fold(state, |s, i| reduce(s, i).0)
    }

    fn with_history(ids: &[&str]) -> SessionState {
        let mut s = SessionState::with_curated(Language::En, vec![sample_palette("c1")]);
        s.history = ids.iter().map(|id| sample_palette(id)).collect();
        s
    }

    fn history_ids(s: &SessionState) -> Vec<String> {
        s.history.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn submit_then_success_lands_on_top_of_history() {
        let s = with_history(&["old"]);
        let (s, effect) = reduce(s, Intent::SetPrompt("calm morning beach".into()));
        assert!(effect.is_none());

        let (s, effect) = reduce(s, Intent::SubmitPrompt);
        assert!(s.is_generating);
        assert_eq!(
            effect,
            Some(Effect::GeneratePalette {
                mood: "calm morning beach".into(),
                language: Language::En
            })
        );

        let (s, _) = reduce(
            s,
            Intent::PaletteGenerated {
                result: Ok(draft()),
                stamp: stamp("new"),
            },
        );
        assert!(!s.is_generating);
        assert_eq!(history_ids(&s), ["new", "old"]);
        assert_eq!(s.active_tab, Tab::History);
        let current = s.current.as_ref().unwrap();
        assert_eq!(current.id.as_str(), "new");
        assert_eq!(current.created_at, 1_700_000_000_000);
        assert_eq!(current.colors.len(), 5);
    }

    #[test]
    fn submit_clears_previous_selection_and_errors() {
        let mut s = with_history(&["a"]);
        s.prompt = "rainy".into();
        s.current = Some(sample_palette("a"));
        s.generated_image = Some(MoodImage::new(None, "AAAA"));
        s.error = Some("old".into());
        let (s, _) = reduce(s, Intent::SubmitPrompt);
        assert!(s.current.is_none());
        assert!(s.generated_image.is_none());
        assert!(s.error.is_none());
    }

    #[test]
    fn submit_is_guarded() {
        let s = with_history(&[]);
        let (s, effect) = reduce(s, Intent::SetPrompt("   ".into()));
        assert!(effect.is_none());
        let (s, effect) = reduce(s, Intent::SubmitPrompt);
        assert!(effect.is_none());
        assert!(!s.is_generating);

        let (s, _) = reduce(s, Intent::SetPrompt("dusk".into()));
        let (s, first) = reduce(s, Intent::SubmitPrompt);
        assert!(first.is_some());
        let (_, second) = reduce(s, Intent::SubmitPrompt);
        assert!(second.is_none());
    }

    #[test]
    fn failure_sets_localized_error_and_clears_flag() {
        let mut s = with_history(&["a"]);
        s.language = Language::En;
        s.prompt = "x".into();
        s.is_editing = true;
        let (s, _) = reduce(s, Intent::SubmitPrompt);
        let (s, _) = reduce(
            s,
            Intent::PaletteGenerated {
                result: Err(GenerateError::Decode("bad".into())),
                stamp: stamp("never"),
            },
        );
        assert!(!s.is_generating);
        assert_eq!(s.error.as_deref(), Some(Language::En.text().error));
        assert_eq!(history_ids(&s), ["a"]);
        assert!(s.current.is_none());
        assert!(s.is_editing);
    }

    #[test]
    fn success_leaves_edit_mode() {
        let mut s = with_history(&["a"]);
        s.is_editing = true;
        let (s, _) = reduce(
            s,
            Intent::PaletteGenerated {
                result: Ok(draft()),
                stamp: stamp("b"),
            },
        );
        assert!(!s.is_editing);
    }

    #[test]
    fn manual_add_prepends_and_closes_form() {
        let s = apply(with_history(&["a"]), vec![Intent::OpenAddForm, Intent::ToggleEditing]);
        assert!(s.is_adding);

        let mut form = PaletteForm::new();
        form.name = "Sunset".into();
        for (i, c) in ["FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]
            .iter()
            .enumerate()
        {
            form.set_color(i, c);
        }
        let (s, effect) = reduce(
            s,
            Intent::ManualAdd {
                form,
                stamp: stamp("sunset"),
            },
        );
        assert!(effect.is_none());
        assert!(!s.is_adding);
        assert!(!s.is_editing);
        assert_eq!(s.active_tab, Tab::History);
        assert_eq!(history_ids(&s), ["sunset", "a"]);
        let hexes: Vec<&str> = s.history[0].colors.iter().map(|c| c.hex.as_str()).collect();
        assert_eq!(hexes, ["#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF"]);
    }

    #[test]
    fn invalid_manual_add_changes_nothing() {
        let s = apply(with_history(&["a"]), vec![Intent::OpenAddForm]);
        let mut form = PaletteForm::new();
        form.name = "Broken".into();
        form.set_color(0, "#12");
        let before = s.clone();
        let (s, _) = reduce(
            s,
            Intent::ManualAdd {
                form,
                stamp: stamp("x"),
            },
        );
        assert_eq!(s, before);
    }

    #[test]
    fn image_generation_requires_current_palette() {
        let (s, effect) = reduce(with_history(&["a"]), Intent::GenerateImage { keywords: None });
        assert!(effect.is_none());
        assert!(!s.is_generating_image);

        let s = apply(s, vec![Intent::Select(PaletteId::new("a"))]);
        let (s, effect) = reduce(
            s,
            Intent::GenerateImage {
                keywords: Some("  lighthouse ".into()),
            },
        );
        assert!(s.is_generating_image);
        match effect {
            Some(Effect::GenerateImage { palette, keywords }) => {
                assert_eq!(palette.id.as_str(), "a");
                assert_eq!(keywords.as_deref(), Some("lighthouse"));
            }
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn image_result_is_stored_for_current_palette() {
        let s = apply(
            with_history(&["a"]),
            vec![
                Intent::Select(PaletteId::new("a")),
                Intent::GenerateImage { keywords: None },
            ],
        );
        let (s, _) = reduce(
            s,
            Intent::ImageGenerated {
                palette_id: PaletteId::new("a"),
                result: Ok(MoodImage::new(None, "AAAA")),
            },
        );
        assert!(!s.is_generating_image);
        assert_eq!(s.generated_image.as_ref().unwrap().data, "AAAA");
    }

    #[test]
    fn image_failure_does_not_touch_main_error() {
        let s = apply(
            with_history(&["a"]),
            vec![
                Intent::Select(PaletteId::new("a")),
                Intent::GenerateImage { keywords: None },
            ],
        );
        let (s, _) = reduce(
            s,
            Intent::ImageGenerated {
                palette_id: PaletteId::new("a"),
                result: Err(GenerateError::NoImage),
            },
        );
        assert!(!s.is_generating_image);
        assert!(s.error.is_none());
        assert_eq!(s.image_error.as_deref(), Some(Language::En.text().image_error));
        assert!(s.generated_image.is_none());
    }

    #[test]
    fn stale_image_is_dropped() {
        let s = apply(
            with_history(&["a", "b"]),
            vec![
                Intent::Select(PaletteId::new("a")),
                Intent::GenerateImage { keywords: None },
                Intent::Select(PaletteId::new("b")),
            ],
        );
        let (s, _) = reduce(
            s,
            Intent::ImageGenerated {
                palette_id: PaletteId::new("a"),
                result: Ok(MoodImage::new(None, "AAAA")),
            },
        );
        assert!(!s.is_generating_image);
        assert!(s.generated_image.is_none());
    }

    #[test]
    fn select_clears_image_and_error() {
        let mut s = with_history(&["a", "b"]);
        s.current = Some(sample_palette("a"));
        s.generated_image = Some(MoodImage::new(None, "AAAA"));
        s.error = Some("boom".into());
        s.image_error = Some("img".into());
        let (s, _) = reduce(s, Intent::Select(PaletteId::new("b")));
        assert_eq!(s.current.as_ref().unwrap().id.as_str(), "b");
        assert!(s.generated_image.is_none());
        assert!(s.error.is_none());
        assert!(s.image_error.is_none());
    }

    #[test]
    fn select_finds_curated_palettes() {
        let (s, _) = reduce(with_history(&[]), Intent::Select(PaletteId::new("c1")));
        assert_eq!(s.current.unwrap().id.as_str(), "c1");
    }

    #[test]
    fn reset_returns_home() {
        let mut s = with_history(&["a"]);
        s.prompt = "forest".into();
        s.current = Some(sample_palette("a"));
        s.generated_image = Some(MoodImage::new(None, "AAAA"));
        s.error = Some("boom".into());
        let (s, _) = reduce(s, Intent::Reset);
        assert!(s.current.is_none());
        assert!(s.generated_image.is_none());
        assert!(s.error.is_none());
        assert!(s.prompt.is_empty());
        assert_eq!(history_ids(&s), ["a"]);
    }

    #[test]
    fn back_keeps_prompt() {
        let mut s = with_history(&["a"]);
        s.prompt = "forest".into();
        s.current = Some(sample_palette("a"));
        let (s, _) = reduce(s, Intent::Back);
        assert!(s.current.is_none());
        assert_eq!(s.prompt, "forest");
    }

    #[test]
    fn favorite_toggles_membership() {
        let s = with_history(&["a"]);
        let (s, _) = reduce(s, Intent::ToggleFavorite(PaletteId::new("a")));
        assert!(s.is_favorite(&PaletteId::new("a")));
        let (s, _) = reduce(s, Intent::ToggleFavorite(PaletteId::new("a")));
        assert!(!s.is_favorite(&PaletteId::new("a")));
        assert_eq!(history_ids(&s), ["a"]);
    }

    #[test]
    fn delete_requires_edit_mode_and_orphans_favorite() {
        let s = apply(
            with_history(&["a", "b", "c"]),
            vec![
                Intent::ToggleFavorite(PaletteId::new("b")),
                Intent::Delete(PaletteId::new("b")),
            ],
        );
        assert_eq!(history_ids(&s), ["a", "b", "c"]);

        let s = apply(
            s,
            vec![Intent::ToggleEditing, Intent::Delete(PaletteId::new("b"))],
        );
        assert_eq!(history_ids(&s), ["a", "c"]);
        assert!(s.is_favorite(&PaletteId::new("b")));
        assert_eq!(s.visible_history().len(), 2);
    }

    #[test]
    fn move_swaps_neighbours_and_stops_at_edges() {
        let s = apply(with_history(&["a", "b", "c", "d"]), vec![Intent::ToggleEditing]);

        let (s, _) = reduce(
            s,
            Intent::Move {
                index: 0,
                direction: Direction::Left,
            },
        );
        assert_eq!(history_ids(&s), ["a", "b", "c", "d"]);

        let (s, _) = reduce(
            s,
            Intent::Move {
                index: 3,
                direction: Direction::Right,
            },
        );
        assert_eq!(history_ids(&s), ["a", "b", "c", "d"]);

        let (s, _) = reduce(
            s,
            Intent::Move {
                index: 1,
                direction: Direction::Right,
            },
        );
        assert_eq!(history_ids(&s), ["a", "c", "b", "d"]);

        let (s, _) = reduce(
            s,
            Intent::Move {
                index: 3,
                direction: Direction::Left,
            },
        );
        assert_eq!(history_ids(&s), ["a", "c", "d", "b"]);
    }

    #[test]
    fn move_outside_edit_mode_is_ignored() {
        let (s, _) = reduce(
            with_history(&["a", "b"]),
            Intent::Move {
                index: 0,
                direction: Direction::Right,
            },
        );
        assert_eq!(history_ids(&s), ["a", "b"]);
    }

    #[test]
    fn edit_mode_freezes_display_order() {
        let s = apply(
            with_history(&["a", "b", "c", "d"]),
            vec![
                Intent::ToggleFavorite(PaletteId::new("b")),
                Intent::ToggleFavorite(PaletteId::new("d")),
            ],
        );
        let shown = |s: &SessionState| -> Vec<String> {
            s.visible_history().iter().map(|p| p.id.to_string()).collect()
        };
        assert_eq!(shown(&s), ["b", "d", "a", "c"]);
        let s = apply(s, vec![Intent::ToggleEditing]);
        assert_eq!(shown(&s), ["a", "b", "c", "d"]);
    }

    #[test]
    fn switching_to_trending_leaves_edit_mode() {
        let s = apply(
            with_history(&["a"]),
            vec![Intent::SetTab(Tab::History), Intent::ToggleEditing],
        );
        assert!(s.is_editing);
        let (s, _) = reduce(s, Intent::SetTab(Tab::History));
        assert!(s.is_editing);
        let (s, _) = reduce(s, Intent::SetTab(Tab::Trending));
        assert!(!s.is_editing);
    }
}
