use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, HomeFocus, View};
use crate::session::Direction;
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let sent = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => {
                        tx.blocking_send(Event::Input(InputEvent::Key(k)))
                    }
                    Ok(CtEvent::Mouse(m)) if mouse_enabled => {
                        tx.blocking_send(Event::Input(InputEvent::Mouse(m)))
                    }
                    Ok(CtEvent::Resize(_, _)) => tx.blocking_send(Event::Input(InputEvent::Resize)),
                    Ok(_) => Ok(()),
                    Err(e) => {
                        tracing::debug!("terminal read failed: {e}");
                        Ok(())
                    }
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match (state.view(), m.kind) {
            (View::Home, MouseEventKind::ScrollUp) => Some(Action::ListUp),
            (View::Home, MouseEventKind::ScrollDown) => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => map_key(state, k),
    }
}

fn map_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    if state.show_help {
        return match k.code {
            KeyCode::Char('q') => Some(Action::Quit),
            _ => Some(Action::ToggleHelp),
        };
    }
    match state.view() {
        View::AddForm => handle_add_form(k),
        View::Detail if state.editing_keywords => handle_text_entry(k, Action::FinishKeywords)
            .or(match k.code {
                KeyCode::Enter => Some(Action::GenerateImage),
                _ => None,
            }),
        View::Detail => handle_detail(k),
        View::Home => match state.home_focus {
            HomeFocus::Prompt => handle_prompt(k),
            HomeFocus::Browse => handle_browse(state, k),
        },
    }
}

/// Shared editing keys for single-line inputs. `Enter` is left to the caller.
fn handle_text_entry(k: KeyEvent, on_escape: Action) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(on_escape),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Char(c) if !k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::InputChar(c))
        }
        _ => None,
    }
}

fn handle_prompt(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusBrowse),
        KeyCode::F(1) => Some(Action::ToggleHelp),
        KeyCode::F(2) => Some(Action::CycleLanguage),
        _ => handle_text_entry(k, Action::FocusBrowse),
    }
}

fn handle_browse(state: &AppState, k: KeyEvent) -> Option<Action> {
    let editing = state.session.is_editing;
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if editing => Some(Action::ToggleEditing),
        KeyCode::Esc | KeyCode::Char('/') | KeyCode::Char('i') => Some(Action::FocusPrompt),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::ListUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::ListDown),
        KeyCode::Char('g') => Some(Action::GoTop),
        KeyCode::Char('G') => Some(Action::GoBottom),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::SwitchTab),

        KeyCode::Enter if !editing => Some(Action::Activate),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char('e') => Some(Action::ToggleEditing),
        KeyCode::Char('a') => Some(Action::OpenAddForm),

        // Reordering only exists in edit mode
        KeyCode::Char('d') | KeyCode::Delete if editing => Some(Action::DeleteSelected),
        KeyCode::Char('K') if editing => Some(Action::MoveSelected(Direction::Left)),
        KeyCode::Char('J') if editing => Some(Action::MoveSelected(Direction::Right)),

        KeyCode::Char('L') | KeyCode::F(2) => Some(Action::CycleLanguage),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_detail(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            Some(Action::Back)
        }
        KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::EditKeywords),
        KeyCode::Char('v') | KeyCode::Enter => Some(Action::GenerateImage),
        KeyCode::Char('x') => Some(Action::DiscardImage),
        KeyCode::Char('s') => Some(Action::Export),
        KeyCode::Char('f') => Some(Action::ToggleFavorite),
        KeyCode::Char(c @ '1'..='5') => Some(Action::CopyColor(c as usize - '1' as usize)),
        KeyCode::Char('L') | KeyCode::F(2) => Some(Action::CycleLanguage),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_add_form(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Enter => Some(Action::FormSubmit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FormPrevField),
        _ => handle_text_entry(k, Action::FormCancel),
    }
}
