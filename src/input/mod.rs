use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, LyricsMode, Screen};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>, mouse_enabled: bool) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        if k.kind == KeyEventKind::Press
                            && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err() {
                                break;
                            }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if mouse_enabled
                            && tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                                break;
                            }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Resize)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(Action::ListUp),
            MouseEventKind::ScrollDown => Some(Action::ListDown),
            _ => None,
        },
        InputEvent::Key(k) => {
            // Text-entry contexts capture everything first.
            if state.prompt.is_some() {
                return handle_prompt(k);
            }
            if state.lyrics.mode == LyricsMode::Editing {
                return handle_editor(k);
            }
            handle_normal_mode(state, k)
        }
    }
}

fn handle_prompt(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::PromptCancel),
        KeyCode::Enter => Some(Action::PromptSubmit),
        KeyCode::Backspace => Some(Action::PromptBackspace),
        KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::PromptClear)
        }
        KeyCode::Char(c) => Some(Action::PromptChar(c)),
        _ => None,
    }
}

fn handle_editor(k: crossterm::event::KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::EditorCancel),
        KeyCode::Char('s') if k.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::EditorSave)
        }
        KeyCode::Enter => Some(Action::EditorNewline),
        KeyCode::Backspace => Some(Action::EditorBackspace),
        KeyCode::Char(c) => Some(Action::EditorChar(c)),
        _ => None,
    }
}

fn handle_normal_mode(state: &AppState, k: crossterm::event::KeyEvent) -> Option<Action> {
    // Screen-specific bindings before the shared set.
    match state.screen {
        Screen::Library => match k.code {
            KeyCode::Char('a') => return Some(Action::OpenSongPrompt),
            KeyCode::Enter => return Some(Action::Activate),
            KeyCode::Up | KeyCode::Char('k') => return Some(Action::ListUp),
            KeyCode::Down | KeyCode::Char('j') => return Some(Action::ListDown),
            KeyCode::Char('g') => return Some(Action::GoTop),
            KeyCode::Char('G') => return Some(Action::GoBottom),
            KeyCode::Char('d') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::PageDown)
            }
            KeyCode::Char('u') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Action::PageUp)
            }
            _ => {}
        },
        Screen::Lyrics => match k.code {
            KeyCode::Char('e') => return Some(Action::EditLyrics),
            KeyCode::Char('o') => return Some(Action::OpenLyricsPrompt),
            _ => {}
        },
        Screen::Help => {}
    }

    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Sidebar / screen switching
        KeyCode::Left | KeyCode::Char('h') => Some(Action::SidebarUp),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::SidebarDown),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char('1') => Some(Action::SetScreen(Screen::Library)),
        KeyCode::Char('2') => Some(Action::SetScreen(Screen::Lyrics)),
        KeyCode::Char('3') => Some(Action::SetScreen(Screen::Help)),

        // Playback navigation
        KeyCode::Char('n') => Some(Action::PlayNext),
        KeyCode::Char('p') => Some(Action::PlayPrev),

        // Playback
        KeyCode::Char(' ') => Some(Action::TogglePause),
        KeyCode::Char('=') | KeyCode::Char('+') => Some(Action::VolumeUp),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::VolumeDown),
        KeyCode::Char('m') => Some(Action::ToggleMute),
        KeyCode::Char(']') => Some(Action::SeekForward),
        KeyCode::Char('[') => Some(Action::SeekBack),

        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}
