use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::app::{App, Message, Model};

use super::event_loop::ResizeDebouncer;

impl App {
    pub(super) fn handle_event(
        event: &Event,
        model: &Model,
        now_ms: u64,
        resize_debouncer: &mut ResizeDebouncer,
    ) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Resize(w, h) => {
                tracing::debug!(width = *w, height = *h, "resize queued");
                resize_debouncer.queue(*w, *h, now_ms);
                None
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: event::KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        match key.code {
            // Cursor
            KeyCode::Char('j') | KeyCode::Down => Some(Message::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Message::MoveUp),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::Char('g') | KeyCode::Home => Some(Message::JumpTop),
            KeyCode::Char('G') | KeyCode::End => Some(Message::JumpBottom),

            // Tree navigation
            KeyCode::Char('l') | KeyCode::Right | KeyCode::Enter => Some(Message::EnterDir),
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Backspace => Some(Message::GoToParent),
            KeyCode::Char('i') => Some(Message::SetVirtualRoot),
            KeyCode::Char('o') => Some(Message::ResetVirtualRoot),
            KeyCode::Char('s') => Some(Message::CycleSort),

            // Help
            KeyCode::Char('?') | KeyCode::F(1) => Some(Message::ToggleHelp),

            // Quit
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::Quit)
            }

            _ => None,
        }
    }
}
