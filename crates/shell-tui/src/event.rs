//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use shell_app::config::TuiSettings;
use shell_app::message::Message;
use shell_app::InputKey;
use shell_core::prelude::*;
use std::time::Duration;

use crate::terminal::cells_to_viewport;

/// Default poll timeout (20 FPS)
pub const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        _ => None,
    }
}

/// Convert one terminal event to a message
pub fn event_to_message(event: Event, settings: &TuiSettings) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        Event::Resize(cols, rows) => Some(Message::Resize(cells_to_viewport(cols, rows, settings))),
        _ => None,
    }
}

/// Poll for terminal events; a timeout yields `Message::Tick`
pub fn poll(timeout: Duration, settings: &TuiSettings) -> Result<Option<Message>> {
    if event::poll(timeout)? {
        Ok(event_to_message(event::read()?, settings))
    } else {
        Ok(Some(Message::Tick))
    }
}
