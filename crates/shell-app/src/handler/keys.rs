//! Key bindings

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::LayoutState;

/// Header dropdown holding the module selector
pub const MODULE_DROPDOWN: &str = "modules";

/// Header dropdown holding the user menu
pub const USER_DROPDOWN: &str = "user";

/// Convert a key press to a message
pub fn handle_key(state: &LayoutState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') | InputKey::Char('q') => Some(Message::Quit),

        InputKey::Esc => handle_escape(state),

        InputKey::Char('b') => Some(Message::ToggleSidebar),
        InputKey::Char('t') => Some(Message::CycleTheme),
        InputKey::Char('m') => Some(Message::ToggleDropdown(MODULE_DROPDOWN.to_string())),
        InputKey::Char('u') => Some(Message::ToggleDropdown(USER_DROPDOWN.to_string())),

        // Module selector shortcuts, in selector order
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            let modules = state.visible_modules();
            let module = modules.get(index)?;
            Some(Message::SelectSection(module.key.to_string()))
        }

        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Enter => Some(Message::ActivateCursor),

        _ => None,
    }
}

/// Escape closes the overlay sidebar first, then any open dropdown
fn handle_escape(state: &LayoutState) -> Option<Message> {
    if state.sidebar_is_overlay() && state.sidebar_open {
        Some(Message::CloseSidebar)
    } else if state.open_dropdown.is_some() {
        Some(Message::CloseDropdowns)
    } else {
        None
    }
}
