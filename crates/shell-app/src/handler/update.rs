//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{LayoutState, SessionPhase};

use super::{keys::handle_key, navigation, section, sidebar, theme, viewport, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and actions for the session
pub fn update(state: &mut LayoutState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = SessionPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // Throttling happens in the session; reaching here means unthrottled
        Message::Resize(vp) | Message::ViewportChanged(vp) => {
            viewport::handle_viewport_changed(state, vp)
        }

        // ─────────────────────────────────────────────────────────
        // Theme
        // ─────────────────────────────────────────────────────────
        Message::SetTheme(theme) => theme::handle_set_theme(state, theme),
        Message::CycleTheme => UpdateResult::message(Message::SetTheme(state.theme.next())),
        Message::ColorSchemeChanged(scheme) => theme::handle_color_scheme_changed(state, scheme),
        Message::ThemeLoaded { stored } => theme::handle_theme_loaded(state, stored.as_deref()),

        // ─────────────────────────────────────────────────────────
        // Layout / sidebar
        // ─────────────────────────────────────────────────────────
        Message::SetLayoutType(layout) => section::handle_set_layout_type(state, layout),
        Message::OpenSidebar => sidebar::handle_open(state),
        Message::CloseSidebar => sidebar::handle_close(state),
        Message::ToggleSidebar => sidebar::handle_toggle(state),
        Message::BackdropClicked => sidebar::handle_backdrop_clicked(state),

        // ─────────────────────────────────────────────────────────
        // Section / routing
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(raw) => section::handle_select_section(state, &raw),
        Message::NavigateTo(path) => navigation::handle_navigate_to(state, path),
        Message::RouteChanged {
            path,
            section_param,
            stored_section,
        } => section::handle_route_changed(state, path, section_param, stored_section),
        Message::StorageChanged { key, value } => {
            if key == state.settings.storage.theme_key {
                theme::handle_storage_echo(state, value.as_deref())
            } else if key == state.settings.storage.section_key {
                section::handle_storage_echo(state, value.as_deref())
            } else {
                UpdateResult::none()
            }
        }

        // ─────────────────────────────────────────────────────────
        // Navigation tree
        // ─────────────────────────────────────────────────────────
        Message::ToggleNavEntry(key) => navigation::handle_toggle_entry(state, &key),
        Message::ToggleDropdown(id) => navigation::handle_toggle_dropdown(state, id),
        Message::CloseDropdowns => navigation::handle_close_dropdowns(state),
        Message::CursorUp => navigation::handle_cursor_up(state),
        Message::CursorDown => navigation::handle_cursor_down(state),
        Message::ActivateCursor => navigation::handle_activate_cursor(state),

        Message::Tick => UpdateResult::none(),
    }
}
