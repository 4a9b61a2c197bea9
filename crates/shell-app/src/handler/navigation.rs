//! Navigation tree handlers: accordion, dropdowns, sidebar cursor

use shell_core::prelude::*;

use crate::message::Message;
use crate::state::LayoutState;

use super::{UpdateAction, UpdateResult};

pub fn handle_navigate_to(state: &mut LayoutState, path: String) -> UpdateResult {
    state.open_dropdown = None;
    if path.trim().is_empty() {
        return UpdateResult::none();
    }
    UpdateResult::action(UpdateAction::Navigate { path })
}

pub fn handle_toggle_entry(state: &mut LayoutState, key: &str) -> UpdateResult {
    let expanded = state.nav_expanded.toggle(key);
    trace!("Nav entry {} expanded={}", key, expanded);
    clamp_cursor(state);
    UpdateResult::none()
}

/// Opening a dropdown closes whichever one was open
pub fn handle_toggle_dropdown(state: &mut LayoutState, id: String) -> UpdateResult {
    state.open_dropdown = match state.open_dropdown.take() {
        Some(open) if open == id => None,
        _ => Some(id),
    };
    UpdateResult::none()
}

pub fn handle_close_dropdowns(state: &mut LayoutState) -> UpdateResult {
    state.open_dropdown = None;
    UpdateResult::none()
}

pub fn handle_cursor_up(state: &mut LayoutState) -> UpdateResult {
    state.sidebar_cursor = state.sidebar_cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut LayoutState) -> UpdateResult {
    state.sidebar_cursor += 1;
    clamp_cursor(state);
    UpdateResult::none()
}

/// Rows with children toggle; leaf rows navigate
pub fn handle_activate_cursor(state: &mut LayoutState) -> UpdateResult {
    let tree = state.nav_tree();
    let rows = tree.visible_rows();
    let Some(row) = rows.get(state.sidebar_cursor) else {
        return UpdateResult::none();
    };
    if row.has_children() {
        UpdateResult::message(Message::ToggleNavEntry(row.key.clone()))
    } else {
        UpdateResult::message(Message::NavigateTo(row.path.clone()))
    }
}

fn clamp_cursor(state: &mut LayoutState) {
    let rows = state.nav_tree().visible_rows().len();
    state.sidebar_cursor = state.sidebar_cursor.min(rows.saturating_sub(1));
}
