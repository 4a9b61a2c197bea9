//! Sidebar handlers
//!
//! The open flag is tracked on every device. Renderers decide visibility via
//! `LayoutState::sidebar_visible`, which ignores the flag on desktop.

use crate::state::LayoutState;

use super::UpdateResult;

pub fn handle_open(state: &mut LayoutState) -> UpdateResult {
    state.sidebar_open = true;
    UpdateResult::none()
}

pub fn handle_close(state: &mut LayoutState) -> UpdateResult {
    state.sidebar_open = false;
    UpdateResult::none()
}

pub fn handle_toggle(state: &mut LayoutState) -> UpdateResult {
    state.sidebar_open = !state.sidebar_open;
    UpdateResult::none()
}

/// The backdrop only exists behind an open overlay
pub fn handle_backdrop_clicked(state: &mut LayoutState) -> UpdateResult {
    if state.sidebar_is_overlay() && state.sidebar_open {
        state.sidebar_open = false;
    }
    UpdateResult::none()
}
