//! Viewport handlers

use shell_core::prelude::*;
use shell_core::Viewport;

use crate::state::LayoutState;
use crate::viewport::classify;

use super::UpdateResult;

/// Classify new geometry. Identical dimensions are a no-op; any change that
/// lands on a mobile width closes the sidebar.
pub fn handle_viewport_changed(state: &mut LayoutState, viewport: Viewport) -> UpdateResult {
    if state.viewport == Some(viewport) {
        return UpdateResult::none();
    }

    let class = classify(Some(viewport), &state.settings.viewport.breakpoints);
    if class.device != state.device {
        debug!(
            "Device class {} -> {} at {}x{}",
            state.device.label(),
            class.device.label(),
            viewport.width,
            viewport.height
        );
    }

    state.viewport = Some(viewport);
    state.device = class.device;
    state.orientation = class.orientation;

    if class.device.is_mobile() && state.sidebar_open {
        state.sidebar_open = false;
    }

    UpdateResult::none()
}
