//! Theme handlers

use shell_core::prelude::*;
use shell_core::{ResolvedTheme, Theme};

use crate::state::LayoutState;
use crate::theme::{from_persisted, resolve};

use super::{UpdateAction, UpdateResult};

/// User picked a theme: persist the intent and apply the marker
pub fn handle_set_theme(state: &mut LayoutState, theme: Theme) -> UpdateResult {
    apply_intent(state, theme);
    UpdateResult::actions(vec![
        UpdateAction::PersistTheme(theme),
        UpdateAction::ApplyThemeMarker(state.resolved_theme),
    ])
}

/// OS preference changed; only a `system` intent follows it
pub fn handle_color_scheme_changed(state: &mut LayoutState, scheme: ResolvedTheme) -> UpdateResult {
    state.os_scheme = scheme;
    if state.theme != Theme::System || state.resolved_theme == scheme {
        return UpdateResult::none();
    }
    state.resolved_theme = scheme;
    UpdateResult::action(UpdateAction::ApplyThemeMarker(scheme))
}

/// Mount-time load of the persisted intent. Nothing is written back.
pub fn handle_theme_loaded(state: &mut LayoutState, stored: Option<&str>) -> UpdateResult {
    let theme = from_persisted(stored, state.settings.theme.default);
    apply_intent(state, theme);
    UpdateResult::action(UpdateAction::ApplyThemeMarker(state.resolved_theme))
}

/// Theme written by another tab/process. Already persisted, so only applied.
pub fn handle_storage_echo(state: &mut LayoutState, value: Option<&str>) -> UpdateResult {
    let Some(theme) = value.and_then(Theme::parse) else {
        debug!("Ignoring theme storage echo {:?}", value);
        return UpdateResult::none();
    };
    if theme == state.theme {
        return UpdateResult::none();
    }
    apply_intent(state, theme);
    UpdateResult::action(UpdateAction::ApplyThemeMarker(state.resolved_theme))
}

fn apply_intent(state: &mut LayoutState, theme: Theme) {
    state.theme = theme;
    state.resolved_theme = resolve(theme, state.os_scheme);
}
