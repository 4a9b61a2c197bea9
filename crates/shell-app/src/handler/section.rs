//! Section handlers
//!
//! Every path that changes the active section also repairs the other
//! sources: the winning value is written back to storage and, when the page
//! carries a section parameter, to the URL.

use shell_core::prelude::*;
use shell_core::LayoutType;

use crate::section::{SectionResolution, SectionSource};
use crate::state::LayoutState;

use super::{UpdateAction, UpdateResult};

/// Explicit module selection: highest precedence, writes URL and storage
pub fn handle_select_section(state: &mut LayoutState, raw: &str) -> UpdateResult {
    let Some(resolution) = state.resolver.select(raw) else {
        return UpdateResult::none();
    };
    info!("Section selected: {}", resolution.section);
    UpdateResult::actions(apply_resolution(state, resolution, true))
}

/// Route changed (mount, navigation): URL, then storage, then default
pub fn handle_route_changed(
    state: &mut LayoutState,
    path: String,
    section_param: Option<String>,
    stored_section: Option<String>,
) -> UpdateResult {
    state.current_path = path;
    state.url_section = section_param;
    state.open_dropdown = None;

    let resolution = state
        .resolver
        .resolve(state.url_section.as_deref(), stored_section.as_deref());
    debug!(
        "Resolved section {} from {:?} for {}",
        resolution.section, resolution.source, state.current_path
    );

    let navigating = state.is_mounted();
    let mut actions = apply_resolution(state, resolution, navigating);
    // The marker is set once at mount even when the default section wins
    let marked = actions
        .iter()
        .any(|a| matches!(a, UpdateAction::SetSectionMarker(_)));
    if !navigating && !marked {
        actions.push(UpdateAction::SetSectionMarker(state.active_section.clone()));
    }

    auto_expand_route(state);
    UpdateResult::actions(actions)
}

/// Section written by another tab/process.
///
/// Applied like a persisted value only while the URL has no section
/// parameter. Otherwise the URL stays authoritative and storage is repaired.
pub fn handle_storage_echo(state: &mut LayoutState, value: Option<&str>) -> UpdateResult {
    let active = state.active_section.clone();

    if state.url_section.is_some() {
        if value == Some(active.as_str()) {
            return UpdateResult::none();
        }
        debug!("Section echo {:?} conflicts with URL, repairing storage", value);
        return UpdateResult::action(UpdateAction::PersistSection(active));
    }

    match state.resolver.from_persisted(value) {
        Some(section) if section == active => {
            if value == Some(active.as_str()) {
                UpdateResult::none()
            } else {
                UpdateResult::action(UpdateAction::PersistSection(active))
            }
        }
        Some(section) => {
            let resolution = SectionResolution {
                storage_needs_repair: value != Some(section.as_str()),
                url_needs_repair: true,
                section,
                source: SectionSource::Storage,
            };
            UpdateResult::actions(apply_resolution(state, resolution, false))
        }
        None => UpdateResult::action(UpdateAction::PersistSection(active)),
    }
}

/// Page changed its layout. A page that starts exposing the section
/// parameter gets it written if it is missing or stale.
pub fn handle_set_layout_type(state: &mut LayoutState, layout: LayoutType) -> UpdateResult {
    state.layout_type = layout;
    if !state.is_mounted() || !state.exposes_section_param() {
        return UpdateResult::none();
    }
    if state.url_section.as_deref() == Some(state.active_section.as_str()) {
        return UpdateResult::none();
    }
    state.url_section = Some(state.active_section.to_string());
    UpdateResult::action(UpdateAction::ReplaceSectionQuery(
        state.active_section.clone(),
    ))
}

/// Commit a resolution and collect the repair actions.
///
/// `opens_sidebar` marks navigation between modules, which reveals the
/// sidebar so the new contextual entries are visible.
fn apply_resolution(
    state: &mut LayoutState,
    resolution: SectionResolution,
    opens_sidebar: bool,
) -> Vec<UpdateAction> {
    let section = resolution.section;
    let changed = section != state.active_section;
    let mut actions = Vec::new();

    if resolution.storage_needs_repair {
        actions.push(UpdateAction::PersistSection(section.clone()));
    }
    if resolution.url_needs_repair && state.exposes_section_param() {
        state.url_section = Some(section.to_string());
        actions.push(UpdateAction::ReplaceSectionQuery(section.clone()));
    }

    if changed {
        state.active_section = section.clone();
        state.open_dropdown = None;
        state.sidebar_cursor = 0;
        if opens_sidebar {
            state.sidebar_open = true;
        }
        auto_expand_route(state);
        actions.push(UpdateAction::SetSectionMarker(section));
    }

    actions
}

/// Force-expand entries leading to the current route (never collapses)
fn auto_expand_route(state: &mut LayoutState) {
    let table = state.nav_table.clone();
    let route = state.current_path.clone();
    let mut opened = state.nav_expanded.auto_expand(&table.global, &route);
    opened.extend(
        state
            .nav_expanded
            .auto_expand(table.contextual(&state.active_section), &route),
    );
    if !opened.is_empty() {
        debug!("Auto-expanded {:?} for {}", opened, route);
    }
}
