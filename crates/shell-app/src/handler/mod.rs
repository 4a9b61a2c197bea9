//! Handler module - TEA update function and message handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `viewport`: Geometry classification and mobile auto-close
//! - `theme`: Theme intent, OS scheme and mount-time loading
//! - `sidebar`: Open/close/toggle and backdrop handling
//! - `section`: Section selection, route resolution and storage echoes
//! - `navigation`: Accordion, dropdowns and the sidebar cursor
//! - `keys`: Key bindings

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod section;
pub(crate) mod sidebar;
pub(crate) mod theme;
pub(crate) mod update;
pub(crate) mod viewport;


use shell_core::{ResolvedTheme, SectionKey, Theme};

use crate::message::Message;

pub use keys::{MODULE_DROPDOWN, USER_DROPDOWN};
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Side effects the session performs against its collaborators after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Write the theme intent to storage
    PersistTheme(Theme),

    /// Replace the document theme marker
    ApplyThemeMarker(ResolvedTheme),

    /// Write the active section to storage
    PersistSection(SectionKey),

    /// Rewrite the section query parameter in place
    ReplaceSectionQuery(SectionKey),

    /// Reflect the active section on the document (debug attribute)
    SetSectionMarker(SectionKey),

    /// Ask the router to navigate; the session follows up with `RouteChanged`
    Navigate { path: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the session to perform, in order
    pub actions: Vec<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            actions: Vec::new(),
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            actions: vec![action],
        }
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            message: None,
            actions,
        }
    }
}
