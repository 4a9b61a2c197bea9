//! Change notifications emitted by the layout session
//!
//! Events are broadcast after each message has been fully processed, so
//! subscribers always see a consistent state.

use serde::Serialize;
use shell_core::{DeviceClass, LayoutType, Orientation, ResolvedTheme, SectionKey, Theme, Viewport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────
    ViewportChanged {
        viewport: Viewport,
        device: DeviceClass,
        orientation: Orientation,
    },

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    /// Intent and/or resolved theme changed
    ThemeChanged { theme: Theme, resolved: ResolvedTheme },

    // ─────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────
    SidebarChanged {
        open: bool,
        visible: bool,
        overlay: bool,
    },

    LayoutChanged { layout: LayoutType },

    // ─────────────────────────────────────────────────────────
    // Section / navigation
    // ─────────────────────────────────────────────────────────
    SectionChanged {
        previous: SectionKey,
        section: SectionKey,
    },

    RouteChanged { path: String, url: String },

    /// Accordion or dropdown state changed
    NavigationChanged {
        expanded: Vec<String>,
        dropdown: Option<String>,
    },

    Shutdown,
}

impl SessionEvent {
    /// Short label for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ViewportChanged { .. } => "viewport_changed",
            Self::ThemeChanged { .. } => "theme_changed",
            Self::SidebarChanged { .. } => "sidebar_changed",
            Self::LayoutChanged { .. } => "layout_changed",
            Self::SectionChanged { .. } => "section_changed",
            Self::RouteChanged { .. } => "route_changed",
            Self::NavigationChanged { .. } => "navigation_changed",
            Self::Shutdown => "shutdown",
        }
    }
}
