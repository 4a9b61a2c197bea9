//! Layout state (Model in TEA pattern)

use std::sync::Arc;

use shell_core::{
    DeviceClass, DeviceFlags, LayoutType, Orientation, PermissionSet, ResolvedTheme, SectionKey,
    Theme, User, Viewport,
};

use crate::config::Settings;
use crate::navigation::{build_tree, ModuleEntry, NavExpansion, NavTable, NavTree, TreeInputs};
use crate::section::SectionResolver;
use crate::theme;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Sources are being read; section changes do not open the sidebar yet
    #[default]
    Mounting,
    Running,
    Quitting,
}

/// Complete layout state for one shell session
#[derive(Debug, Clone)]
pub struct LayoutState {
    pub phase: SessionPhase,

    pub settings: Settings,
    pub nav_table: Arc<NavTable>,
    pub resolver: SectionResolver,

    // ─────────────────────────────────────────────────────────
    // Viewport
    // ─────────────────────────────────────────────────────────
    /// `None` until the first geometry reading
    pub viewport: Option<Viewport>,
    pub device: DeviceClass,
    pub orientation: Orientation,

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    pub theme: Theme,
    pub resolved_theme: ResolvedTheme,
    /// Last known OS preference
    pub os_scheme: ResolvedTheme,

    // ─────────────────────────────────────────────────────────
    // Layout / sidebar
    // ─────────────────────────────────────────────────────────
    pub layout_type: LayoutType,
    /// Tracked on every device; only drives visibility off-desktop
    pub sidebar_open: bool,
    /// Row index into the visible navigation rows (keyboard focus)
    pub sidebar_cursor: usize,

    // ─────────────────────────────────────────────────────────
    // Section / route
    // ─────────────────────────────────────────────────────────
    pub active_section: SectionKey,
    /// Raw section parameter of the current URL as last observed
    pub url_section: Option<String>,
    pub current_path: String,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    pub nav_expanded: NavExpansion,
    /// At most one header dropdown is open
    pub open_dropdown: Option<String>,

    pub user: Option<User>,
    pub permissions: PermissionSet,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::with_settings(Settings::default(), Arc::new(crate::navigation::default_table()))
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings, nav_table: Arc<NavTable>) -> Self {
        let theme = settings.theme.default;
        let os_scheme = ResolvedTheme::default();
        Self {
            phase: SessionPhase::Mounting,
            resolver: SectionResolver::from_settings(&settings.sections),
            active_section: settings.sections.default_key(),
            settings,
            nav_table,
            viewport: None,
            device: DeviceClass::default(),
            orientation: Orientation::default(),
            theme,
            resolved_theme: theme::resolve(theme, os_scheme),
            os_scheme,
            layout_type: LayoutType::default(),
            sidebar_open: false,
            sidebar_cursor: 0,
            url_section: None,
            current_path: "/".to_string(),
            nav_expanded: NavExpansion::new(),
            open_dropdown: None,
            user: None,
            permissions: PermissionSet::default(),
        }
    }

    /// Set the signed-in user; the permission set is taken from it once
    pub fn set_user(&mut self, user: Option<User>) {
        self.permissions = user
            .as_ref()
            .map(User::permission_set)
            .unwrap_or_default();
        self.user = user;
    }

    pub fn is_mounted(&self) -> bool {
        self.phase != SessionPhase::Mounting
    }

    pub fn should_quit(&self) -> bool {
        self.phase == SessionPhase::Quitting
    }

    pub fn device_flags(&self) -> DeviceFlags {
        self.device.flags()
    }

    /// Whether the sidebar is drawn at all
    pub fn sidebar_visible(&self) -> bool {
        if !self.layout_type.has_chrome() {
            return false;
        }
        self.device.is_desktop() || self.sidebar_open
    }

    /// Off-desktop the sidebar floats over the page behind a backdrop
    pub fn sidebar_is_overlay(&self) -> bool {
        !self.device.is_desktop()
    }

    /// Pages with the dashboard chrome carry the section in their URL
    pub fn exposes_section_param(&self) -> bool {
        self.layout_type.has_chrome()
    }

    pub fn nav_tree(&self) -> NavTree {
        build_tree(TreeInputs {
            table: &self.nav_table,
            section: &self.active_section,
            permissions: &self.permissions,
            expansion: &self.nav_expanded,
            route: &self.current_path,
        })
    }

    /// Module selector entries the user may open, in selector order
    pub fn visible_modules(&self) -> Vec<&ModuleEntry> {
        self.nav_table.visible_modules(&self.permissions).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = LayoutState::new();
        assert_eq!(state.device, DeviceClass::Desktop);
        assert_eq!(state.theme, Theme::System);
        assert_eq!(state.active_section.as_str(), "main");
        assert!(!state.sidebar_open);
        assert!(!state.is_mounted());
    }

    #[test]
    fn test_sidebar_always_visible_on_desktop() {
        let mut state = LayoutState::new();
        state.device = DeviceClass::Desktop;
        state.sidebar_open = false;
        assert!(state.sidebar_visible());
        assert!(!state.sidebar_is_overlay());

        state.device = DeviceClass::Tablet;
        assert!(!state.sidebar_visible());
        state.sidebar_open = true;
        assert!(state.sidebar_visible());
        assert!(state.sidebar_is_overlay());
    }

    #[test]
    fn test_no_sidebar_outside_dashboard_layout() {
        let mut state = LayoutState::new();
        state.layout_type = LayoutType::Auth;
        assert!(!state.sidebar_visible());
        assert!(!state.exposes_section_param());
    }

    #[test]
    fn test_set_user_takes_permissions() {
        let mut state = LayoutState::new();
        state.set_user(Some(User::new("u-1", "Ana").with_permissions(["finance.view"])));
        assert!(state.permissions.contains("finance.view"));

        state.set_user(None);
        assert!(state.permissions.is_empty());
    }

    #[test]
    fn test_configured_default_theme() {
        let mut settings = Settings::default();
        settings.theme.default = Theme::Dark;
        let state = LayoutState::with_settings(settings, Arc::new(NavTable::default()));
        assert_eq!(state.theme, Theme::Dark);
        assert_eq!(state.resolved_theme, ResolvedTheme::Dark);
    }
}
