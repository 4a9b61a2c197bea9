//! Core domain type definitions

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Viewport geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Window inner size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Portrait when the window is at least as tall as it is wide
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

/// Width thresholds separating the device classes.
///
/// Each threshold is the first width that belongs to the larger class, so
/// `width < large_mobile` is small-mobile and `width >= desktop` is desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    #[serde(default = "default_large_mobile")]
    pub large_mobile: u32,
    #[serde(default = "default_tablet")]
    pub tablet: u32,
    #[serde(default = "default_desktop")]
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            large_mobile: default_large_mobile(),
            tablet: default_tablet(),
            desktop: default_desktop(),
        }
    }
}

fn default_large_mobile() -> u32 {
    480
}

fn default_tablet() -> u32 {
    768
}

fn default_desktop() -> u32 {
    1024
}

/// Mutually exclusive device bucket derived from viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    SmallMobile,
    LargeMobile,
    Tablet,
    /// Also the classification used before any geometry is known
    #[default]
    Desktop,
}

impl DeviceClass {
    /// Classify a width against the given breakpoints
    pub fn from_width(width: u32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.large_mobile {
            DeviceClass::SmallMobile
        } else if width < breakpoints.tablet {
            DeviceClass::LargeMobile
        } else if width < breakpoints.desktop {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::SmallMobile | DeviceClass::LargeMobile)
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }

    /// Expanded boolean view consumed by renderers
    pub fn flags(&self) -> DeviceFlags {
        DeviceFlags {
            is_small_mobile: *self == DeviceClass::SmallMobile,
            is_large_mobile: *self == DeviceClass::LargeMobile,
            is_mobile: self.is_mobile(),
            is_tablet: *self == DeviceClass::Tablet,
            is_desktop: self.is_desktop(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeviceClass::SmallMobile => "small-mobile",
            DeviceClass::LargeMobile => "large-mobile",
            DeviceClass::Tablet => "tablet",
            DeviceClass::Desktop => "desktop",
        }
    }
}

/// Boolean flag form of [`DeviceClass`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceFlags {
    pub is_small_mobile: bool,
    pub is_large_mobile: bool,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_portrait(&self) -> bool {
        matches!(self, Orientation::Portrait)
    }

    pub fn is_landscape(&self) -> bool {
        !self.is_portrait()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

/// User theme intent (persisted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    /// Parse a stored or typed value; unknown values yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "system" => Some(Theme::System),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Light → Dark → System → Light
    pub fn next(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete theme applied to the document (also the OS color scheme)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "light" => Some(ResolvedTheme::Light),
            "dark" => Some(ResolvedTheme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    /// The marker that must be removed when this one is applied
    pub fn opposite(&self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

impl std::fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Page layout
// ─────────────────────────────────────────────────────────────────────────────

/// Page-level layout mode, chosen by the page on mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutType {
    #[default]
    Dashboard,
    Minimal,
    Auth,
    Marketing,
}

impl LayoutType {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Some(LayoutType::Dashboard),
            "minimal" => Some(LayoutType::Minimal),
            "auth" => Some(LayoutType::Auth),
            "marketing" => Some(LayoutType::Marketing),
            _ => None,
        }
    }

    /// Only the dashboard layout renders the header/sidebar chrome
    pub fn has_chrome(&self) -> bool {
        matches!(self, LayoutType::Dashboard)
    }
}
