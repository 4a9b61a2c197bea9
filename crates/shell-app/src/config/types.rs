//! Configuration types for Studio Shell
//!
//! Defines:
//! - `Settings` - Global shell settings (`config.toml`)
//! - Per-area sub-settings for viewport, theme, sections, storage and the TUI

use serde::{Deserialize, Serialize};
use shell_core::{Breakpoints, SectionKey, Theme, DEFAULT_SECTION, KNOWN_SECTIONS};
use std::path::PathBuf;
use std::time::Duration;

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub viewport: ViewportSettings,

    #[serde(default)]
    pub theme: ThemeSettings,

    #[serde(default)]
    pub sections: SectionSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub tui: TuiSettings,
}

/// Device classification settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewportSettings {
    #[serde(default)]
    pub breakpoints: Breakpoints,

    /// Resize events are coalesced to one recompute per window
    #[serde(default = "default_resize_throttle_ms")]
    pub resize_throttle_ms: u64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            resize_throttle_ms: default_resize_throttle_ms(),
        }
    }
}

impl ViewportSettings {
    pub fn throttle_window(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms)
    }
}

fn default_resize_throttle_ms() -> u64 {
    100
}

/// Theme settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeSettings {
    /// Intent used when nothing valid is persisted
    #[serde(default)]
    pub default: Theme,
}

/// Section resolution settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionSettings {
    /// Section used when neither URL nor storage provides one
    #[serde(default = "default_section")]
    pub default: String,

    /// Persisted values outside this list are discarded on read
    #[serde(default = "default_allowed_sections")]
    pub allowed: Vec<String>,

    /// Name of the URL query parameter carrying the section
    #[serde(default = "default_query_param")]
    pub query_param: String,
}

impl Default for SectionSettings {
    fn default() -> Self {
        Self {
            default: default_section(),
            allowed: default_allowed_sections(),
            query_param: default_query_param(),
        }
    }
}

impl SectionSettings {
    /// Normalized default, falling back to `main` when misconfigured
    pub fn default_key(&self) -> SectionKey {
        SectionKey::parse(&self.default).unwrap_or_default()
    }

    /// Normalized allow-list; invalid entries are skipped
    pub fn allowed_keys(&self) -> Vec<SectionKey> {
        self.allowed
            .iter()
            .filter_map(|s| SectionKey::parse(s))
            .collect()
    }
}

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

fn default_allowed_sections() -> Vec<String> {
    KNOWN_SECTIONS.iter().map(|s| (*s).to_string()).collect()
}

fn default_query_param() -> String {
    "section".to_string()
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// When false the session runs with no storage backend at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Storage file; relative paths resolve against the data directory
    #[serde(default = "default_storage_file")]
    pub file: PathBuf,

    #[serde(default = "default_theme_key")]
    pub theme_key: String,

    #[serde(default = "default_section_key")]
    pub section_key: String,

    /// Echo external edits of the storage file into the running session
    #[serde(default = "default_true")]
    pub watch: bool,

    #[serde(default = "default_watch_debounce_ms")]
    pub watch_debounce_ms: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            file: default_storage_file(),
            theme_key: default_theme_key(),
            section_key: default_section_key(),
            watch: true,
            watch_debounce_ms: default_watch_debounce_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_storage_file() -> PathBuf {
    PathBuf::from("storage.toml")
}

fn default_theme_key() -> String {
    "theme".to_string()
}

fn default_section_key() -> String {
    "activeSection".to_string()
}

fn default_watch_debounce_ms() -> u64 {
    250
}

/// Terminal front-end settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuiSettings {
    /// CSS pixels represented by one terminal column
    #[serde(default = "default_cell_width_px")]
    pub cell_width_px: u32,

    /// CSS pixels represented by one terminal row
    #[serde(default = "default_cell_height_px")]
    pub cell_height_px: u32,

    /// Sidebar width in columns when rendered inline
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            cell_width_px: default_cell_width_px(),
            cell_height_px: default_cell_height_px(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

fn default_cell_width_px() -> u32 {
    8
}

fn default_cell_height_px() -> u32 {
    16
}

fn default_sidebar_width() -> u16 {
    30
}
