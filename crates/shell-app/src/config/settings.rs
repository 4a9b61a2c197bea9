//! Settings parser for `config.toml` and `navigation.toml`

use super::types::Settings;
use crate::navigation::NavTable;
use shell_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const NAVIGATION_FILENAME: &str = "navigation.toml";
const APP_DIR: &str = "studio-shell";

// ─────────────────────────────────────────────────────────────────────────────
// Directories
// ─────────────────────────────────────────────────────────────────────────────

/// Default configuration directory (`~/.config/studio-shell` on Linux)
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Default data directory, home of the storage file
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Resolve the storage file path; relative paths are placed in `data_dir`
pub fn storage_path(settings: &Settings, data_dir: &Path) -> PathBuf {
    if settings.storage.file.is_absolute() {
        settings.storage.file.clone()
    } else {
        data_dir.join(&settings.storage.file)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Load settings from `<config_dir>/config.toml`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(config_dir: &Path) -> Settings {
    let config_path = config_dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load a navigation table override from `<config_dir>/navigation.toml`
///
/// Returns `None` when the file is absent or invalid; callers fall back to
/// the built-in table.
pub fn load_navigation(config_dir: &Path) -> Option<NavTable> {
    let nav_path = config_dir.join(NAVIGATION_FILENAME);

    if !nav_path.exists() {
        return None;
    }

    match std::fs::read_to_string(&nav_path) {
        Ok(content) => match toml::from_str::<NavTable>(&content) {
            Ok(table) => {
                info!(
                    "Loaded navigation table from {:?} ({} sections)",
                    nav_path,
                    table.sections.len()
                );
                Some(table)
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", nav_path, e);
                None
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", nav_path, e);
            None
        }
    }
}

/// Create a commented default `config.toml` if none exists
pub fn init_config_dir(config_dir: &Path) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Studio Shell Configuration

[viewport]
resize_throttle_ms = 100     # At most one layout recompute per window

[viewport.breakpoints]
large_mobile = 480           # width < 480 is small-mobile
tablet = 768                 # width < 768 is mobile
desktop = 1024               # width >= 1024 is desktop

[theme]
default = "system"           # light | dark | system

[sections]
default = "main"
allowed = ["main", "lms", "admin", "payments", "finance", "store", "international"]
query_param = "section"

[storage]
enabled = true
file = "storage.toml"        # Relative to the data directory
theme_key = "theme"
section_key = "activeSection"
watch = true                 # Echo edits made by other shells
watch_debounce_ms = 250

[tui]
cell_width_px = 8
cell_height_px = 16
sidebar_width = 30
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}

/// Save settings to `<config_dir>/config.toml`
///
/// Uses atomic write (temp file + rename) for safety.
pub fn save_settings(config_dir: &Path, settings: &Settings) -> Result<()> {
    if !config_dir.exists() {
        std::fs::create_dir_all(config_dir)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    let temp_path = config_dir.join(".config.toml.tmp");

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;

    let full_content = format!("# Studio Shell Configuration\n\n{}", content);

    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;

    std::fs::rename(&temp_path, &config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}
