//! Configuration file parsing for Studio Shell
//!
//! Supports:
//! - `config.toml` - Global settings
//! - `navigation.toml` - Optional navigation table override

pub mod settings;
pub mod types;

pub use settings::{
    default_config_dir, default_data_dir, init_config_dir, load_navigation, load_settings,
    save_settings, storage_path,
};
pub use types::*;
