//! Theme system for the terminal shell.
//!
//! - `palette` - Light and dark color sets
//! - `styles` - Semantic style builders over a palette

pub mod palette;
pub mod styles;

pub use palette::Palette;
