//! # shell-core - Core Domain Types
//!
//! Foundation crate for Studio Shell. Provides the layout domain types,
//! error handling and logging setup shared by every other crate.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing, toml).
//!
//! ## Public API
//!
//! ### Layout Types (`types`)
//! - [`Viewport`], [`Breakpoints`] - Window geometry and device thresholds
//! - [`DeviceClass`], [`DeviceFlags`], [`Orientation`] - Derived device buckets
//! - [`Theme`], [`ResolvedTheme`] - Theme intent vs. applied theme
//! - [`LayoutType`] - Page-level layout mode
//!
//! ### Sections (`section`)
//! - [`SectionKey`] - Normalized, lower-case module key
//!
//! ### Permissions (`permissions`)
//! - [`PermissionSet`], [`User`]
//!
//! ### Error Handling (`error`)
//! - [`Error`], [`Result`], [`ResultExt`]
//!
//! ## Prelude
//!
//! ```rust
//! use shell_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod permissions;
pub mod prelude;
pub mod section;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use permissions::{PermissionSet, User};
pub use section::{SectionKey, DEFAULT_SECTION, KNOWN_SECTIONS};
pub use types::{
    Breakpoints, DeviceClass, DeviceFlags, LayoutType, Orientation, ResolvedTheme, Theme,
    Viewport,
};
