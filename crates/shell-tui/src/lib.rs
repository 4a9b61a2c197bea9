//! shell-tui - Terminal UI for Studio Shell
//!
//! Renders a [`shell_app::LayoutSession`] with ratatui: header chrome,
//! navigation sidebar, header dropdowns and the page area. Terminal resizes
//! become viewport readings, so the layout reacts the same way a browser
//! window would.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
