//! Studio Shell library
//!
//! Layout and navigation shell for the wellness studio admin portal. The
//! binary picks a front-end (terminal UI or headless NDJSON); both drive the
//! same [`shell_app::LayoutSession`].

pub mod headless;
pub mod launch;

pub use headless::runner::run_headless;
pub use launch::{Assembled, LaunchOptions, PlatformProbe};

use shell_core::prelude::*;

/// Run the terminal UI
pub async fn run_tui(options: &LaunchOptions) -> Result<()> {
    let assembled = options.assemble(|settings| PlatformProbe {
        viewport: shell_tui::terminal::current_viewport(&settings.tui),
        color_scheme: shell_tui::terminal::detect_color_scheme(),
    })?;

    let result = shell_tui::run(assembled.session, assembled.watcher).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    result
}

/// Run headless with an explicit initial geometry and OS scheme
pub async fn run_headless_with(options: &LaunchOptions, probe: PlatformProbe) -> Result<()> {
    let assembled = options.assemble(|_| probe)?;
    run_headless(assembled.session, assembled.watcher).await
}
