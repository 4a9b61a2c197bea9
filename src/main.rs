//! Studio Shell - layout and navigation shell for the studio admin portal
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use shell_core::prelude::*;
use shell_core::{LayoutType, ResolvedTheme, User, Viewport};
use studio_shell::{LaunchOptions, PlatformProbe};

/// Studio Shell - layout and navigation shell
#[derive(Parser, Debug)]
#[command(name = "studio-shell")]
#[command(about = "Layout and navigation shell for the studio admin portal", long_about = None)]
struct Args {
    /// Initial URL (path plus optional `?section=`)
    #[arg(long, default_value = "http://localhost/dashboard")]
    url: String,

    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Write a default config.toml into the config directory and exit
    #[arg(long)]
    init_config: bool,

    /// Display name of the signed-in user
    #[arg(long, default_value = "Studio Admin")]
    user: String,

    /// Grant a permission (repeatable), e.g. `-p finance.view`
    #[arg(short = 'p', long = "permission", value_name = "PERMISSION")]
    permissions: Vec<String>,

    /// Start signed out
    #[arg(long, conflicts_with_all = ["user", "permissions"])]
    anonymous: bool,

    /// Page layout: dashboard, minimal, auth or marketing
    #[arg(long, default_value = "dashboard", value_parser = parse_layout)]
    layout: LayoutType,

    /// Keep preferences in memory only
    #[arg(long)]
    no_storage: bool,

    /// Run in headless mode (NDJSON on stdin/stdout, no TUI)
    #[arg(long)]
    headless: bool,

    /// Headless: initial viewport as WIDTHxHEIGHT in pixels
    #[arg(long, value_parser = parse_viewport, requires = "headless")]
    viewport: Option<Viewport>,

    /// Headless: initial OS color scheme
    #[arg(long, default_value = "light", value_parser = parse_scheme)]
    color_scheme: ResolvedTheme,
}

fn parse_layout(raw: &str) -> std::result::Result<LayoutType, String> {
    LayoutType::parse(raw).ok_or_else(|| format!("unknown layout '{raw}'"))
}

fn parse_scheme(raw: &str) -> std::result::Result<ResolvedTheme, String> {
    ResolvedTheme::parse(raw).ok_or_else(|| format!("expected light or dark, got '{raw}'"))
}

fn parse_viewport(raw: &str) -> std::result::Result<Viewport, String> {
    let (w, h) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{raw}'"))?;
    let width = w.trim().parse().map_err(|_| format!("bad width '{w}'"))?;
    let height = h.trim().parse().map_err(|_| format!("bad height '{h}'"))?;
    Ok(Viewport::new(width, height))
}

impl Args {
    fn launch_options(&self) -> LaunchOptions {
        let user = (!self.anonymous).then(|| {
            User::new("local", self.user.clone()).with_permissions(self.permissions.iter().cloned())
        });
        LaunchOptions {
            url: self.url.clone(),
            config_dir: self.config_dir.clone(),
            user,
            layout: self.layout,
            no_storage: self.no_storage,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    shell_core::logging::init()?;

    let options = args.launch_options();

    if args.init_config {
        let dir = options.config_dir();
        shell_app::config::init_config_dir(&dir)
            .with_context(|| format!("Failed to initialise {}", dir.display()))?;
        eprintln!("Wrote default configuration to {}", dir.display());
        return Ok(());
    }

    let result = if args.headless {
        let probe = PlatformProbe {
            viewport: args.viewport,
            color_scheme: args.color_scheme,
        };
        studio_shell::run_headless_with(&options, probe).await
    } else {
        studio_shell::run_tui(&options).await
    };

    info!("Studio Shell exiting");
    result
}
