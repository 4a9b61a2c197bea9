//! Session assembly shared by the TUI and headless front-ends
//!
//! Loads configuration and the navigation table, then wires the collaborators
//! (document, router, storage, auth) into a [`LayoutSession`].

use std::path::PathBuf;

use shell_app::auth::StaticAuth;
use shell_app::config::{self, Settings};
use shell_app::navigation::default_table;
use shell_app::storage::Storage;
use shell_app::{
    Collaborators, FileStorage, LayoutSession, StorageWatcher, UrlRouter, VirtualDocument,
};
use shell_core::prelude::*;
use shell_core::{LayoutType, ResolvedTheme, User, Viewport};

/// Everything the command line decides about a session
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub url: String,
    /// `None` uses the platform config directory
    pub config_dir: Option<PathBuf>,
    /// `None` launches anonymously (the session redirects to sign-in)
    pub user: Option<User>,
    pub layout: LayoutType,
    /// Disable persistence entirely
    pub no_storage: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            url: "http://localhost/dashboard".to_string(),
            config_dir: None,
            user: Some(User::new("local", "Studio Admin")),
            layout: LayoutType::Dashboard,
            no_storage: false,
        }
    }
}

/// Initial platform readings
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformProbe {
    pub viewport: Option<Viewport>,
    pub color_scheme: ResolvedTheme,
}

/// An unmounted session plus its optional storage watcher
pub struct Assembled {
    pub session: LayoutSession,
    pub watcher: Option<StorageWatcher>,
    pub document: VirtualDocument,
}

impl LaunchOptions {
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir
            .clone()
            .unwrap_or_else(config::default_config_dir)
    }

    /// Build the session. `probe` reads the platform once settings are known.
    /// Only an unparsable URL is an error.
    pub fn assemble(&self, probe: impl FnOnce(&Settings) -> PlatformProbe) -> Result<Assembled> {
        let config_dir = self.config_dir();
        let settings = config::load_settings(&config_dir);
        let probe = probe(&settings);
        let table = config::load_navigation(&config_dir).unwrap_or_else(default_table);

        let router = UrlRouter::parse(&self.url)?;
        let document = VirtualDocument::new(probe.viewport, probe.color_scheme);

        let mut watcher = None;
        let storage: Option<Box<dyn Storage>> = if settings.storage.enabled && !self.no_storage {
            let path = config::storage_path(&settings, &config::default_data_dir());
            info!("Storage file: {}", path.display());
            if settings.storage.watch {
                watcher = Some(
                    StorageWatcher::new(path.clone())
                        .with_debounce_ms(settings.storage.watch_debounce_ms),
                );
            }
            Some(Box::new(FileStorage::open(path)))
        } else {
            info!("Storage disabled, preferences are session-only");
            None
        };

        let auth = match &self.user {
            Some(user) => StaticAuth::signed_in(user.clone()),
            None => StaticAuth::anonymous(),
        };

        let collaborators = Collaborators {
            platform: Box::new(document.clone()),
            router: Box::new(router),
            storage,
            auth: Box::new(auth),
        };

        let session = LayoutSession::new(settings, table, collaborators).with_layout(self.layout);
        Ok(Assembled {
            session,
            watcher,
            document,
        })
    }
}
