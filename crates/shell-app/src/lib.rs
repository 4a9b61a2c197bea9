//! shell-app - Layout session state and orchestration for Studio Shell
//!
//! Implements the TEA (The Elm Architecture) pattern for the shared layout
//! state: a `Message` goes through `handler::update`, which mutates
//! [`LayoutState`] and returns [`UpdateAction`]s that the [`LayoutSession`]
//! performs against its collaborators (platform, router, storage, auth).
//! Also hosts configuration loading, the navigation tree, the storage echo
//! watcher and signal handling.

pub mod actions;
pub mod auth;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod navigation;
pub mod observer;
pub mod platform;
pub mod router;
pub mod section;
pub mod session;
pub mod session_event;
pub mod signals;
pub mod state;
pub mod storage;
pub mod theme;
pub mod throttle;
pub mod viewport;
pub mod watcher;

// Re-export primary types
pub use actions::Collaborators;
pub use auth::{AuthProvider, StaticAuth};
pub use config::Settings;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use navigation::{NavTable, NavTree};
pub use observer::SessionObserver;
pub use platform::{Platform, VirtualDocument};
pub use router::{Router, UrlRouter};
pub use session::{LayoutSession, LayoutSnapshot};
pub use session_event::SessionEvent;
pub use state::{LayoutState, SessionPhase};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use watcher::StorageWatcher;
