//! LayoutSession - the one shared layout state per shell
//!
//! Owns the [`LayoutState`], the collaborators and the resize throttle.
//! Every mutation goes through [`LayoutSession::process_message`], which runs
//! the TEA update, performs the resulting actions and then notifies
//! subscribers about what changed.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio::sync::broadcast;

use shell_core::prelude::*;
use shell_core::{
    DeviceClass, DeviceFlags, LayoutType, Orientation, PermissionSet, ResolvedTheme, SectionKey,
    Theme, Viewport,
};

use crate::actions::{handle_action, Collaborators};
use crate::auth::{require_user, AuthOutcome};
use crate::config::Settings;
use crate::handler;
use crate::message::Message;
use crate::navigation::{NavTable, NavTree};
use crate::observer::SessionObserver;
use crate::session_event::SessionEvent;
use crate::state::{LayoutState, SessionPhase};
use crate::throttle::ResizeThrottle;

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to decide which
/// `SessionEvent`s to emit.
#[derive(Debug, Clone, PartialEq)]
struct StateSnapshot {
    viewport: Option<Viewport>,
    device: DeviceClass,
    orientation: Orientation,
    theme: Theme,
    resolved_theme: ResolvedTheme,
    sidebar_open: bool,
    sidebar_visible: bool,
    sidebar_overlay: bool,
    layout_type: LayoutType,
    section: SectionKey,
    path: String,
    url: String,
    expanded: Vec<String>,
    dropdown: Option<String>,
    permissions: PermissionSet,
}

impl StateSnapshot {
    fn capture(state: &LayoutState, collaborators: &Collaborators) -> Self {
        Self {
            viewport: state.viewport,
            device: state.device,
            orientation: state.orientation,
            theme: state.theme,
            resolved_theme: state.resolved_theme,
            sidebar_open: state.sidebar_open,
            sidebar_visible: state.sidebar_visible(),
            sidebar_overlay: state.sidebar_is_overlay(),
            layout_type: state.layout_type,
            section: state.active_section.clone(),
            path: state.current_path.clone(),
            url: collaborators.router.current_url(),
            expanded: state.nav_expanded.expanded_keys().map(String::from).collect(),
            dropdown: state.open_dropdown.clone(),
            permissions: state.permissions.clone(),
        }
    }

    fn nav_inputs_differ(&self, other: &Self) -> bool {
        self.section != other.section
            || self.path != other.path
            || self.expanded != other.expanded
            || self.permissions != other.permissions
    }
}

/// Read-only view of the session for renderers and the headless front-end
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutSnapshot {
    pub viewport: Option<Viewport>,
    pub device: DeviceClass,
    pub flags: DeviceFlags,
    pub orientation: Orientation,
    pub theme: Theme,
    pub resolved_theme: ResolvedTheme,
    pub sidebar_open: bool,
    pub sidebar_visible: bool,
    pub sidebar_overlay: bool,
    pub layout_type: LayoutType,
    pub active_section: SectionKey,
    pub path: String,
    pub url: String,
    pub open_dropdown: Option<String>,
    pub user: Option<String>,
    pub nav: NavTree,
}

/// One layout/navigation session.
///
/// Constructed explicitly and passed to whoever renders; there is no global
/// instance.
pub struct LayoutSession {
    state: LayoutState,
    collaborators: Collaborators,
    throttle: ResizeThrottle,
    tree: NavTree,
    event_tx: broadcast::Sender<SessionEvent>,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for LayoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSession")
            .field("phase", &self.state.phase)
            .field("section", &self.state.active_section)
            .field("collaborators", &self.collaborators)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl LayoutSession {
    pub fn new(settings: Settings, nav_table: NavTable, collaborators: Collaborators) -> Self {
        let throttle = ResizeThrottle::new(settings.viewport.throttle_window());
        let state = LayoutState::with_settings(settings, Arc::new(nav_table));
        let tree = state.nav_tree();
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            state,
            collaborators,
            throttle,
            tree,
            event_tx,
            observers: Vec::new(),
        }
    }

    /// Layout the page mounts with (before [`LayoutSession::mount`])
    pub fn with_layout(mut self, layout: LayoutType) -> Self {
        self.state.layout_type = layout;
        self
    }

    /// Subscribe to session events.
    ///
    /// Slow subscribers lose the oldest events
    /// (`broadcast::error::RecvError::Lagged`).
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    pub fn register_observer(&mut self, observer: Box<dyn SessionObserver>) {
        info!("Registered session observer: {}", observer.name());
        self.observers.push(observer);
    }

    /// Read every source once: user, geometry, OS scheme, persisted theme,
    /// then the route for section resolution.
    pub fn mount(&mut self) {
        let pre = self.capture();

        let user = match require_user(self.collaborators.auth.as_ref()) {
            AuthOutcome::Authenticated(user) => Some(user),
            AuthOutcome::Redirect(route) => {
                self.collaborators.router.navigate(&route);
                self.state.layout_type = LayoutType::Auth;
                None
            }
        };
        self.state.set_user(user);

        if let Some(viewport) = self.collaborators.platform.viewport() {
            // Mount reading counts as the leading edge of the first window
            if let Some(viewport) = self.throttle.offer(viewport, Instant::now()) {
                self.dispatch(Message::ViewportChanged(viewport));
            }
        }

        let scheme = self.collaborators.platform.color_scheme();
        self.dispatch(Message::ColorSchemeChanged(scheme));

        let stored = self
            .collaborators
            .read_storage(&self.state.settings.storage.theme_key);
        self.dispatch(Message::ThemeLoaded { stored });

        let route = self.route_changed();
        self.dispatch(route);

        self.state.phase = SessionPhase::Running;
        info!(
            "Session mounted: section={} theme={} ({}) device={}",
            self.state.active_section,
            self.state.theme,
            self.state.resolved_theme,
            self.state.device.label()
        );

        for observer in &self.observers {
            if let Err(e) = observer.on_mount(&self.state) {
                warn!("Observer {} on_mount failed: {}", observer.name(), e);
            }
        }

        let post = self.capture();
        self.finish(&pre, &post);
    }

    /// Process a single message through the TEA update cycle and emit the
    /// resulting events. Raw resizes are routed through the throttle.
    pub fn process_message(&mut self, msg: Message) {
        if let Message::Resize(viewport) = msg {
            self.handle_resize(viewport, Instant::now());
            return;
        }

        if matches!(msg, Message::StorageChanged { .. }) {
            if let Some(storage) = self.collaborators.storage.as_mut() {
                storage.refresh();
            }
        }

        let pre = self.capture();
        self.dispatch(msg.clone());
        let post = self.capture();

        for observer in &self.observers {
            if let Err(e) = observer.on_message(&msg, &self.state) {
                warn!("Observer {} on_message failed: {}", observer.name(), e);
            }
        }

        self.finish(&pre, &post);
    }

    /// Offer a raw resize at `now`; applied immediately on a leading edge
    pub fn handle_resize(&mut self, viewport: Viewport, now: Instant) {
        if let Some(viewport) = self.throttle.offer(viewport, now) {
            self.process_message(Message::ViewportChanged(viewport));
        }
    }

    /// Release a trailing resize whose window has closed
    pub fn tick(&mut self, now: Instant) {
        if let Some(viewport) = self.throttle.poll(now) {
            self.process_message(Message::ViewportChanged(viewport));
        }
    }

    /// How long the event loop may sleep before [`LayoutSession::tick`] is due
    pub fn time_until_flush(&self, now: Instant) -> Option<Duration> {
        self.throttle.time_until_flush(now)
    }

    // ─────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────

    pub fn set_theme(&mut self, theme: Theme) {
        self.process_message(Message::SetTheme(theme));
    }

    pub fn color_scheme_changed(&mut self, scheme: ResolvedTheme) {
        self.process_message(Message::ColorSchemeChanged(scheme));
    }

    pub fn select_section(&mut self, section: &str) {
        self.process_message(Message::SelectSection(section.to_string()));
    }

    pub fn navigate(&mut self, path: &str) {
        self.process_message(Message::NavigateTo(path.to_string()));
    }

    pub fn set_layout_type(&mut self, layout: LayoutType) {
        self.process_message(Message::SetLayoutType(layout));
    }

    pub fn open_sidebar(&mut self) {
        self.process_message(Message::OpenSidebar);
    }

    pub fn close_sidebar(&mut self) {
        self.process_message(Message::CloseSidebar);
    }

    pub fn toggle_sidebar(&mut self) {
        self.process_message(Message::ToggleSidebar);
    }

    pub fn toggle_nav_entry(&mut self, key: &str) {
        self.process_message(Message::ToggleNavEntry(key.to_string()));
    }

    pub fn toggle_dropdown(&mut self, id: &str) {
        self.process_message(Message::ToggleDropdown(id.to_string()));
    }

    /// Sign out through the auth collaborator and land on the sign-in page
    pub fn sign_out(&mut self) {
        let pre = self.capture();
        self.collaborators.auth.sign_out();
        self.state.set_user(None);
        self.state.layout_type = LayoutType::Auth;
        self.dispatch(Message::NavigateTo(crate::auth::SIGN_IN_ROUTE.to_string()));
        let post = self.capture();
        self.finish(&pre, &post);
    }

    // ─────────────────────────────────────────────────────────
    // Reads
    // ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Rendered navigation tree shared by header, sidebar and mobile menus
    pub fn nav_tree(&self) -> &NavTree {
        &self.tree
    }

    pub fn current_url(&self) -> String {
        self.collaborators.router.current_url()
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        let state = &self.state;
        LayoutSnapshot {
            viewport: state.viewport,
            device: state.device,
            flags: state.device_flags(),
            orientation: state.orientation,
            theme: state.theme,
            resolved_theme: state.resolved_theme,
            sidebar_open: state.sidebar_open,
            sidebar_visible: state.sidebar_visible(),
            sidebar_overlay: state.sidebar_is_overlay(),
            layout_type: state.layout_type,
            active_section: state.active_section.clone(),
            path: state.current_path.clone(),
            url: self.current_url(),
            open_dropdown: state.open_dropdown.clone(),
            user: state.user.as_ref().map(|u| u.display_name.clone()),
            nav: self.tree.clone(),
        }
    }

    /// Notify subscribers and observers that the session is going away
    pub fn shutdown(&mut self) {
        self.emit(SessionEvent::Shutdown);
        for observer in &self.observers {
            if let Err(e) = observer.on_shutdown() {
                warn!("Observer {} on_shutdown failed: {}", observer.name(), e);
            }
        }
    }

    // ─────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────

    fn capture(&self) -> StateSnapshot {
        StateSnapshot::capture(&self.state, &self.collaborators)
    }

    fn route_changed(&self) -> Message {
        self.collaborators.route_changed(
            &self.state.settings.storage,
            &self.state.settings.sections.query_param,
        )
    }

    /// Run update until no follow-up messages remain, executing actions
    fn dispatch(&mut self, message: Message) {
        let mut queue = VecDeque::from([message]);
        while let Some(msg) = queue.pop_front() {
            let result = handler::update(&mut self.state, msg);
            if let Some(next) = result.message {
                queue.push_back(next);
            }
            for action in result.actions {
                let follow_up = handle_action(
                    action,
                    &mut self.collaborators,
                    &self.state.settings.storage,
                    &self.state.settings.sections.query_param,
                );
                if let Some(next) = follow_up {
                    queue.push_back(next);
                }
            }
        }
    }

    fn finish(&mut self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.nav_inputs_differ(post) || self.tree.section != self.state.active_section {
            self.tree = self.state.nav_tree();
        }
        self.emit_events(pre, post);
    }

    /// Compare pre/post snapshots and emit one event per changed area
    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre == post {
            return;
        }

        if pre.viewport != post.viewport
            || pre.device != post.device
            || pre.orientation != post.orientation
        {
            if let Some(viewport) = post.viewport {
                self.emit(SessionEvent::ViewportChanged {
                    viewport,
                    device: post.device,
                    orientation: post.orientation,
                });
            }
        }

        if pre.theme != post.theme || pre.resolved_theme != post.resolved_theme {
            self.emit(SessionEvent::ThemeChanged {
                theme: post.theme,
                resolved: post.resolved_theme,
            });
        }

        if pre.sidebar_open != post.sidebar_open
            || pre.sidebar_visible != post.sidebar_visible
            || pre.sidebar_overlay != post.sidebar_overlay
        {
            self.emit(SessionEvent::SidebarChanged {
                open: post.sidebar_open,
                visible: post.sidebar_visible,
                overlay: post.sidebar_overlay,
            });
        }

        if pre.layout_type != post.layout_type {
            self.emit(SessionEvent::LayoutChanged {
                layout: post.layout_type,
            });
        }

        if pre.section != post.section {
            self.emit(SessionEvent::SectionChanged {
                previous: pre.section.clone(),
                section: post.section.clone(),
            });
        }

        if pre.path != post.path || pre.url != post.url {
            self.emit(SessionEvent::RouteChanged {
                path: post.path.clone(),
                url: post.url.clone(),
            });
        }

        if pre.expanded != post.expanded || pre.dropdown != post.dropdown {
            self.emit(SessionEvent::NavigationChanged {
                expanded: post.expanded.clone(),
                dropdown: post.dropdown.clone(),
            });
        }
    }

    /// Emit a single event to subscribers and observers.
    ///
    /// `send` only fails when nobody is subscribed, which is fine.
    fn emit(&self, event: SessionEvent) {
        trace!("Session event: {}", event.event_type());
        for observer in &self.observers {
            if let Err(e) = observer.on_event(&event) {
                warn!("Observer {} on_event failed: {}", observer.name(), e);
            }
        }
        let _ = self.event_tx.send(event);
    }
}
