//! Resize throttling. Coalesces bursts of resize/orientation events.

use std::time::{Duration, Instant};

use shell_core::Viewport;

/// Default throttle window
pub const DEFAULT_RESIZE_WINDOW: Duration = Duration::from_millis(100);

/// Limits viewport recomputes to one per window.
///
/// The first event after a quiet period passes straight through. Events that
/// arrive inside the window overwrite each other; only the last one is kept
/// and released by [`ResizeThrottle::poll`] once the window has elapsed.
/// Callers pass `now` explicitly so tests can drive time.
#[derive(Debug)]
pub struct ResizeThrottle {
    window: Duration,
    last_emit: Option<Instant>,
    pending: Option<Viewport>,
}

impl Default for ResizeThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_RESIZE_WINDOW)
    }
}

impl ResizeThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emit: None,
            pending: None,
        }
    }

    /// Offer a raw event; returns the viewport to apply now, if any
    pub fn offer(&mut self, viewport: Viewport, now: Instant) -> Option<Viewport> {
        if self.in_window(now) {
            self.pending = Some(viewport);
            return None;
        }
        self.emit(viewport, now)
    }

    /// Release the trailing event once its window has closed
    pub fn poll(&mut self, now: Instant) -> Option<Viewport> {
        if self.in_window(now) {
            return None;
        }
        let viewport = self.pending.take()?;
        self.emit(viewport, now)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time until a pending event may be released (for event loop timing)
    pub fn time_until_flush(&self, now: Instant) -> Option<Duration> {
        self.pending?;
        let elapsed = self
            .last_emit
            .map(|t| now.saturating_duration_since(t))
            .unwrap_or(self.window);
        Some(self.window.saturating_sub(elapsed))
    }

    fn in_window(&self, now: Instant) -> bool {
        self.last_emit
            .is_some_and(|t| now.saturating_duration_since(t) < self.window)
    }

    fn emit(&mut self, viewport: Viewport, now: Instant) -> Option<Viewport> {
        self.last_emit = Some(now);
        self.pending = None;
        Some(viewport)
    }
}
