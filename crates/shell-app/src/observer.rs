//! Synchronous observers of a layout session.
//!
//! For read-only consumption across tasks prefer `LayoutSession::subscribe()`,
//! which hands out a broadcast receiver of [`SessionEvent`]s. Observers are
//! called in-process, in registration order, right after each message.

use std::fmt;

use shell_core::prelude::*;

use crate::message::Message;
use crate::session_event::SessionEvent;
use crate::state::LayoutState;

/// Hooks into the session lifecycle. Every callback defaults to a no-op.
///
/// Errors are logged by the session and never abort processing.
pub trait SessionObserver: Send + Sync + fmt::Debug {
    /// Name used in log messages
    fn name(&self) -> &str;

    /// Called once the session has read all of its sources
    fn on_mount(&self, _state: &LayoutState) -> Result<()> {
        Ok(())
    }

    /// Called after each message with the resulting state
    fn on_message(&self, _msg: &Message, _state: &LayoutState) -> Result<()> {
        Ok(())
    }

    fn on_event(&self, _event: &SessionEvent) -> Result<()> {
        Ok(())
    }

    fn on_shutdown(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct Counter {
        messages: Arc<AtomicUsize>,
    }

    impl SessionObserver for Counter {
        fn name(&self) -> &str {
            "counter"
        }

        fn on_message(&self, _msg: &Message, _state: &LayoutState) -> Result<()> {
            self.messages.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn test_defaults_are_no_ops() {
        let observer = Counter::default();
        let state = LayoutState::new();
        assert!(observer.on_mount(&state).is_ok());
        assert!(observer.on_event(&SessionEvent::Shutdown).is_ok());
        assert!(observer.on_shutdown().is_ok());
        assert_eq!(observer.messages.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_on_message_override() {
        let observer = Counter::default();
        let state = LayoutState::new();
        observer.on_message(&Message::Tick, &state).unwrap();
        assert_eq!(observer.messages.load(Ordering::SeqCst), 1);
        assert_eq!(observer.name(), "counter");
    }
}
