//! Ctrl+C and termination requests become `Message::Quit`, so a signal goes
//! through the same shutdown path as the `q` key: the runner leaves its loop,
//! stops the storage watcher and calls `LayoutSession::shutdown`.

use std::fmt;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use shell_core::prelude::*;

use crate::message::Message;

/// Which OS request ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupt => write!(f, "interrupt"),
            Self::Terminate => write!(f, "terminate"),
        }
    }
}

/// Listen for shutdown signals on a background task.
///
/// The returned handle lets the runner abort the listener once the session
/// has ended for another reason.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let signal = match next_shutdown_signal().await {
            Ok(signal) => signal,
            Err(e) => {
                error!("Signal listener unavailable, only in-app quit will work: {}", e);
                return;
            }
        };

        info!("Received {} signal, closing the layout session", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Session already gone when the {} signal arrived", signal);
        }
    })
}

#[cfg(unix)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn next_shutdown_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}
