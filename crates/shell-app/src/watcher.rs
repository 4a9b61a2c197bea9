//! Storage echo watcher
//!
//! Watches the storage file for writes made by other shell instances and
//! turns every changed key into a `Message::StorageChanged`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::RecursiveMode;
use notify_debouncer_full::{new_debouncer, DebounceEventResult};
use tokio::sync::mpsc;

use shell_core::prelude::*;

use crate::message::Message;
use crate::storage::{diff_values, read_values};

/// Default debounce duration in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Watches one storage file
pub struct StorageWatcher {
    path: PathBuf,
    debounce: Duration,
    stop_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl StorageWatcher {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            stop_tx: None,
        }
    }

    pub fn with_debounce_ms(mut self, ms: u64) -> Self {
        self.debounce = Duration::from_millis(ms);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Start watching. Changes arrive on `message_tx` as `StorageChanged`.
    pub fn start(&mut self, message_tx: mpsc::Sender<Message>) -> Result<()> {
        if self.is_running() {
            return Err(Error::watcher("Storage watcher is already running"));
        }

        let path = self.path.clone();
        let debounce = self.debounce;
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel();
        self.stop_tx = Some(stop_tx);

        tokio::task::spawn_blocking(move || {
            Self::run_watcher(path, debounce, message_tx, stop_rx);
        });

        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
        }
    }

    pub fn is_running(&self) -> bool {
        self.stop_tx.is_some()
    }

    fn run_watcher(
        path: PathBuf,
        debounce: Duration,
        message_tx: mpsc::Sender<Message>,
        mut stop_rx: tokio::sync::oneshot::Receiver<()>,
    ) {
        // The file is replaced via rename, so watch its directory
        let Some(dir) = path.parent().map(Path::to_path_buf) else {
            warn!("Storage path {} has no parent directory", path.display());
            return;
        };
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!("Cannot create storage directory {}: {}", dir.display(), e);
            return;
        }

        let tx_clone = message_tx.clone();
        let watched = path.clone();
        let mut last_seen = read_values(&path);

        let debouncer_result = new_debouncer(
            debounce,
            None,
            move |result: DebounceEventResult| match result {
                Ok(events) => {
                    let touched = events
                        .iter()
                        .any(|event| event.paths.iter().any(|p| p == &watched));
                    if !touched {
                        return;
                    }
                    let fresh = read_values(&watched);
                    let changes = diff_values(&last_seen, &fresh);
                    last_seen = fresh;
                    send_changes(&tx_clone, changes);
                }
                Err(errors) => {
                    for error in errors {
                        warn!("Storage watcher error: {:?}", error);
                    }
                }
            },
        );

        let mut debouncer = match debouncer_result {
            Ok(d) => d,
            Err(e) => {
                error!("Failed to create storage watcher: {}", e);
                return;
            }
        };

        if let Err(e) = debouncer.watch(&dir, RecursiveMode::NonRecursive) {
            warn!("Failed to watch {}: {}", dir.display(), e);
            return;
        }
        info!("Watching storage: {}", path.display());

        loop {
            match stop_rx.try_recv() {
                Ok(()) | Err(tokio::sync::oneshot::error::TryRecvError::Closed) => {
                    info!("Storage watcher stopping");
                    break;
                }
                Err(tokio::sync::oneshot::error::TryRecvError::Empty) => {
                    std::thread::sleep(Duration::from_millis(100));
                }
            }
        }
    }
}

fn send_changes(tx: &mpsc::Sender<Message>, changes: Vec<(String, Option<String>)>) {
    if changes.is_empty() {
        return;
    }
    debug!("Storage echo: {} key(s) changed", changes.len());
    for (key, value) in changes {
        if tx.blocking_send(Message::StorageChanged { key, value }).is_err() {
            debug!("Storage watcher receiver dropped");
            return;
        }
    }
}

impl Drop for StorageWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_watcher_creation() {
        let watcher = StorageWatcher::new(PathBuf::from("/tmp/shell/storage.toml"));
        assert_eq!(watcher.path(), Path::new("/tmp/shell/storage.toml"));
        assert_eq!(watcher.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        assert!(!watcher.is_running());
    }

    #[test]
    fn test_with_debounce() {
        let watcher = StorageWatcher::new(PathBuf::from("storage.toml")).with_debounce_ms(50);
        assert_eq!(watcher.debounce, Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_double_start_error() {
        let dir = tempdir().unwrap();
        let mut watcher = StorageWatcher::new(dir.path().join("storage.toml"));
        let (tx, _rx) = mpsc::channel(8);

        assert!(watcher.start(tx.clone()).is_ok());
        assert!(watcher.is_running());
        assert!(watcher.start(tx).is_err());

        watcher.stop();
        assert!(!watcher.is_running());
    }

    #[test]
    fn test_send_changes_emits_one_message_per_key() {
        let (tx, mut rx) = mpsc::channel(8);
        send_changes(
            &tx,
            vec![
                ("theme".to_string(), Some("dark".to_string())),
                ("activeSection".to_string(), None),
            ],
        );

        assert_eq!(
            rx.try_recv().unwrap(),
            Message::StorageChanged {
                key: "theme".to_string(),
                value: Some("dark".to_string()),
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            Message::StorageChanged {
                key: "activeSection".to_string(),
                value: None,
            }
        );
    }
}
