//! Persistence collaborator: string-only, synchronous key/value storage.
//!
//! Storage is best-effort everywhere: read failures look like absent keys,
//! write failures are logged and dropped. A session may also run with no
//! storage at all.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use shell_core::prelude::*;

/// Key/value persistence used for `theme` and `activeSection`
#[cfg_attr(test, mockall::automock)]
pub trait Storage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);

    /// Pick up writes made outside this process
    fn refresh(&mut self) {}
}

/// In-memory storage (tests, headless runs without persistence)
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Storage backed by a flat TOML file of string values.
///
/// The file is read once on open (and again on [`FileStorage::reload`]);
/// every `set` rewrites it atomically.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Re-read the file, returning the keys whose values changed
    pub fn reload(&mut self) -> Vec<(String, Option<String>)> {
        let fresh = read_values(&self.path);
        let changes = diff_values(&self.values, &fresh);
        self.values = fresh;
        changes
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string(&self.values)?;
        let temp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.path)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return;
        }
        self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            warn!("Failed to persist {:?} to {:?}: {}", key, self.path, e);
        }
    }

    fn refresh(&mut self) {
        let changes = self.reload();
        if !changes.is_empty() {
            debug!("Storage file changed externally: {} key(s)", changes.len());
        }
    }
}

/// Read string values; anything unreadable counts as empty storage
pub(crate) fn read_values(path: &Path) -> BTreeMap<String, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            debug!("Storage file {:?} not readable: {}", path, e);
            return BTreeMap::new();
        }
    };

    match toml::from_str::<BTreeMap<String, toml::Value>>(&content) {
        Ok(raw) => raw
            .into_iter()
            .filter_map(|(k, v)| match v {
                toml::Value::String(s) => Some((k, s)),
                other => {
                    debug!("Discarding non-string storage value {:?} = {}", k, other);
                    None
                }
            })
            .collect(),
        Err(e) => {
            debug!("Storage file {:?} is corrupt, ignoring: {}", path, e);
            BTreeMap::new()
        }
    }
}

pub(crate) fn diff_values(
    old: &BTreeMap<String, String>,
    new: &BTreeMap<String, String>,
) -> Vec<(String, Option<String>)> {
    let mut changes: Vec<(String, Option<String>)> = new
        .iter()
        .filter(|(k, v)| old.get(*k) != Some(*v))
        .map(|(k, v)| (k.clone(), Some(v.clone())))
        .collect();
    changes.extend(
        old.keys()
            .filter(|k| !new.contains_key(*k))
            .map(|k| (k.clone(), None)),
    );
    changes
}
