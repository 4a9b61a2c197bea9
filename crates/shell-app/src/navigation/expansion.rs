//! Accordion expansion state for navigation entries

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::NavEntry;

/// Which entries (by key) are expanded. Absent means collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavExpansion(BTreeMap<String, bool>);

impl NavExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Flip one entry; returns the new state
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.is_expanded(key);
        self.0.insert(key.to_string(), next);
        next
    }

    /// Returns true if the entry was not already expanded
    pub fn expand(&mut self, key: &str) -> bool {
        let was = self.is_expanded(key);
        self.0.insert(key.to_string(), true);
        !was
    }

    pub fn collapse(&mut self, key: &str) {
        self.0.insert(key.to_string(), false);
    }

    /// Force-expand every entry with a descendant matching `route`.
    ///
    /// Entries that are already open stay open. Returns the keys that
    /// changed from collapsed to expanded.
    pub fn auto_expand(&mut self, entries: &[NavEntry], route: &str) -> Vec<String> {
        let mut opened = Vec::new();
        self.auto_expand_into(entries, route, &mut opened);
        opened
    }

    fn auto_expand_into(&mut self, entries: &[NavEntry], route: &str, opened: &mut Vec<String>) {
        for entry in entries {
            if !entry.has_children() {
                continue;
            }
            if entry.has_matching_descendant(route) && self.expand(entry.key()) {
                opened.push(entry.key().to_string());
            }
            self.auto_expand_into(&entry.children, route, opened);
        }
    }

    pub fn expanded_keys(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, open)| **open)
            .map(|(key, _)| key.as_str())
    }
}
