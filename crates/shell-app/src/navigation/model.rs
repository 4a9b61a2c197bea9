//! Static navigation table types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use shell_core::{PermissionSet, SectionKey, DEFAULT_SECTION};

/// A navigation entry as declared in the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    pub title: String,

    /// Target route; also the entry's identity for expansion state
    pub path: String,

    /// Icon reference resolved by the renderer
    #[serde(default)]
    pub icon: Option<String>,

    /// Any one of these grants visibility; empty means public
    #[serde(default)]
    pub permissions: Vec<String>,

    #[serde(default)]
    pub children: Vec<NavEntry>,
}

impl NavEntry {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            icon: None,
            permissions: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn requires<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    pub fn children(mut self, children: Vec<NavEntry>) -> Self {
        self.children = children;
        self
    }

    pub fn key(&self) -> &str {
        &self.path
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn is_visible_to(&self, permissions: &PermissionSet) -> bool {
        permissions.allows_any(&self.permissions)
    }

    /// True when `route` is this entry's path or lies below it
    pub fn matches_route(&self, route: &str) -> bool {
        path_matches(route, &self.path)
    }

    /// True when any descendant matches `route`
    pub fn has_matching_descendant(&self, route: &str) -> bool {
        self.children
            .iter()
            .any(|c| c.matches_route(route) || c.has_matching_descendant(route))
    }
}

/// `route == path` or `route` starts with `path + "/"`
pub fn path_matches(route: &str, path: &str) -> bool {
    if route == path {
        return true;
    }
    let prefix = path.trim_end_matches('/');
    route
        .strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Entry in the header module selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub key: SectionKey,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Section → ordered entries, plus global entries shown everywhere
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTable {
    #[serde(default)]
    pub global: Vec<NavEntry>,

    #[serde(default)]
    pub sections: BTreeMap<String, Vec<NavEntry>>,

    #[serde(default)]
    pub modules: Vec<ModuleEntry>,
}

impl NavTable {
    /// Contextual entries for `section`, degrading to the `main` row
    pub fn contextual(&self, section: &SectionKey) -> &[NavEntry] {
        self.sections
            .get(section.as_str())
            .or_else(|| {
                self.sections
                    .iter()
                    .find(|(key, _)| section.matches(key))
                    .map(|(_, entries)| entries)
            })
            .or_else(|| self.sections.get(DEFAULT_SECTION))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_section(&self, section: &SectionKey) -> bool {
        self.sections.keys().any(|k| section.matches(k))
    }

    /// Modules the user may select, in declaration order
    pub fn visible_modules<'a>(
        &'a self,
        permissions: &'a PermissionSet,
    ) -> impl Iterator<Item = &'a ModuleEntry> + 'a {
        self.modules
            .iter()
            .filter(move |m| permissions.allows_any(&m.permissions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matches() {
        assert!(path_matches("/finance", "/finance"));
        assert!(path_matches("/finance/reports", "/finance"));
        assert!(!path_matches("/financeX", "/finance"));
        assert!(!path_matches("/fin", "/finance"));
        assert!(path_matches("/finance/reports", "/finance/"));
    }

    #[test]
    fn test_descendant_match() {
        let entry = NavEntry::new("Reports", "/finance/reports").children(vec![NavEntry::new(
            "Cash Flow",
            "/finance/reports/cash-flow",
        )]);
        assert!(entry.has_matching_descendant("/finance/reports/cash-flow"));
        assert!(entry.has_matching_descendant("/finance/reports/cash-flow/2024"));
        assert!(!entry.has_matching_descendant("/finance/reports"));
    }

    #[test]
    fn test_contextual_falls_back_to_main() {
        let mut table = NavTable::default();
        table
            .sections
            .insert("main".into(), vec![NavEntry::new("Overview", "/overview")]);
        table
            .sections
            .insert("store".into(), vec![NavEntry::new("Products", "/store")]);

        let unknown = SectionKey::parse("nowhere").unwrap();
        assert_eq!(table.contextual(&unknown)[0].title, "Overview");

        let store = SectionKey::parse("STORE").unwrap();
        assert_eq!(table.contextual(&store)[0].title, "Products");
    }

    #[test]
    fn test_contextual_empty_table() {
        let table = NavTable::default();
        assert!(table.contextual(&SectionKey::main()).is_empty());
    }
}
