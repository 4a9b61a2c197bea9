//! Platform/document adapter
//!
//! The session reads geometry and the OS color scheme through [`Platform`]
//! and writes the document-level markers back through it. Front-ends and
//! tests use [`VirtualDocument`].

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use shell_core::{ResolvedTheme, Viewport};

/// Attribute reflecting the active section (debug aid)
pub const SECTION_ATTRIBUTE: &str = "data-section";

pub trait Platform: Send {
    /// Current geometry, `None` before the first layout pass
    fn viewport(&self) -> Option<Viewport>;

    /// Current OS color-scheme preference
    fn color_scheme(&self) -> ResolvedTheme;

    /// Make `theme` the only theme marker on the document root
    fn set_theme_marker(&mut self, theme: ResolvedTheme);

    fn set_section_marker(&mut self, section: &str);
}

#[derive(Debug, Default)]
struct DocumentState {
    viewport: Option<Viewport>,
    color_scheme: ResolvedTheme,
    classes: BTreeSet<String>,
    attributes: BTreeMap<String, String>,
}

/// In-process stand-in for the document root.
///
/// Clones share state, so a caller can keep a handle to inspect markers after
/// handing the document to a session.
#[derive(Debug, Clone, Default)]
pub struct VirtualDocument {
    inner: Arc<Mutex<DocumentState>>,
}

impl VirtualDocument {
    pub fn new(viewport: Option<Viewport>, color_scheme: ResolvedTheme) -> Self {
        Self {
            inner: Arc::new(Mutex::new(DocumentState {
                viewport,
                color_scheme,
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DocumentState> {
        // Poisoning only means another holder panicked mid-write of plain data
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_viewport(&self, viewport: Viewport) {
        self.lock().viewport = Some(viewport);
    }

    pub fn set_color_scheme(&self, scheme: ResolvedTheme) {
        self.lock().color_scheme = scheme;
    }

    pub fn classes(&self) -> BTreeSet<String> {
        self.lock().classes.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.lock().attributes.get(name).cloned()
    }

    /// The theme marker currently applied, if exactly one is present
    pub fn theme_marker(&self) -> Option<ResolvedTheme> {
        let state = self.lock();
        let present: Vec<ResolvedTheme> = [ResolvedTheme::Light, ResolvedTheme::Dark]
            .into_iter()
            .filter(|t| state.classes.contains(t.as_str()))
            .collect();
        match present.as_slice() {
            [single] => Some(*single),
            _ => None,
        }
    }
}

impl Platform for VirtualDocument {
    fn viewport(&self) -> Option<Viewport> {
        self.lock().viewport
    }

    fn color_scheme(&self) -> ResolvedTheme {
        self.lock().color_scheme
    }

    fn set_theme_marker(&mut self, theme: ResolvedTheme) {
        let mut state = self.lock();
        state.classes.remove(theme.opposite().as_str());
        state.classes.insert(theme.as_str().to_string());
    }

    fn set_section_marker(&mut self, section: &str) {
        self.lock()
            .attributes
            .insert(SECTION_ATTRIBUTE.to_string(), section.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_marker_is_exclusive() {
        let mut doc = VirtualDocument::default();
        assert_eq!(doc.theme_marker(), None);

        doc.set_theme_marker(ResolvedTheme::Dark);
        assert_eq!(doc.theme_marker(), Some(ResolvedTheme::Dark));

        doc.set_theme_marker(ResolvedTheme::Light);
        assert_eq!(doc.theme_marker(), Some(ResolvedTheme::Light));
        assert!(!doc.classes().contains("dark"));
    }

    #[test]
    fn test_clones_share_state() {
        let doc = VirtualDocument::new(Some(Viewport::new(800, 600)), ResolvedTheme::Dark);
        let mut handle = doc.clone();
        handle.set_section_marker("finance");

        assert_eq!(doc.attribute(SECTION_ATTRIBUTE).as_deref(), Some("finance"));
        assert_eq!(doc.viewport(), Some(Viewport::new(800, 600)));
        assert_eq!(doc.color_scheme(), ResolvedTheme::Dark);
    }
}
