//! Action handlers: UpdateAction dispatch against the collaborators

use shell_core::prelude::*;

use crate::auth::AuthProvider;
use crate::config::StorageSettings;
use crate::handler::UpdateAction;
use crate::message::Message;
use crate::platform::Platform;
use crate::router::Router;
use crate::storage::Storage;

/// External systems a session talks to
pub struct Collaborators {
    pub platform: Box<dyn Platform>,
    pub router: Box<dyn Router>,
    /// `None` when the execution context has no persistence
    pub storage: Option<Box<dyn Storage>>,
    pub auth: Box<dyn AuthProvider>,
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators")
            .field("url", &self.router.current_url())
            .field("storage", &self.storage.is_some())
            .finish_non_exhaustive()
    }
}

impl Collaborators {
    /// Best-effort read; absent storage reads as absent
    pub fn read_storage(&self, key: &str) -> Option<String> {
        self.storage.as_ref().and_then(|s| s.get(key))
    }

    /// Best-effort write; absent storage makes this a no-op
    pub fn write_storage(&mut self, key: &str, value: &str) {
        match self.storage.as_mut() {
            Some(storage) => storage.set(key, value),
            None => trace!("No storage backend, dropping {}={}", key, value),
        }
    }

    /// Raw route sources for section resolution
    pub fn route_changed(&self, keys: &StorageSettings, query_param: &str) -> Message {
        Message::RouteChanged {
            path: self.router.current_path(),
            section_param: self.router.query_param(query_param),
            stored_section: self.read_storage(&keys.section_key),
        }
    }
}

/// Execute one action. Navigation returns the follow-up `RouteChanged`.
pub fn handle_action(
    action: UpdateAction,
    collaborators: &mut Collaborators,
    keys: &StorageSettings,
    query_param: &str,
) -> Option<Message> {
    match action {
        UpdateAction::PersistTheme(theme) => {
            collaborators.write_storage(&keys.theme_key, theme.as_str());
            None
        }

        UpdateAction::ApplyThemeMarker(resolved) => {
            collaborators.platform.set_theme_marker(resolved);
            None
        }

        UpdateAction::PersistSection(section) => {
            collaborators.write_storage(&keys.section_key, section.as_str());
            None
        }

        UpdateAction::ReplaceSectionQuery(section) => {
            collaborators
                .router
                .replace_query(query_param, section.as_str());
            None
        }

        UpdateAction::SetSectionMarker(section) => {
            collaborators.platform.set_section_marker(section.as_str());
            None
        }

        UpdateAction::Navigate { path } => {
            info!("Navigating to {}", path);
            collaborators.router.navigate(&path);
            Some(collaborators.route_changed(keys, query_param))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::StaticAuth;
    use crate::platform::VirtualDocument;
    use crate::router::{MockRouter, UrlRouter};
    use crate::storage::{MemoryStorage, MockStorage};
    use mockall::predicate::eq;
    use shell_core::{ResolvedTheme, SectionKey, Theme};

    fn collaborators(
        router: Box<dyn Router>,
        storage: Option<Box<dyn Storage>>,
    ) -> (Collaborators, VirtualDocument) {
        let document = VirtualDocument::default();
        (
            Collaborators {
                platform: Box::new(document.clone()),
                router,
                storage,
                auth: Box::new(StaticAuth::anonymous()),
            },
            document,
        )
    }

    #[test]
    fn test_persist_theme_writes_theme_key() {
        let mut storage = MockStorage::new();
        storage
            .expect_set()
            .with(eq("theme"), eq("dark"))
            .times(1)
            .return_const(());
        let router = UrlRouter::parse("http://studio.local/").unwrap();
        let (mut collab, _) = collaborators(Box::new(router), Some(Box::new(storage)));

        let next = handle_action(
            UpdateAction::PersistTheme(Theme::Dark),
            &mut collab,
            &StorageSettings::default(),
            "section",
        );
        assert!(next.is_none());
    }

    #[test]
    fn test_replace_query_uses_configured_param() {
        let mut router = MockRouter::new();
        router
            .expect_replace_query()
            .with(eq("module"), eq("lms"))
            .times(1)
            .return_const(());
        router
            .expect_current_url()
            .return_const("http://studio.local/".to_string());
        let (mut collab, _) = collaborators(Box::new(router), None);

        handle_action(
            UpdateAction::ReplaceSectionQuery(SectionKey::parse("lms").unwrap()),
            &mut collab,
            &StorageSettings::default(),
            "module",
        );
    }

    #[test]
    fn test_missing_storage_is_a_no_op() {
        let router = UrlRouter::parse("http://studio.local/").unwrap();
        let (mut collab, _) = collaborators(Box::new(router), None);
        handle_action(
            UpdateAction::PersistSection(SectionKey::main()),
            &mut collab,
            &StorageSettings::default(),
            "section",
        );
        assert_eq!(collab.read_storage("activeSection"), None);
    }

    #[test]
    fn test_marker_actions_reach_document() {
        let router = UrlRouter::parse("http://studio.local/").unwrap();
        let (mut collab, document) = collaborators(Box::new(router), None);
        let keys = StorageSettings::default();

        handle_action(
            UpdateAction::ApplyThemeMarker(ResolvedTheme::Dark),
            &mut collab,
            &keys,
            "section",
        );
        handle_action(
            UpdateAction::SetSectionMarker(SectionKey::parse("store").unwrap()),
            &mut collab,
            &keys,
            "section",
        );

        assert_eq!(document.theme_marker(), Some(ResolvedTheme::Dark));
        assert_eq!(
            document
                .attribute(crate::platform::SECTION_ATTRIBUTE)
                .as_deref(),
            Some("store")
        );
    }

    #[test]
    fn test_navigate_follows_up_with_route_changed() {
        let router = UrlRouter::parse("http://studio.local/dashboard?section=main").unwrap();
        let storage = MemoryStorage::new().with_value("activeSection", "main");
        let (mut collab, _) = collaborators(Box::new(router), Some(Box::new(storage)));

        let next = handle_action(
            UpdateAction::Navigate {
                path: "/lms/courses?section=lms".to_string(),
            },
            &mut collab,
            &StorageSettings::default(),
            "section",
        );

        assert_eq!(
            next,
            Some(Message::RouteChanged {
                path: "/lms/courses".to_string(),
                section_param: Some("lms".to_string()),
                stored_section: Some("main".to_string()),
            })
        );
    }
}
