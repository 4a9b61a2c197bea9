//! Theme intent resolution

use shell_core::prelude::*;
use shell_core::{ResolvedTheme, Theme};

/// Concrete theme for an intent, given the OS preference
pub fn resolve(theme: Theme, os_scheme: ResolvedTheme) -> ResolvedTheme {
    match theme {
        Theme::Light => ResolvedTheme::Light,
        Theme::Dark => ResolvedTheme::Dark,
        Theme::System => os_scheme,
    }
}

/// Interpret a persisted theme value.
///
/// Absent or unrecognized values fall back to `fallback`; bad values are only
/// logged at debug level.
pub fn from_persisted(raw: Option<&str>, fallback: Theme) -> Theme {
    match raw {
        None => fallback,
        Some(value) => Theme::parse(value).unwrap_or_else(|| {
            debug!("Ignoring invalid persisted theme {:?}", value);
            fallback
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_intent_ignores_os() {
        assert_eq!(resolve(Theme::Dark, ResolvedTheme::Light), ResolvedTheme::Dark);
        assert_eq!(resolve(Theme::Light, ResolvedTheme::Dark), ResolvedTheme::Light);
    }

    #[test]
    fn test_system_follows_os() {
        assert_eq!(resolve(Theme::System, ResolvedTheme::Dark), ResolvedTheme::Dark);
        assert_eq!(resolve(Theme::System, ResolvedTheme::Light), ResolvedTheme::Light);
    }

    #[test]
    fn test_from_persisted() {
        assert_eq!(from_persisted(Some("dark"), Theme::System), Theme::Dark);
        assert_eq!(from_persisted(Some("Light"), Theme::System), Theme::Light);
        assert_eq!(from_persisted(Some("{corrupt"), Theme::System), Theme::System);
        assert_eq!(from_persisted(None, Theme::System), Theme::System);
        assert_eq!(from_persisted(None, Theme::Dark), Theme::Dark);
    }
}
