//! Active section resolution.
//!
//! Sources in precedence order: explicit user action, the URL query
//! parameter, the persisted value, the configured default. Every source is
//! checked against the allow-list, so whatever wins can be persisted and read
//! back on the next load.
//!
//! A resolution also reports which sources disagree with the winner so the
//! caller can rewrite them.

use serde::Serialize;
use shell_core::prelude::*;
use shell_core::SectionKey;

use crate::config::SectionSettings;

/// Where the resolved section came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSource {
    UserAction,
    Url,
    Storage,
    Default,
}

/// Outcome of resolving the section from its sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionResolution {
    pub section: SectionKey,
    pub source: SectionSource,
    /// The URL parameter is absent or differs from the canonical form
    pub url_needs_repair: bool,
    /// The persisted value is absent or differs from the canonical form
    pub storage_needs_repair: bool,
}

#[derive(Debug, Clone)]
pub struct SectionResolver {
    default: SectionKey,
    allowed: Vec<SectionKey>,
}

impl Default for SectionResolver {
    fn default() -> Self {
        Self::from_settings(&SectionSettings::default())
    }
}

impl SectionResolver {
    pub fn from_settings(settings: &SectionSettings) -> Self {
        Self {
            default: settings.default_key(),
            allowed: settings.allowed_keys(),
        }
    }

    pub fn default_section(&self) -> &SectionKey {
        &self.default
    }

    pub fn is_allowed(&self, key: &SectionKey) -> bool {
        self.allowed.contains(key)
    }

    /// Validate a URL parameter value against the allow-list
    pub fn from_url(&self, raw: Option<&str>) -> Option<SectionKey> {
        let raw = raw?;
        match SectionKey::parse(raw) {
            Some(key) if self.is_allowed(&key) => Some(key),
            _ => {
                debug!("Ignoring unknown section URL parameter {:?}", raw);
                None
            }
        }
    }

    /// Validate a persisted value against the allow-list
    pub fn from_persisted(&self, raw: Option<&str>) -> Option<SectionKey> {
        let raw = raw?;
        match SectionKey::parse(raw) {
            Some(key) if self.is_allowed(&key) => Some(key),
            _ => {
                debug!("Ignoring invalid persisted section {:?}", raw);
                None
            }
        }
    }

    /// Resolve from the URL parameter and persisted value
    pub fn resolve(&self, url: Option<&str>, persisted: Option<&str>) -> SectionResolution {
        let (section, source) = if let Some(key) = self.from_url(url) {
            (key, SectionSource::Url)
        } else if let Some(key) = self.from_persisted(persisted) {
            (key, SectionSource::Storage)
        } else {
            (self.default.clone(), SectionSource::Default)
        };

        SectionResolution {
            url_needs_repair: url != Some(section.as_str()),
            storage_needs_repair: persisted != Some(section.as_str()),
            section,
            source,
        }
    }

    /// Resolve an explicit selection; both sources get rewritten
    pub fn select(&self, raw: &str) -> Option<SectionResolution> {
        let Some(section) = SectionKey::parse(raw).filter(|key| self.is_allowed(key)) else {
            debug!("Ignoring unknown section selection {:?}", raw);
            return None;
        };
        Some(SectionResolution {
            section,
            source: SectionSource::UserAction,
            url_needs_repair: true,
            storage_needs_repair: true,
        })
    }
}
