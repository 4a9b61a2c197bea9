//! Section (module) keys
//!
//! A section is a top-level functional area of the dashboard with its own
//! contextual navigation. Keys are stored, compared and written to the URL in
//! lower-case.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Section used when no other source provides one
pub const DEFAULT_SECTION: &str = "main";

/// Modules shipped with the studio portal, in module-selector order
pub const KNOWN_SECTIONS: &[&str] = &[
    "main",
    "lms",
    "admin",
    "payments",
    "finance",
    "store",
    "international",
];

fn key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid section regex"))
}

/// Normalized (lower-case) section key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SectionKey(String);

impl SectionKey {
    /// Normalize a raw value from the URL, storage or a click.
    ///
    /// Returns `None` for values that are not syntactically section keys.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if key_pattern().is_match(&normalized) {
            Some(Self(normalized))
        } else {
            None
        }
    }

    pub fn main() -> Self {
        Self(DEFAULT_SECTION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a raw value
    pub fn matches(&self, raw: &str) -> bool {
        self.0.eq_ignore_ascii_case(raw.trim())
    }
}

impl Default for SectionKey {
    fn default() -> Self {
        Self::main()
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for SectionKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SectionKey::parse(&value).ok_or_else(|| format!("invalid section key '{value}'"))
    }
}

impl From<SectionKey> for String {
    fn from(key: SectionKey) -> Self {
        key.0
    }
}
