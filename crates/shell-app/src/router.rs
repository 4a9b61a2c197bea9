//! Routing collaborator: current location, navigation and in-place query edits

use shell_core::prelude::*;
use url::Url;

/// Supplies the current path/query and accepts navigation requests
#[cfg_attr(test, mockall::automock)]
pub trait Router: Send {
    fn current_path(&self) -> String;
    fn query_param(&self, name: &str) -> Option<String>;

    /// Navigate to a path (optionally with its own query string)
    fn navigate(&mut self, target: &str);

    /// Set one query parameter without a reload; other parameters are kept
    fn replace_query(&mut self, name: &str, value: &str);

    fn current_url(&self) -> String;
}

/// [`Router`] over an absolute `url::Url`
#[derive(Debug, Clone)]
pub struct UrlRouter {
    url: Url,
}

impl UrlRouter {
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| Error::invalid_url(input, e.to_string()))?;
        Ok(Self { url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl Router for UrlRouter {
    fn current_path(&self) -> String {
        self.url.path().to_string()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    fn navigate(&mut self, target: &str) {
        match self.url.join(target) {
            Ok(next) => self.url = next,
            Err(e) => warn!("Ignoring navigation to {:?}: {}", target, e),
        }
    }

    fn replace_query(&mut self, name: &str, value: &str) {
        let kept: Vec<(String, String)> = self
            .url
            .query_pairs()
            .filter(|(k, _)| k != name)
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let mut pairs = self.url.query_pairs_mut();
        pairs.clear();
        for (k, v) in &kept {
            pairs.append_pair(k, v);
        }
        pairs.append_pair(name, value);
    }

    fn current_url(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_relative() {
        assert!(UrlRouter::parse("/dashboard").is_err());
    }

    #[test]
    fn test_path_and_query() {
        let router = UrlRouter::parse("http://studio.local/finance/reports?section=Finance").unwrap();
        assert_eq!(router.current_path(), "/finance/reports");
        assert_eq!(router.query_param("section").as_deref(), Some("Finance"));
        assert_eq!(router.query_param("tab"), None);
    }

    #[test]
    fn test_navigate_replaces_path_and_query() {
        let mut router = UrlRouter::parse("http://studio.local/dashboard?section=main").unwrap();
        router.navigate("/store/products");
        assert_eq!(router.current_path(), "/store/products");
        assert_eq!(router.query_param("section"), None);

        router.navigate("/lms/courses?section=lms");
        assert_eq!(router.query_param("section").as_deref(), Some("lms"));
    }

    #[test]
    fn test_replace_query_keeps_other_params() {
        let mut router =
            UrlRouter::parse("http://studio.local/dashboard?tab=week&section=admin").unwrap();
        router.replace_query("section", "payments");
        assert_eq!(router.query_param("section").as_deref(), Some("payments"));
        assert_eq!(router.query_param("tab").as_deref(), Some("week"));
        assert_eq!(router.current_path(), "/dashboard");
    }

    #[test]
    fn test_replace_query_on_bare_url() {
        let mut router = UrlRouter::parse("http://studio.local/dashboard").unwrap();
        router.replace_query("section", "main");
        assert_eq!(
            router.current_url(),
            "http://studio.local/dashboard?section=main"
        );
    }
}
