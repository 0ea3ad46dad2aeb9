//! Site configuration
//!
//! The sidebar is driven entirely by one static document:
//!
//! ```json
//! {
//!   "initialInformation": { "name": "Ada Lovelace", "occupation": "Analyst" },
//!   "routes": [{ "name": "About" }, { "name": "Projects" }],
//!   "links": ["https://example.com"]
//! }
//! ```
//!
//! A built-in default is compiled in; a file on disk may replace it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::types::{ProfileInfo, Route};

/// Everything the sidebar needs to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Name and occupation for the profile card
    pub initial_information: ProfileInfo,

    /// Navigation routes, in display order
    pub routes: Vec<Route>,

    /// Pool the person icon picks a random link from
    #[serde(default)]
    pub links: Vec<String>,
}

impl SiteConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            routes = config.routes.len(),
            links = config.links.len(),
            "Loaded site config"
        );
        Ok(config)
    }

    /// Check the invariants the UI relies on.
    ///
    /// Route names must be unique ignoring case, otherwise two buttons
    /// would target the same section anchor.
    pub fn validate(&self) -> FolioResult<()> {
        if self.initial_information.name.trim().is_empty() {
            return Err(FolioError::InvalidConfig("profile name is empty".to_string()));
        }

        let mut anchors = HashSet::new();
        for route in &self.routes {
            if route.name.trim().is_empty() {
                return Err(FolioError::InvalidConfig("route name is empty".to_string()));
            }
            if !anchors.insert(route.anchor()) {
                return Err(FolioError::InvalidConfig(format!(
                    "duplicate route: {}",
                    route.name
                )));
            }
        }

        if self.links.iter().any(|link| link.trim().is_empty()) {
            return Err(FolioError::InvalidConfig("link pool contains an empty link".to_string()));
        }

        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            initial_information: ProfileInfo {
                name: "Jane Doe".to_string(),
                occupation: "Software Engineer".to_string(),
            },
            routes: vec![
                Route::new("About").with_summary("A little about who I am and what I do."),
                Route::new("Experience").with_summary("Where I have worked and what I shipped."),
                Route::new("Projects").with_summary("Things I have built in my spare time."),
                Route::new("Contact").with_summary("Ways to get in touch."),
            ],
            links: vec![
                "https://www.rust-lang.org".to_string(),
                "https://dioxuslabs.com".to_string(),
                "https://github.com".to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "initialInformation": { "name": "Ada Lovelace", "occupation": "Analyst" },
        "routes": [{ "name": "About" }, { "name": "Projects", "summary": "Engines" }],
        "links": ["https://example.com/a", "https://example.com/b"]
    }"#;

    #[test]
    fn parses_camel_case_document() {
        let config = SiteConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.initial_information.name, "Ada Lovelace");
        assert_eq!(config.initial_information.occupation, "Analyst");
        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[1].summary.as_deref(), Some("Engines"));
        assert_eq!(config.links.len(), 2);
    }

    #[test]
    fn links_default_to_empty() {
        let json = r#"{
            "initialInformation": { "name": "Ada", "occupation": "Analyst" },
            "routes": []
        }"#;
        let config = SiteConfig::from_json(json).unwrap();
        assert!(config.links.is_empty());
    }

    #[test]
    fn rejects_duplicate_routes_ignoring_case() {
        let json = r#"{
            "initialInformation": { "name": "Ada", "occupation": "Analyst" },
            "routes": [{ "name": "About" }, { "name": "ABOUT" }]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert!(matches!(err, FolioError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_name() {
        let mut config = SiteConfig::default();
        config.initial_information.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_blank_link() {
        let mut config = SiteConfig::default();
        config.links.push(String::new());
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_json_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, FolioError::Json(_)));
    }

    #[test]
    fn default_config_is_valid() {
        SiteConfig::default().validate().unwrap();
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.routes[0].name, "About");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, FolioError::Io(_)));
    }
}
