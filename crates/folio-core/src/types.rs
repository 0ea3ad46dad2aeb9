//! Display types for the portfolio sidebar

use serde::{Deserialize, Serialize};

/// Prefix shared by every section anchor on the page
pub const SECTION_ANCHOR_PREFIX: &str = "section-";

/// Name and occupation shown beneath the person icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    /// Display name (rendered as the card heading)
    pub name: String,

    /// Occupation line (rendered below the name)
    pub occupation: String,
}

/// A navigable page section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Button label and source of the section anchor
    pub name: String,

    /// Optional blurb shown inside the section itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl Route {
    /// Create a route with no summary
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            summary: None,
        }
    }

    /// Attach a section summary
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// DOM id of the section this route scrolls to.
    pub fn anchor(&self) -> String {
        section_anchor(&self.name)
    }
}

/// Build the element id for a section: `section-<lowercased name>`.
///
/// ```
/// assert_eq!(folio_core::section_anchor("About"), "section-about");
/// ```
pub fn section_anchor(name: &str) -> String {
    format!("{}{}", SECTION_ANCHOR_PREFIX, name.to_lowercase())
}
