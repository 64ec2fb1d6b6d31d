//! Confluence page types.

use serde::{Deserialize, Serialize};

/// Confluence page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Content type (always "page").
    #[serde(rename = "type")]
    pub content_type: String,
    /// Page title.
    pub title: String,
    /// Version information.
    pub version: Version,
    /// Page body content.
    #[serde(default)]
    pub body: Option<Body>,
    /// Hypermedia links.
    #[serde(rename = "_links", default)]
    pub links: Option<Links>,
}

/// Page version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Version {
    /// Version number.
    pub number: u32,
    /// Whether this version is a minor edit.
    #[serde(rename = "minorEdit", default)]
    pub minor_edit: bool,
    /// Version message/comment.
    #[serde(default)]
    pub message: Option<String>,
}

/// Page body content.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Body {
    /// Storage representation content.
    #[serde(default)]
    pub storage: Option<Storage>,
}

/// Storage representation of a page body.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Storage {
    /// Body content.
    pub value: String,
    /// Content representation (`wiki` or `storage`).
    pub representation: String,
}

/// Hypermedia links.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Links {
    /// Web UI link.
    #[serde(default)]
    pub webui: Option<String>,
    /// API self link.
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
}

/// Content search response.
///
/// Only includes the fields we read; serde ignores the rest.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    /// Matching pages.
    pub results: Vec<Page>,
    /// Number of results.
    pub size: u32,
}
