//! Result types for page update operations.

use crate::types::Page;

/// Result of a successful page update.
#[derive(Debug, Clone)]
pub struct UpdateResult {
    /// Updated page as returned by the API.
    pub page: Page,
    /// Web URL of the updated page.
    pub url: String,
    /// Number of image attachments uploaded.
    pub attachments_uploaded: usize,
}

/// Result of a dry-run update (no changes made).
#[derive(Debug, Clone)]
pub struct DryRunResult {
    /// Wiki markup that would be submitted.
    pub markup: String,
    /// Current page title.
    pub current_title: String,
    /// Current page version.
    pub current_version: u32,
    /// Attachment filenames that would be uploaded.
    pub attachment_names: Vec<String>,
}
