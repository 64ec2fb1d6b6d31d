//! Error types for page update operations.

use std::path::PathBuf;

use crate::error::ConfluenceError;

/// Error during page update operation.
#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    /// Confluence API error.
    #[error("Confluence API error: {0}")]
    Confluence(#[from] ConfluenceError),

    /// IO error reading attachment sources.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A referenced local image does not exist on disk.
    #[error("attachment source not found: {0}")]
    MissingImage(PathBuf),

    /// No page with the given title exists in the space.
    #[error("page '{title}' not found in space {space}")]
    PageNotFound {
        /// Space key that was searched.
        space: String,
        /// Page title that was looked up.
        title: String,
    },
}
