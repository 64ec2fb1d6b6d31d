//! Page updater for Confluence.
//!
//! This module provides the [`PageUpdater`] struct that encapsulates the
//! workflow for publishing a markdown document to a Confluence page:
//!
//! 1. Convert markdown to wiki markup
//! 2. Fetch current page content
//! 3. Upload discovered local images as attachments
//! 4. Update the page
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::PathBuf;
//! use confluo_confluence::{ConfluenceClient, PageUpdater, UpdateConfig};
//!
//! let client = ConfluenceClient::new(
//!     "https://confluence.example.com",
//!     "docs@example.com",
//!     "api-token",
//! );
//! let config = UpdateConfig {
//!     image_dir: PathBuf::from("docs"),
//!     prepend_toc: true,
//!     minor_edit: false,
//! };
//! let updater = PageUpdater::new(&client, config);
//!
//! // Perform update
//! let result = updater.update("123", "# Title\n\nContent", Some("Update message"))?;
//!
//! // Or dry-run to preview changes
//! let dry_run = updater.dry_run("123", "# Title\n\nContent")?;
//! # Ok(())
//! # }
//! ```

mod error;
mod executor;
mod result;

pub use error::UpdateError;
pub use executor::PageUpdater;
pub use result::{DryRunResult, UpdateResult};

use std::path::PathBuf;

/// Configuration for updating a Confluence page from markdown.
#[derive(Clone, Debug)]
pub struct UpdateConfig {
    /// Directory local image references are resolved against.
    pub image_dir: PathBuf,
    /// Whether to prepend a table of contents macro to the page body.
    pub prepend_toc: bool,
    /// Whether updates are flagged as minor edits.
    pub minor_edit: bool,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("."),
            prepend_toc: false,
            minor_edit: false,
        }
    }
}
