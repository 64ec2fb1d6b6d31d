//! Confluence REST integration for Confluo.
//!
//! The collaborator layer around [`confluo_markup`]: a sync REST client
//! (pages, attachments), TOML configuration, and a [`PageUpdater`] that
//! wires a conversion's `local_images` into attachment uploads before
//! submitting the wiki markup body.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::path::Path;
//! use confluo_confluence::{ConfluenceClient, ConfluenceConfig, PageUpdater, UpdateConfig};
//!
//! let config = ConfluenceConfig::load(Path::new("confluo.toml"))?;
//! let client = ConfluenceClient::from_config(&config);
//!
//! let updater = PageUpdater::new(&client, UpdateConfig::default());
//! let result = updater.update("123456", "# Release notes\n\n- fixed things", None)?;
//! assert!(result.attachments_uploaded == 0);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
pub mod types;
mod updater;

pub use client::ConfluenceClient;
pub use config::{ConfigError, ConfluenceConfig};
pub use error::ConfluenceError;
pub use updater::{DryRunResult, PageUpdater, UpdateConfig, UpdateError, UpdateResult};
