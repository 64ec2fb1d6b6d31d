//! Markdown to Confluence wiki markup conversion.
//!
//! This crate is the pure-text core of Confluo: a line-oriented converter
//! from a markdown subset (headings, fenced code, lists, images, links,
//! basic emphasis) to Confluence wiki markup, plus builders for the wiki
//! macros a page body is assembled from. It performs no I/O — image files
//! referenced by a document are reported back to the caller for upload,
//! never read.
//!
//! # Example
//!
//! ```
//! use confluo_markup::MarkdownConverter;
//!
//! let conversion = MarkdownConverter::new().convert("# Header\n- a\n[x](http://y.com)\n");
//! assert_eq!(conversion.markup, "h1. Header\n* a\n[x|http://y.com]\n");
//! assert!(conversion.local_images.is_empty());
//! ```
//!
//! Local image references are collected for the page-assembly layer:
//!
//! ```
//! use confluo_markup::MarkdownConverter;
//!
//! let conversion = MarkdownConverter::new().convert("![diagram](images/flow.png)");
//! assert_eq!(conversion.local_images, vec!["images/flow.png".to_owned()]);
//! ```

mod body;
mod converter;
pub mod format;
mod inline;
mod line;
pub mod macros;
mod section;
mod state;

pub use body::PageBody;
pub use converter::{Conversion, MarkdownConverter};
pub use macros::{Align, CodeBlockParams, CodeTheme, ImageParams, TocParams};
pub use section::{SectionError, section};
