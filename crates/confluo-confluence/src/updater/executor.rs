//! Page updater implementation.

use std::path::{Path, PathBuf};

use confluo_markup::{MarkdownConverter, PageBody, TocParams};
use tracing::info;

use crate::client::ConfluenceClient;

use super::UpdateConfig;
use super::error::UpdateError;
use super::result::{DryRunResult, UpdateResult};

/// Handles updating Confluence pages from markdown.
pub struct PageUpdater<'a> {
    client: &'a ConfluenceClient,
    config: UpdateConfig,
    converter: MarkdownConverter,
}

impl<'a> PageUpdater<'a> {
    /// Create a new page updater.
    #[must_use]
    pub fn new(client: &'a ConfluenceClient, config: UpdateConfig) -> Self {
        Self {
            client,
            config,
            converter: MarkdownConverter::new(),
        }
    }

    /// Use a custom converter configuration.
    #[must_use]
    pub fn converter(mut self, converter: MarkdownConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Update a Confluence page from markdown content.
    ///
    /// This method:
    /// 1. Converts markdown to wiki markup
    /// 2. Fetches the current page title and version
    /// 3. Uploads every discovered local image as an attachment
    /// 4. Updates the page with the new body
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced image file is missing, reading it
    /// fails, or a Confluence API call fails.
    pub fn update(
        &self,
        page_id: &str,
        markdown_text: &str,
        message: Option<&str>,
    ) -> Result<UpdateResult, UpdateError> {
        let body = self.assemble_body(markdown_text);

        let current_page = self.client.get_page(page_id, &["version"])?;

        let mut uploaded = 0;
        for image in body.local_images() {
            let path = self.resolve_image(image)?;
            let data = std::fs::read(&path)?;
            self.client.upload_attachment(
                page_id,
                &attachment_name(image),
                &data,
                content_type_for(&path),
                None,
            )?;
            uploaded += 1;
        }

        let updated_page = self.client.update_page(
            page_id,
            &current_page.title,
            &body.render(),
            current_page.version.number,
            self.config.minor_edit,
            message,
        )?;

        let url = self.client.get_page_url(page_id)?;
        info!("Published page {} with {} attachment(s)", page_id, uploaded);

        Ok(UpdateResult {
            page: updated_page,
            url,
            attachments_uploaded: uploaded,
        })
    }

    /// Update a page addressed by space key and title.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::PageNotFound`] if no page with that title
    /// exists in the space; otherwise as [`update`](Self::update).
    pub fn update_by_title(
        &self,
        space: &str,
        title: &str,
        markdown_text: &str,
        message: Option<&str>,
    ) -> Result<UpdateResult, UpdateError> {
        let page = self
            .client
            .find_page(space, title)?
            .ok_or_else(|| UpdateError::PageNotFound {
                space: space.to_owned(),
                title: title.to_owned(),
            })?;
        self.update(&page.id, markdown_text, message)
    }

    /// Preview an update without changing the page or uploading anything.
    ///
    /// # Errors
    ///
    /// Returns an error if fetching the current page fails.
    pub fn dry_run(
        &self,
        page_id: &str,
        markdown_text: &str,
    ) -> Result<DryRunResult, UpdateError> {
        let body = self.assemble_body(markdown_text);
        let current_page = self.client.get_page(page_id, &["version"])?;

        let attachment_names = body
            .local_images()
            .iter()
            .map(|image| attachment_name(image))
            .collect();

        Ok(DryRunResult {
            markup: body.render(),
            current_title: current_page.title,
            current_version: current_page.version.number,
            attachment_names,
        })
    }

    fn assemble_body(&self, markdown_text: &str) -> PageBody {
        let mut body = PageBody::new();
        if self.config.prepend_toc {
            body.toc(&TocParams::default());
        }
        body.push_conversion(self.converter.convert(markdown_text));
        body
    }

    fn resolve_image(&self, target: &str) -> Result<PathBuf, UpdateError> {
        let path = self.config.image_dir.join(target);
        if !path.is_file() {
            return Err(UpdateError::MissingImage(path));
        }
        Ok(path)
    }
}

/// Attachment filename for an image target (its final path component).
fn attachment_name(target: &str) -> String {
    target.rsplit('/').next().unwrap_or(target).to_owned()
}

/// Content type inferred from an image path's extension.
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
