//! Attachment operations for Confluence API.

use rand::RngExt;
use tracing::info;

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{Attachment, AttachmentsResponse};

impl ConfluenceClient {
    /// Upload or update attachment (upsert by filename).
    pub fn upload_attachment(
        &self,
        page_id: &str,
        filename: &str,
        data: &[u8],
        content_type: &str,
        comment: Option<&str>,
    ) -> Result<Attachment, ConfluenceError> {
        // Check if attachment already exists
        let existing = self.find_attachment_by_name(page_id, filename)?;

        let url = if let Some(ref att) = existing {
            info!(
                "Updating existing attachment '{}' (id={})",
                filename, att.id
            );
            format!(
                "{}/content/{}/child/attachment/{}/data",
                self.api_url(),
                page_id,
                att.id
            )
        } else {
            info!(
                "Uploading new attachment '{}' to page {}",
                filename, page_id
            );
            format!("{}/content/{}/child/attachment", self.api_url(), page_id)
        };

        let boundary = format!("----ConfluoFormBoundary{:016x}", rand::rng().random::<u64>());
        let body = multipart_body(&boundary, filename, data, content_type, comment);

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={boundary}"),
            )
            .header("X-Atlassian-Token", "nocheck")
            .header("Accept", "application/json")
            .send(&body[..])?;

        // Response is a list for new uploads, single object for updates
        if existing.is_some() {
            Self::read_json(response)
        } else {
            let response: AttachmentsResponse = Self::read_json(response)?;
            response
                .results
                .into_iter()
                .next()
                .ok_or_else(|| ConfluenceError::HttpResponse {
                    status: 200,
                    body: "Empty attachment response".to_owned(),
                })
        }
    }

    /// List attachments on a page.
    pub fn get_attachments(&self, page_id: &str) -> Result<AttachmentsResponse, ConfluenceError> {
        let url = format!("{}/content/{}/child/attachment", self.api_url(), page_id);

        info!("Getting attachments for page {}", page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        Self::read_json(response)
    }

    /// Find attachment by filename on a page.
    pub fn find_attachment_by_name(
        &self,
        page_id: &str,
        filename: &str,
    ) -> Result<Option<Attachment>, ConfluenceError> {
        let attachments = self.get_attachments(page_id)?;
        Ok(attachments
            .results
            .into_iter()
            .find(|a| a.title == filename))
    }
}

/// Build a multipart/form-data body with a file part and optional comment.
fn multipart_body(
    boundary: &str,
    filename: &str,
    data: &[u8],
    content_type: &str,
    comment: Option<&str>,
) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + 512);

    // File part
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(b"\r\n");

    // Comment part if provided
    if let Some(c) = comment {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(b"Content-Disposition: form-data; name=\"comment\"\r\n\r\n");
        body.extend_from_slice(c.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    // End boundary
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipart_body_layout() {
        let body = multipart_body("XYZ", "flow.png", b"\x89PNG", "image/png", None);
        let text = String::from_utf8_lossy(&body);

        assert!(text.starts_with("--XYZ\r\n"));
        assert!(text.contains("Content-Disposition: form-data; name=\"file\"; filename=\"flow.png\"\r\n"));
        assert!(text.contains("Content-Type: image/png\r\n\r\n"));
        assert!(text.ends_with("--XYZ--\r\n"));
    }

    #[test]
    fn test_multipart_body_with_comment() {
        let body = multipart_body("B", "a.png", b"data", "image/png", Some("synced"));
        let text = String::from_utf8_lossy(&body);

        assert!(text.contains("Content-Disposition: form-data; name=\"comment\"\r\n\r\nsynced\r\n"));
        // Comment part comes after the file part and before the end boundary.
        let comment_at = text.find("name=\"comment\"").unwrap();
        let file_at = text.find("name=\"file\"").unwrap();
        let end_at = text.rfind("--B--").unwrap();
        assert!(file_at < comment_at && comment_at < end_at);
    }
}
