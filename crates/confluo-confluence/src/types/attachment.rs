//! Confluence attachment types.

use serde::Deserialize;

/// Confluence attachment.
///
/// Only includes fields that are actually used; serde ignores the rest of
/// the API response.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Attachment ID.
    pub id: String,
    /// Attachment title/filename.
    pub title: String,
}

/// Attachments API response.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentsResponse {
    /// List of attachments.
    pub results: Vec<Attachment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_attachments() {
        let raw = r#"{
            "results": [
                {"id": "att1", "type": "attachment", "title": "flow.png"},
                {"id": "att2", "type": "attachment", "title": "logo.svg"}
            ],
            "size": 2
        }"#;
        let response: AttachmentsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].title, "logo.svg");
    }
}
