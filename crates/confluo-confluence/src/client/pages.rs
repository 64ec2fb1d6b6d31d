//! Page operations for Confluence API.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::json;
use tracing::info;

use super::ConfluenceClient;
use crate::error::ConfluenceError;
use crate::types::{Page, SearchResults};

impl ConfluenceClient {
    /// Get page by ID with optional field expansion.
    pub fn get_page(&self, page_id: &str, expand: &[&str]) -> Result<Page, ConfluenceError> {
        let mut url = format!("{}/content/{}", self.api_url(), page_id);

        if !expand.is_empty() {
            url.push_str("?expand=");
            url.push_str(&expand.join(","));
        }

        info!("Getting page {}", page_id);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        Self::read_json(response)
    }

    /// Find a page by space key and title.
    pub fn find_page(&self, space: &str, title: &str) -> Result<Option<Page>, ConfluenceError> {
        let url = format!(
            "{}/content?spaceKey={}&title={}&expand=version",
            self.api_url(),
            utf8_percent_encode(space, NON_ALPHANUMERIC),
            utf8_percent_encode(title, NON_ALPHANUMERIC),
        );

        info!("Looking up page '{}' in space {}", title, space);

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()?;

        let results: SearchResults = Self::read_json(response)?;
        Ok(results.results.into_iter().next())
    }

    /// Get the ID of the page with the given title in a space.
    pub fn get_page_id(
        &self,
        space: &str,
        title: &str,
    ) -> Result<Option<String>, ConfluenceError> {
        Ok(self.find_page(space, title)?.map(|page| page.id))
    }

    /// Check whether a page exists in a space.
    pub fn page_exists(&self, space: &str, title: &str) -> Result<bool, ConfluenceError> {
        Ok(self.find_page(space, title)?.is_some())
    }

    /// Create a page with a wiki markup body.
    pub fn create_page(
        &self,
        space: &str,
        title: &str,
        body: &str,
        parent_id: Option<&str>,
    ) -> Result<Page, ConfluenceError> {
        let url = format!("{}/content", self.api_url());

        let mut payload = json!({
            "type": "page",
            "title": title,
            "space": {"key": space},
            "body": {
                "storage": {
                    "value": body,
                    "representation": "wiki"
                }
            }
        });

        if let Some(parent) = parent_id {
            payload["ancestors"] = json!([{"id": parent}]);
        }

        info!("Creating page '{}' in space {}", title, space);

        let payload_bytes = serde_json::to_vec(&payload)?;

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        Self::read_json(response)
    }

    /// Update existing page with a wiki markup body (auto-increments version).
    pub fn update_page(
        &self,
        page_id: &str,
        title: &str,
        body: &str,
        version: u32,
        minor_edit: bool,
        message: Option<&str>,
    ) -> Result<Page, ConfluenceError> {
        let url = format!("{}/content/{}", self.api_url(), page_id);

        let mut payload = json!({
            "type": "page",
            "title": title,
            "body": {
                "storage": {
                    "value": body,
                    "representation": "wiki"
                }
            },
            "version": {"number": version + 1, "minorEdit": minor_edit}
        });

        if let Some(msg) = message {
            payload["version"]["message"] = json!(msg);
        }

        info!(
            "Updating page {} from version {} to {}",
            page_id,
            version,
            version + 1
        );

        let payload_bytes = serde_json::to_vec(&payload)?;

        let response = self
            .agent
            .put(&url)
            .header("Authorization", &self.auth_header)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .send(&payload_bytes[..])?;

        let page: Page = Self::read_json(response)?;
        info!(
            "Updated page {} to version {}",
            page_id, page.version.number
        );
        Ok(page)
    }

    /// Get web URL for page.
    pub fn get_page_url(&self, page_id: &str) -> Result<String, ConfluenceError> {
        let page = self.get_page(page_id, &[])?;

        if let Some(links) = &page.links
            && let Some(webui) = &links.webui
        {
            return Ok(format!("{}{}", self.base_url, webui));
        }

        Ok(format!(
            "{}/pages/viewpage.action?pageId={}",
            self.base_url, page_id
        ))
    }
}
