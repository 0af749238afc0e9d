use urlencoding::encode;

use crate::error::FetchError;
use crate::paste_id::PasteId;
use crate::types::UpstreamPaste;

/// Client for the paste service's read API.
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    base_url: String,
}

impl Upstream {
    pub fn new(base_url: &str) -> Self {
        Upstream {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The read API location for a paste.
    pub fn paste_url(&self, id: &PasteId) -> String {
        format!(
            "{base_url}/api/v2/paste/{id}",
            base_url = self.base_url,
            id = encode(id.as_str())
        )
    }

    /// Get a paste from the service.
    pub async fn get_paste(&self, id: &PasteId) -> Result<UpstreamPaste, FetchError> {
        let body = self
            .client
            .get(self.paste_url(id))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }
}
