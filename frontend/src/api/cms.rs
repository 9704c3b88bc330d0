use reqwest::Client;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::CmsSettings;

#[derive(Debug, Error)]
enum CmsError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("entry body is not a JSON object")]
    MalformedBody,
}

/// Fetches content entries from the hosted CMS. Endpoint and token are
/// resolved per call from [`CmsSettings::load`] unless pinned for tests.
#[derive(Clone)]
pub struct CmsClient {
    client: Client,
    base_url: Option<String>,
    settings: Option<CmsSettings>,
}

impl Default for CmsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CmsClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            settings: None,
        }
    }

    pub fn new_with_settings(settings: CmsSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            settings: Some(settings),
        }
    }

    /// Pins the host, keeping the CMS path shape. Used by host tests.
    pub fn new_with_base_url(base_url: impl Into<String>, settings: CmsSettings) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            settings: Some(settings),
        }
    }

    /// Returns the `fields` mapping of the entry, or an empty mapping on any
    /// failure. Errors never propagate past this boundary.
    pub async fn entry_fields(&self, entry_id: &str) -> Map<String, Value> {
        match self.fetch_entry(entry_id).await {
            Ok(fields) => fields,
            Err(err) => {
                log::warn!("cms entry {} fetch failed: {}", entry_id, err);
                Map::new()
            }
        }
    }

    async fn fetch_entry(&self, entry_id: &str) -> Result<Map<String, Value>, CmsError> {
        let settings = self
            .settings
            .clone()
            .unwrap_or_else(CmsSettings::load);
        let url = match &self.base_url {
            Some(base) => format!("{}{}", base, settings.entry_path(entry_id)),
            None => settings.entry_url(entry_id),
        };

        let body: Value = self.client.get(url).send().await?.json().await?;
        if !body.is_object() {
            return Err(CmsError::MalformedBody);
        }
        Ok(body
            .get("fields")
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default())
    }
}
