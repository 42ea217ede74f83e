//! Network transports built on `fetch`.

use std::collections::HashMap;

use gloo_net::http::Request;

use crate::choice::ChoiceTransport;
use crate::config::LookupConfig;
use crate::error::ClientError;
use crate::labels::LabelLookup;
use crate::model::{ChoiceEvent, ComparisonItem};
use crate::wikidata;

/// Posts choices as JSON to the backend.
pub struct HttpChoiceTransport {
    endpoint: String,
}

impl HttpChoiceTransport {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }
}

impl ChoiceTransport for HttpChoiceTransport {
    async fn post_choice(&self, event: &ChoiceEvent) -> Result<(), ClientError> {
        let response = Request::post(&self.endpoint)
            .json(event)
            .map_err(ClientError::network)?
            .send()
            .await
            .map_err(ClientError::network)?;

        // Any JSON answer counts, including the backend's error objects.
        let text = response.text().await.map_err(ClientError::network)?;
        serde_json::from_str::<serde_json::Value>(&text)?;

        if !response.ok() {
            log::warn!(
                "{} answered HTTP {}: {}",
                self.endpoint,
                response.status(),
                text
            );
        }
        Ok(())
    }
}

/// Batched label lookup against the Wikidata API.
pub struct WikidataLookup {
    config: LookupConfig,
}

impl WikidataLookup {
    pub fn new(config: LookupConfig) -> Self {
        Self { config }
    }
}

impl LabelLookup for WikidataLookup {
    async fn lookup(&self, ids: &[ComparisonItem]) -> Result<HashMap<String, String>, ClientError> {
        let params = wikidata::query_params(&self.config, ids);

        let response = Request::get(&self.config.api_url)
            .query(params.iter().map(|(key, value)| (*key, value.as_str())))
            .send()
            .await
            .map_err(ClientError::network)?;

        if !response.ok() {
            return Err(ClientError::Status {
                status: response.status(),
                url: self.config.api_url.clone(),
            });
        }

        let text = response.text().await.map_err(ClientError::network)?;
        wikidata::parse_labels(&text, &self.config.language).map_err(ClientError::from)
    }
}
