//! Fetches source records from the storefront's export endpoint.

use atelier_core::DataType;
use serde_json::{json, Value};

/// Extra attempts after the first failed fetch.
const FETCH_RETRIES: u32 = 1;

pub(crate) struct ExportSource {
    client: reqwest::Client,
    endpoint: String,
}

impl ExportSource {
    pub(crate) fn new(client: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/api/importData", api_base_url.trim_end_matches('/')),
        }
    }

    /// Records of `data_type`, or an empty list if the endpoint keeps failing
    /// or answers with something other than a JSON array.
    pub(crate) async fn fetch(&self, data_type: DataType) -> Vec<Value> {
        let mut retries_left = FETCH_RETRIES;
        loop {
            match self.fetch_once(data_type).await {
                Ok(Value::Array(items)) => {
                    tracing::info!(%data_type, records = items.len(), "fetched source records");
                    return items;
                }
                Ok(_) => {
                    tracing::warn!(%data_type, "export response is not an array; importing nothing");
                    return Vec::new();
                }
                Err(e) if retries_left > 0 => {
                    retries_left -= 1;
                    tracing::warn!(%data_type, error = %e, "fetch failed; retrying");
                }
                Err(e) => {
                    tracing::error!(%data_type, error = %e, endpoint = %self.endpoint, "fetch failed; importing nothing");
                    return Vec::new();
                }
            }
        }
    }

    async fn fetch_once(&self, data_type: DataType) -> Result<Value, reqwest::Error> {
        self.client
            .post(&self.endpoint)
            .json(&json!({ "type": data_type.as_str() }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}
