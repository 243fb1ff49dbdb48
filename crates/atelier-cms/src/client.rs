//! HTTP client for the CMS data and asset APIs.
//!
//! Wraps `reqwest` with bearer-token auth, dataset-scoped URL building and
//! typed response envelopes. Error bodies are decoded into [`CmsError`];
//! reference-integrity failures on delete surface as
//! [`CmsError::ReferencedDocument`] with the blocking document ids.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use atelier_core::CmsConfig;

use crate::error::CmsError;
use crate::types::{AssetUploadResponse, MutationResponse, QueryResponse};

/// Client for one project/dataset of the hosted CMS.
///
/// Use [`CmsClient::new`] for the configured project or
/// [`CmsClient::with_base_url`] to point at a mock server in tests.
pub struct CmsClient {
    client: Client,
    token: String,
    /// `{host}/v{api_version}/`, always with a trailing slash.
    base_url: Url,
    dataset: String,
}

impl CmsClient {
    /// Creates a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`CmsError::InvalidBaseUrl`] for a malformed host.
    pub fn new(config: &CmsConfig, timeout_secs: u64) -> Result<Self, CmsError> {
        Self::with_base_url(
            &config.api_host,
            &config.api_version,
            &config.dataset,
            &config.api_token,
            timeout_secs,
        )
    }

    /// Creates a client against an explicit host (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`CmsError::InvalidBaseUrl`] if `base_url` is not
    /// an absolute http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        api_version: &str,
        dataset: &str,
        token: &str,
        timeout_secs: u64,
    ) -> Result<Self, CmsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("atelier/0.1 (catalog-import)")
            .build()?;

        let normalised = format!(
            "{}/v{}/",
            base_url.trim_end_matches('/'),
            api_version.trim_start_matches('v')
        );
        let parsed = Url::parse(&normalised).map_err(|e| CmsError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(CmsError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url: parsed,
            dataset: dataset.to_owned(),
        })
    }

    /// Runs a GROQ query and returns its `result`.
    ///
    /// Each `(name, value)` param is sent as `$name=<json>`.
    ///
    /// # Errors
    ///
    /// - [`CmsError::Api`] on a non-2xx status.
    /// - [`CmsError::Http`] on network failure.
    /// - [`CmsError::Deserialize`] if `result` does not match `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        groq: &str,
        params: &[(&str, Value)],
    ) -> Result<T, CmsError> {
        let encoded: Vec<(String, String)> = params
            .iter()
            .map(|(name, value)| (format!("${name}"), value.to_string()))
            .collect();
        let mut pairs: Vec<(&str, &str)> = vec![("query", groq)];
        pairs.extend(encoded.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let url = self.build_url("data/query", &pairs);
        let body = self.send(self.client.get(url)).await?;
        let envelope: QueryResponse<T> =
            serde_json::from_value(body).map_err(|e| CmsError::Deserialize {
                context: format!("query({groq})"),
                source: e,
            })?;
        Ok(envelope.result)
    }

    /// Creates `document` and returns the id the CMS assigned.
    ///
    /// # Errors
    ///
    /// - [`CmsError::Api`] if the mutation is rejected or returns no id.
    /// - [`CmsError::Http`] on network failure.
    pub async fn create_document(&self, document: &Value) -> Result<String, CmsError> {
        let response = self.mutate(json!([{ "create": document }])).await?;
        response
            .results
            .into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| CmsError::Api {
                status: 200,
                message: "create returned no document id".to_owned(),
            })
    }

    /// Deletes the document with `id`.
    ///
    /// # Errors
    ///
    /// - [`CmsError::ReferencedDocument`] if other documents still point at it.
    /// - [`CmsError::Api`] for any other rejection.
    /// - [`CmsError::Http`] on network failure.
    pub async fn delete_document(&self, id: &str) -> Result<(), CmsError> {
        match self.mutate(json!([{ "delete": { "id": id } }])).await {
            Ok(response) => {
                tracing::debug!(id, results = response.results.len(), "delete mutation applied");
                Ok(())
            }
            Err(CmsError::ReferencedDocument {
                referencing_ids, ..
            }) => Err(CmsError::ReferencedDocument {
                id: id.to_owned(),
                referencing_ids,
            }),
            Err(other) => Err(other),
        }
    }

    /// Uploads image bytes and returns the asset document id.
    ///
    /// # Errors
    ///
    /// - [`CmsError::Api`] on a non-2xx status.
    /// - [`CmsError::Http`] on network failure.
    /// - [`CmsError::Deserialize`] if the response lacks `document._id`.
    pub async fn upload_image(&self, bytes: Vec<u8>, filename: &str) -> Result<String, CmsError> {
        let url = self.build_url("assets/images", &[("filename", filename)]);
        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, content_type_for(filename))
            .body(bytes);
        let body = self.send(request).await?;
        let parsed: AssetUploadResponse =
            serde_json::from_value(body).map_err(|e| CmsError::Deserialize {
                context: format!("upload({filename})"),
                source: e,
            })?;
        Ok(parsed.document.id)
    }

    async fn mutate(&self, mutations: Value) -> Result<MutationResponse, CmsError> {
        let url = self.build_url(
            "data/mutate",
            &[("returnIds", "true"), ("visibility", "sync")],
        );
        let request = self
            .client
            .post(url)
            .json(&json!({ "mutations": mutations }));
        let body = self.send(request).await?;
        serde_json::from_value(body).map_err(|e| CmsError::Deserialize {
            context: "mutate".to_owned(),
            source: e,
        })
    }

    /// Adds auth, sends, and decodes the body as JSON.
    async fn send(&self, request: RequestBuilder) -> Result<Value, CmsError> {
        let response = request.bearer_auth(&self.token).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &body));
        }
        Ok(body)
    }

    /// Builds `{base}/{endpoint}/{dataset}?{params}` with encoded query values.
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(endpoint.split('/'))
                .push(&self.dataset);
        }
        if !params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

/// Turns a non-2xx body into the most specific [`CmsError`] it describes.
pub(crate) fn error_from_body(status: u16, body: &Value) -> CmsError {
    let referencing_ids: Vec<String> = body
        .pointer("/error/items")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|item| item.pointer("/error/referencingIDs").and_then(Value::as_array))
        .flatten()
        .filter_map(|v| v.as_str().map(str::to_owned))
        .collect();

    if !referencing_ids.is_empty() {
        let id = body
            .pointer("/error/items/0/error/id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();
        return CmsError::ReferencedDocument {
            id,
            referencing_ids,
        };
    }

    let message = body
        .pointer("/error/description")
        .or_else(|| body.get("message"))
        .or_else(|| body.get("error"))
        .and_then(Value::as_str)
        .or_else(|| body.as_str())
        .map_or_else(|| format!("HTTP {status}"), str::to_owned);
    CmsError::Api { status, message }
}

/// MIME type for an image filename, by extension.
pub(crate) fn content_type_for(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
