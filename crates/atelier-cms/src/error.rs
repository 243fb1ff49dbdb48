use thiserror::Error;

/// Errors returned by the CMS client.
#[derive(Debug, Error)]
pub enum CmsError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The CMS answered with a non-2xx status.
    #[error("CMS API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A delete was refused because other documents still reference the target.
    #[error("document {id} is still referenced by {} document(s)", referencing_ids.len())]
    ReferencedDocument {
        id: String,
        referencing_ids: Vec<String>,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Field names are interpolated into queries, so only identifiers are allowed.
    #[error("invalid field name for lookup: {0}")]
    InvalidField(String),
}

impl CmsError {
    /// Ids of the documents blocking a delete; empty for every other error.
    #[must_use]
    pub fn referencing_ids(&self) -> &[String] {
        match self {
            CmsError::ReferencedDocument {
                referencing_ids, ..
            } => referencing_ids,
            _ => &[],
        }
    }
}
