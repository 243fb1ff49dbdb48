//! Wire types for the CMS HTTP API and the document fragments the importer
//! assembles (references, images, rich-text blocks).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// API envelopes
// ---------------------------------------------------------------------------

/// `GET data/query/{dataset}` response.
#[derive(Debug, Deserialize)]
pub struct QueryResponse<T> {
    pub result: T,
}

/// `POST data/mutate/{dataset}` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

#[derive(Debug, Deserialize)]
pub struct MutationResult {
    pub id: String,
    #[serde(default)]
    pub operation: Option<String>,
}

/// `POST assets/images/{dataset}` response.
#[derive(Debug, Deserialize)]
pub struct AssetUploadResponse {
    pub document: AssetDocument,
}

#[derive(Debug, Deserialize)]
pub struct AssetDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

// ---------------------------------------------------------------------------
// Document fragments
// ---------------------------------------------------------------------------

/// `{"_type": "reference", "_ref": id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_ref")]
    pub target: String,
}

impl Reference {
    #[must_use]
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            kind: "reference".to_string(),
            target: id.into(),
        }
    }
}

/// An image field pointing at an uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageField {
    #[serde(rename = "_type")]
    pub kind: String,
    pub asset: Reference,
}

impl ImageField {
    #[must_use]
    pub fn for_asset(asset_id: impl Into<String>) -> Self {
        Self {
            kind: "image".to_string(),
            asset: Reference::to(asset_id),
        }
    }
}

/// Array members need a `_key` unique within their array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyedImage {
    #[serde(rename = "_key")]
    pub key: String,
    #[serde(flatten)]
    pub image: ImageField,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    #[serde(rename = "_type")]
    pub kind: String,
    pub current: String,
}

impl Slug {
    #[must_use]
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            kind: "slug".to_string(),
            current: current.into(),
        }
    }
}

/// A rich-text paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_key")]
    pub key: String,
    pub style: String,
    pub mark_defs: Vec<serde_json::Value>,
    pub children: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    #[serde(rename = "_type")]
    pub kind: String,
    #[serde(rename = "_key")]
    pub key: String,
    pub text: String,
    pub marks: Vec<String>,
}

impl Block {
    /// One `normal` paragraph holding a single unmarked span.
    #[must_use]
    pub fn paragraph(block_key: String, span_key: String, text: impl Into<String>) -> Self {
        Self {
            kind: "block".to_string(),
            key: block_key,
            style: "normal".to_string(),
            mark_defs: Vec::new(),
            children: vec![Span {
                kind: "span".to_string(),
                key: span_key,
                text: text.into(),
                marks: Vec::new(),
            }],
        }
    }
}
