//! Catalog records as they travel between the generator, the export
//! endpoint and the import flow.
//!
//! These are the *source* shapes (camelCase JSON, references by name). The
//! CMS document shape, with references by id, is assembled by the importer.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Who a product is cut for. Drives the outfit-type field and the image pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    Men,
    Women,
}

impl Audience {
    pub const ALL: [Audience; 2] = [Audience::Men, Audience::Women];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Audience::Men => "men",
            Audience::Women => "women",
        }
    }

    /// Exact match against the wire names.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == raw)
    }
}

/// Dataset / document type names understood by the export endpoint and the CMS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Fabric,
    Color,
    Product,
}

impl DataType {
    pub const ALL: [DataType; 3] = [DataType::Fabric, DataType::Color, DataType::Product];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Fabric => "fabric",
            DataType::Color => "color",
            DataType::Product => "product",
        }
    }

    /// Case-insensitive match against the known type names.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entry of the color dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub name: String,
    /// `#RRGGBB`.
    pub code: String,
}

/// A synthetic or hand-written product, references expressed by display name.
///
/// Everything except `title` may be absent in hand-written source files; the
/// importer fills defaults. `audience`, `discount` and `stock` are kept as
/// written so out-of-range values reach schema validation as warnings
/// instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub sub_title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// `men` or `women` when well-formed.
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub men_outfit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub women_outfit_type: Option<String>,
    #[serde(default)]
    pub season: Option<Vec<String>>,
    #[serde(default)]
    pub designs: Option<Vec<String>>,
    #[serde(default)]
    pub occasions: Option<Vec<String>>,
    /// Fabric display name.
    #[serde(default)]
    pub fabric: Option<String>,
    /// Percent, 0–100.
    #[serde(default)]
    pub discount: Option<Number>,
    #[serde(default)]
    pub is_new_arrival: Option<bool>,
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub relevant_tags: Option<Vec<String>>,
    #[serde(default)]
    pub is_featured: Option<bool>,
    #[serde(default)]
    pub is_popular: Option<bool>,
}

/// One color/stock/image combination of a [`ProductRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantRecord {
    /// Color display name.
    #[serde(default)]
    pub color: Option<String>,
    /// Local public path (`/images/...`) or remote `http(s)` URL.
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub stock: Option<Number>,
}
