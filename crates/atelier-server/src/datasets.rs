//! Static datasets served by the export endpoint.
//!
//! Each dataset is read once at startup and kept pre-serialized, so a request
//! only clones a reference-counted byte buffer.

use std::path::Path;

use anyhow::Context;
use atelier_core::DataType;
use axum::body::Bytes;
use serde_json::Value;

#[derive(Debug, Clone)]
struct Dataset {
    body: Bytes,
    len: usize,
}

impl Dataset {
    fn empty() -> Self {
        Self {
            body: Bytes::from_static(b"[]"),
            len: 0,
        }
    }

    fn from_items(items: &[Value]) -> anyhow::Result<Self> {
        Ok(Self {
            body: Bytes::from(serde_json::to_vec(items)?),
            len: items.len(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct Datasets {
    fabrics: Dataset,
    colors: Dataset,
    products: Dataset,
}

impl Datasets {
    /// Reads `fabrics.json`, `colors.json` and `products.json` from `data_dir`.
    ///
    /// A missing file yields an empty dataset with a warning.
    ///
    /// # Errors
    ///
    /// Fails if a present file cannot be read, is not valid JSON, or is not
    /// a top-level array.
    pub fn load(data_dir: &Path) -> anyhow::Result<Self> {
        Ok(Self {
            fabrics: load_one(data_dir, DataType::Fabric)?,
            colors: load_one(data_dir, DataType::Color)?,
            products: load_one(data_dir, DataType::Product)?,
        })
    }

    #[cfg(test)]
    pub fn from_values(fabrics: &[Value], colors: &[Value], products: &[Value]) -> anyhow::Result<Self> {
        Ok(Self {
            fabrics: Dataset::from_items(fabrics)?,
            colors: Dataset::from_items(colors)?,
            products: Dataset::from_items(products)?,
        })
    }

    fn get(&self, data_type: DataType) -> &Dataset {
        match data_type {
            DataType::Fabric => &self.fabrics,
            DataType::Color => &self.colors,
            DataType::Product => &self.products,
        }
    }

    /// Serialized JSON array for `data_type`.
    pub fn body(&self, data_type: DataType) -> Bytes {
        self.get(data_type).body.clone()
    }

    pub fn len(&self, data_type: DataType) -> usize {
        self.get(data_type).len
    }
}

/// `fabric` → `fabrics.json`
fn file_name(data_type: DataType) -> String {
    format!("{}s.json", data_type.as_str())
}

fn load_one(data_dir: &Path, data_type: DataType) -> anyhow::Result<Dataset> {
    let path = data_dir.join(file_name(data_type));
    if !path.exists() {
        tracing::warn!(path = %path.display(), "dataset file missing; serving an empty array");
        return Ok(Dataset::empty());
    }

    let raw = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
    let value: Value =
        serde_json::from_slice(&raw).with_context(|| format!("parsing {}", path.display()))?;
    let items = value
        .as_array()
        .with_context(|| format!("{} must contain a JSON array", path.display()))?;
    Dataset::from_items(items)
}
