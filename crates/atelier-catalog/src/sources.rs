//! Fabric and color name lists the generator draws from.

use std::collections::HashSet;
use std::path::Path;

use atelier_core::reference;
use atelier_core::ColorRecord;
use serde::Deserialize;

/// Color overrides may be plain names or `{name, code}` records.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorEntry {
    Name(String),
    Record(ColorRecord),
}

impl ColorEntry {
    fn into_name(self) -> String {
        match self {
            ColorEntry::Name(name) => name,
            ColorEntry::Record(record) => record.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSources {
    pub fabrics: Vec<String>,
    pub colors: Vec<String>,
}

impl CatalogSources {
    /// The built-in lists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            fabrics: reference::fallback_fabrics(),
            colors: reference::fallback_color_names(),
        }
    }

    /// Reads `fabrics.json` and `colors.json` from `data_dir`.
    ///
    /// Each file is optional: a missing, unreadable, unparseable or empty file
    /// falls back to the built-in list for that kind only. Repeated names are
    /// dropped, keeping the first occurrence.
    #[must_use]
    pub fn load(data_dir: &Path) -> Self {
        let fabrics = read_list::<String>(&data_dir.join("fabrics.json"))
            .map(dedupe)
            .unwrap_or_else(reference::fallback_fabrics);
        let colors = read_list::<ColorEntry>(&data_dir.join("colors.json"))
            .map(|entries| dedupe(entries.into_iter().map(ColorEntry::into_name).collect()))
            .unwrap_or_else(reference::fallback_color_names);
        Self { fabrics, colors }
    }
}

fn dedupe(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn read_list<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<Vec<T>> {
    if !path.exists() {
        return None;
    }
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable override file; using built-in list");
            return None;
        }
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) if !items.is_empty() => Some(items),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unparseable override file; using built-in list");
            None
        }
    }
}
