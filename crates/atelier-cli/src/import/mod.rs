//! `import`: copy one dataset from the export endpoint into the CMS.
//!
//! Records are processed one at a time in source order. A failing record is
//! logged and counted; it never stops the rest of the run.

mod images;
mod source;
mod transform;

use std::fmt;
use std::io::{BufRead, Write};

use atelier_cms::ContentStore;
use atelier_core::{validate, AppConfig, ColorRecord, DataType, ImportConfig, ProductRecord};
use serde_json::{json, Value};

use crate::prompt::Prompt;

use images::ImageUploader;
use source::ExportSource;

/// Order offered by the import prompt.
pub(crate) const IMPORT_CHOICES: [DataType; 3] =
    [DataType::Fabric, DataType::Color, DataType::Product];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ImportSummary {
    pub created: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "created {}, skipped {} (already present), failed {}",
            self.created, self.skipped, self.failed
        )
    }
}

enum Outcome {
    Created,
    Skipped,
    Failed,
}

impl ImportSummary {
    fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Created => self.created += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Asks for a data type, then imports that dataset.
///
/// # Errors
///
/// Fails only if the prompt cannot be answered or the HTTP client cannot be
/// built. Per-record problems are reflected in the printed summary.
pub(crate) async fn run_import<S, R, W>(
    store: &S,
    import: &ImportConfig,
    app: &AppConfig,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<ImportSummary>
where
    S: ContentStore,
    R: BufRead,
    W: Write,
{
    let data_type = *prompt.select("Which type of data do you want to import?", &IMPORT_CHOICES)?;

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(app.http_timeout_secs))
        .build()?;
    let source = ExportSource::new(http.clone(), &import.api_base_url);
    let mut uploader = ImageUploader::new(http, app.public_dir.clone());

    let summary = import_type(store, &source, &mut uploader, data_type).await;
    println!("{data_type} import finished: {summary}");
    Ok(summary)
}

/// Fetches the `data_type` dataset and imports every record.
pub(crate) async fn import_type<S: ContentStore>(
    store: &S,
    source: &ExportSource,
    uploader: &mut ImageUploader,
    data_type: DataType,
) -> ImportSummary {
    let records = source.fetch(data_type).await;
    match data_type {
        DataType::Fabric => import_fabrics(store, &records).await,
        DataType::Color => import_colors(store, &records).await,
        DataType::Product => import_products(store, uploader, &records).await,
    }
}

/// Fabric entries are plain names; `{"name": ...}` objects are accepted too.
fn fabric_name(entry: &Value) -> Option<&str> {
    entry
        .as_str()
        .or_else(|| entry.get("name").and_then(Value::as_str))
}

pub(crate) async fn import_fabrics<S: ContentStore>(store: &S, records: &[Value]) -> ImportSummary {
    let mut summary = ImportSummary::default();
    for entry in records {
        let outcome = match fabric_name(entry) {
            Some(name) => {
                let document = json!({ "_type": DataType::Fabric.as_str(), "name": name });
                import_named(store, DataType::Fabric, name, document).await
            }
            None => {
                tracing::error!(%entry, "fabric entry has no name");
                Outcome::Failed
            }
        };
        summary.record(&outcome);
    }
    tracing::info!(%summary, "fabrics processed");
    summary
}

pub(crate) async fn import_colors<S: ContentStore>(store: &S, records: &[Value]) -> ImportSummary {
    let mut summary = ImportSummary::default();
    for entry in records {
        let outcome = match serde_json::from_value::<ColorRecord>(entry.clone()) {
            Ok(color) => {
                let document = json!({
                    "_type": DataType::Color.as_str(),
                    "name": color.name,
                    "code": color.code,
                });
                import_named(store, DataType::Color, &color.name, document).await
            }
            Err(e) => {
                tracing::error!(%entry, error = %e, "malformed color entry");
                Outcome::Failed
            }
        };
        summary.record(&outcome);
    }
    tracing::info!(%summary, "colors processed");
    summary
}

pub(crate) async fn import_products<S: ContentStore>(
    store: &S,
    uploader: &mut ImageUploader,
    records: &[Value],
) -> ImportSummary {
    let mut summary = ImportSummary::default();
    for entry in records {
        let record = match serde_json::from_value::<ProductRecord>(entry.clone()) {
            Ok(record) => record,
            Err(e) => {
                tracing::error!(error = %e, "malformed product entry");
                summary.record(&Outcome::Failed);
                continue;
            }
        };

        tracing::info!(title = %record.title, "processing product");
        let document = transform::build_product_document(store, uploader, &record).await;
        warn_on_violations(DataType::Product, &record.title, &document);

        let outcome = match store.create(document).await {
            Ok(id) => {
                tracing::info!(title = %record.title, id = %id, "created product");
                Outcome::Created
            }
            Err(e) => {
                tracing::error!(title = %record.title, error = %e, "failed to create product");
                Outcome::Failed
            }
        };
        summary.record(&outcome);
    }
    tracing::info!(%summary, "products processed");
    summary
}

/// Creates `document` unless a `data_type` document named `name` exists.
async fn import_named<S: ContentStore>(
    store: &S,
    data_type: DataType,
    name: &str,
    document: Value,
) -> Outcome {
    match store.find_id_by_field(data_type.as_str(), "name", name).await {
        Ok(Some(id)) => {
            tracing::info!(%data_type, name, id = %id, "already exists; skipping");
            Outcome::Skipped
        }
        Ok(None) => {
            warn_on_violations(data_type, name, &document);
            match store.create(document).await {
                Ok(id) => {
                    tracing::info!(%data_type, name, id = %id, "created");
                    Outcome::Created
                }
                Err(e) => {
                    tracing::error!(%data_type, name, error = %e, "create failed");
                    Outcome::Failed
                }
            }
        }
        Err(e) => {
            tracing::error!(%data_type, name, error = %e, "existence check failed");
            Outcome::Failed
        }
    }
}

/// Logs schema violations. API writes are not gated on them.
fn warn_on_violations(data_type: DataType, label: &str, document: &Value) {
    let schema = validate::schema_for(data_type);
    for violation in schema.validate(document) {
        tracing::warn!(schema = schema.type_name(), label, %violation, "document fails schema rule");
    }
}

#[cfg(test)]
#[path = "import_test.rs"]
mod tests;
