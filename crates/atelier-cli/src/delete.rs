//! `clear` and `delete-item`: remove CMS documents after confirmation.
//!
//! Deletes run one at a time. A document that other documents still point at
//! is reported with the referencing ids and left in place.

use std::fmt;
use std::io::{BufRead, Write};

use atelier_cms::{CmsError, ContentStore};
use atelier_core::DataType;

use crate::prompt::Prompt;

/// Order offered by the clear prompt.
pub(crate) const DELETE_CHOICES: [DataType; 3] =
    [DataType::Product, DataType::Color, DataType::Fabric];

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FailedDelete {
    pub id: String,
    /// Empty unless the delete was refused because of inbound references.
    pub referencing_ids: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct DeleteReport {
    pub deleted: Vec<String>,
    pub failed: Vec<FailedDelete>,
}

impl DeleteReport {
    fn record(&mut self, id: &str, result: Result<(), CmsError>) {
        match result {
            Ok(()) => {
                tracing::info!(id, "deleted");
                self.deleted.push(id.to_owned());
            }
            Err(e) => {
                tracing::warn!(id, error = %e, "delete failed");
                self.failed.push(FailedDelete {
                    id: id.to_owned(),
                    referencing_ids: e.referencing_ids().to_vec(),
                    reason: e.to_string(),
                });
            }
        }
    }
}

impl fmt::Display for DeleteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Successfully deleted: {} item(s)", self.deleted.len())?;
        for id in &self.deleted {
            writeln!(f, "   {id}")?;
        }
        if !self.failed.is_empty() {
            writeln!(f, "Failed to delete: {} item(s)", self.failed.len())?;
            for failure in &self.failed {
                writeln!(f, "   ID: {}", failure.id)?;
                if failure.referencing_ids.is_empty() {
                    writeln!(f, "      Reason: {}", failure.reason)?;
                } else {
                    writeln!(f, "      Referenced by: {}", failure.referencing_ids.join(", "))?;
                }
            }
        }
        Ok(())
    }
}

/// Deletes every document of `data_type`, in listing order.
///
/// # Errors
///
/// Fails only if the ids cannot be listed; per-document failures are
/// collected in the report.
pub(crate) async fn delete_all<S: ContentStore>(
    store: &S,
    data_type: DataType,
) -> anyhow::Result<DeleteReport> {
    let ids = store.list_ids(data_type.as_str()).await?;
    let mut report = DeleteReport::default();
    if ids.is_empty() {
        println!("No \"{data_type}\" items found to delete.");
        return Ok(report);
    }

    let total = ids.len();
    for (index, id) in ids.iter().enumerate() {
        tracing::info!(%data_type, progress = index + 1, total, id = %id, "deleting");
        report.record(id, store.delete(id).await);
    }
    Ok(report)
}

pub(crate) async fn delete_one<S: ContentStore>(store: &S, id: &str) -> DeleteReport {
    let mut report = DeleteReport::default();
    report.record(id, store.delete(id).await);
    report
}

/// Prompts for a type and a confirmation, then clears that type.
///
/// Returns `None` when the user declines.
pub(crate) async fn run_clear<S, R, W>(
    store: &S,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<Option<DeleteReport>>
where
    S: ContentStore,
    R: BufRead,
    W: Write,
{
    let data_type = *prompt.select("Select the data type you want to delete:", &DELETE_CHOICES)?;
    let question = format!("Are you sure you want to delete all \"{data_type}\" items?");
    if !prompt.confirm(&question, false)? {
        println!("Deletion canceled.");
        return Ok(None);
    }

    println!("Deleting all \"{data_type}\" items...");
    let report = delete_all(store, data_type).await?;
    print!("{report}");
    Ok(Some(report))
}

/// Prompts for a document id and a confirmation, then deletes it.
///
/// Returns `None` when the user declines.
pub(crate) async fn run_delete_item<S, R, W>(
    store: &S,
    prompt: &mut Prompt<R, W>,
) -> anyhow::Result<Option<DeleteReport>>
where
    S: ContentStore,
    R: BufRead,
    W: Write,
{
    let id = prompt.input_non_empty(
        "Enter the ID of the document you want to delete:",
        "ID cannot be empty!",
    )?;
    let question = format!("Are you sure you want to delete the document with ID \"{id}\"?");
    if !prompt.confirm(&question, false)? {
        println!("Deletion canceled.");
        return Ok(None);
    }

    println!("Deleting document with ID \"{id}\"...");
    let report = delete_one(store, &id).await;
    print!("{report}");
    Ok(Some(report))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::test_support::MemoryStore;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.insert("color-1", "color", "Navy");
        store.insert("color-2", "color", "Rust");
        store.insert("product-1", "product", "Kurta");
        store.block_delete("color-1", &["product-1"]);
        store
    }

    #[tokio::test]
    async fn delete_all_reports_referenced_documents() {
        let store = seeded_store();
        let report = delete_all(&store, DataType::Color).await.expect("lists");

        assert_eq!(report.deleted, vec!["color-2"]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].id, "color-1");
        assert_eq!(report.failed[0].referencing_ids, vec!["product-1"]);
        assert_eq!(store.docs_of("color").len(), 1);
    }

    #[tokio::test]
    async fn delete_all_over_no_documents_is_empty_report() {
        let store = seeded_store();
        let report = delete_all(&store, DataType::Fabric).await.expect("lists");
        assert_eq!(report, DeleteReport::default());
    }

    #[tokio::test]
    async fn clear_declined_deletes_nothing() {
        let store = seeded_store();
        let outcome = run_clear(&store, &mut prompt("product\n\n"))
            .await
            .expect("runs");
        assert!(outcome.is_none());
        assert_eq!(store.len(), 3);
    }

    #[tokio::test]
    async fn clear_confirmed_deletes_selected_type() {
        let store = seeded_store();
        let report = run_clear(&store, &mut prompt("1\ny\n"))
            .await
            .expect("runs")
            .expect("confirmed");
        assert_eq!(report.deleted, vec!["product-1"]);
        assert!(store.docs_of("product").is_empty());
    }

    #[tokio::test]
    async fn delete_item_reasks_for_empty_id_then_deletes() {
        let store = seeded_store();
        let report = run_delete_item(&store, &mut prompt("\ncolor-2\nyes\n"))
            .await
            .expect("runs")
            .expect("confirmed");
        assert_eq!(report.deleted, vec!["color-2"]);
    }

    #[tokio::test]
    async fn delete_item_unknown_id_is_a_no_op_success() {
        let store = seeded_store();
        let report = delete_one(&store, "nope").await;
        assert_eq!(report.deleted, vec!["nope"]);
        assert!(report.failed.is_empty());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn report_gives_reason_for_unreferenced_failures() {
        let mut report = DeleteReport::default();
        report.record(
            "x",
            Err(CmsError::Api {
                status: 403,
                message: "permission denied".to_string(),
            }),
        );
        assert!(report.failed[0].referencing_ids.is_empty());
        let text = report.to_string();
        assert!(text.contains("ID: x"));
        assert!(text.contains("Reason:"));
        assert!(text.contains("permission denied"));
    }

    #[test]
    fn report_lists_referencing_ids() {
        let report = DeleteReport {
            deleted: vec!["a".to_string()],
            failed: vec![FailedDelete {
                id: "b".to_string(),
                referencing_ids: vec!["c".to_string(), "d".to_string()],
                reason: "referenced".to_string(),
            }],
        };
        let text = report.to_string();
        assert!(text.contains("Successfully deleted: 1 item(s)"));
        assert!(text.contains("Failed to delete: 1 item(s)"));
        assert!(text.contains("Referenced by: c, d"));
    }
}
