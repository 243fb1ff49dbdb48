//! The document-store seam the import and delete flows are written against.

use std::future::Future;

use serde_json::{json, Value};

use crate::client::CmsClient;
use crate::error::CmsError;

const LIST_IDS_QUERY: &str = "*[_type == $type]._id";

/// Operations the catalog tools need from a document store.
///
/// [`CmsClient`] talks to the hosted CMS; tests substitute in-memory stores.
pub trait ContentStore {
    /// Id of the first `doc_type` document whose `field` equals `value`.
    fn find_id_by_field(
        &self,
        doc_type: &str,
        field: &str,
        value: &str,
    ) -> impl Future<Output = Result<Option<String>, CmsError>>;

    /// Ids of every `doc_type` document.
    fn list_ids(&self, doc_type: &str) -> impl Future<Output = Result<Vec<String>, CmsError>>;

    /// Creates a document (which carries its own `_type`) and returns its id.
    fn create(&self, document: Value) -> impl Future<Output = Result<String, CmsError>>;

    fn delete(&self, id: &str) -> impl Future<Output = Result<(), CmsError>>;

    /// Stores image bytes as an asset and returns the asset id.
    fn upload_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> impl Future<Output = Result<String, CmsError>>;
}

/// `*[_type == $type && {field} == $value][0]._id`, after checking that
/// `field` is a plain identifier.
pub(crate) fn lookup_query(field: &str) -> Result<String, CmsError> {
    let mut chars = field.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !valid_start || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CmsError::InvalidField(field.to_owned()));
    }
    Ok(format!("*[_type == $type && {field} == $value][0]._id"))
}

impl ContentStore for CmsClient {
    async fn find_id_by_field(
        &self,
        doc_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<String>, CmsError> {
        let groq = lookup_query(field)?;
        self.query(&groq, &[("type", json!(doc_type)), ("value", json!(value))])
            .await
    }

    async fn list_ids(&self, doc_type: &str) -> Result<Vec<String>, CmsError> {
        self.query(LIST_IDS_QUERY, &[("type", json!(doc_type))])
            .await
    }

    async fn create(&self, document: Value) -> Result<String, CmsError> {
        self.create_document(&document).await
    }

    async fn delete(&self, id: &str) -> Result<(), CmsError> {
        self.delete_document(id).await
    }

    async fn upload_image(&self, bytes: Vec<u8>, filename: &str) -> Result<String, CmsError> {
        CmsClient::upload_image(self, bytes, filename).await
    }
}
