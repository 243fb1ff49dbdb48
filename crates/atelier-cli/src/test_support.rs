//! In-memory [`ContentStore`] for exercising the import and delete flows.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use atelier_cms::{CmsError, ContentStore};
use serde_json::Value;

#[derive(Default)]
pub(crate) struct MemoryStore {
    docs: RefCell<Vec<Value>>,
    /// id → ids of documents that block its deletion.
    referenced_by: RefCell<HashMap<String, Vec<String>>>,
    next_id: Cell<usize>,
    pub(crate) uploads: RefCell<Vec<String>>,
    pub(crate) fail_creates: Cell<bool>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Seeds a document with a fixed id.
    pub(crate) fn insert(&self, id: &str, doc_type: &str, name: &str) {
        self.docs.borrow_mut().push(serde_json::json!({
            "_id": id,
            "_type": doc_type,
            "name": name,
        }));
    }

    pub(crate) fn block_delete(&self, id: &str, referencing: &[&str]) {
        self.referenced_by.borrow_mut().insert(
            id.to_owned(),
            referencing.iter().map(|s| (*s).to_owned()).collect(),
        );
    }

    pub(crate) fn docs_of(&self, doc_type: &str) -> Vec<Value> {
        self.docs
            .borrow()
            .iter()
            .filter(|d| d["_type"] == doc_type)
            .cloned()
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.docs.borrow().len()
    }
}

impl ContentStore for MemoryStore {
    async fn find_id_by_field(
        &self,
        doc_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<String>, CmsError> {
        Ok(self
            .docs
            .borrow()
            .iter()
            .find(|d| d["_type"] == doc_type && d[field] == value)
            .and_then(|d| d["_id"].as_str().map(str::to_owned)))
    }

    async fn list_ids(&self, doc_type: &str) -> Result<Vec<String>, CmsError> {
        Ok(self
            .docs_of(doc_type)
            .iter()
            .filter_map(|d| d["_id"].as_str().map(str::to_owned))
            .collect())
    }

    async fn create(&self, mut document: Value) -> Result<String, CmsError> {
        if self.fail_creates.get() {
            return Err(CmsError::Api {
                status: 400,
                message: "create rejected".to_owned(),
            });
        }
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        let doc_type = document["_type"].as_str().unwrap_or("doc").to_owned();
        let id = format!("{doc_type}-{n}");
        document["_id"] = Value::String(id.clone());
        self.docs.borrow_mut().push(document);
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<(), CmsError> {
        if let Some(referencing_ids) = self.referenced_by.borrow().get(id) {
            return Err(CmsError::ReferencedDocument {
                id: id.to_owned(),
                referencing_ids: referencing_ids.clone(),
            });
        }
        // The hosted mutate API answers 200 for a delete of a missing id.
        self.docs.borrow_mut().retain(|d| d["_id"] != id);
        Ok(())
    }

    async fn upload_image(&self, bytes: Vec<u8>, filename: &str) -> Result<String, CmsError> {
        let mut uploads = self.uploads.borrow_mut();
        uploads.push(filename.to_owned());
        Ok(format!("image-{}-{}b", uploads.len(), bytes.len()))
    }
}
