//! Image upload with a per-run cache keyed by the source path or URL.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use atelier_cms::ContentStore;

pub(crate) struct ImageUploader {
    client: reqwest::Client,
    /// Local paths such as `/images/men/polo.jpg` resolve under this root.
    public_dir: PathBuf,
    cache: HashMap<String, String>,
}

impl ImageUploader {
    pub(crate) fn new(client: reqwest::Client, public_dir: PathBuf) -> Self {
        Self {
            client,
            public_dir,
            cache: HashMap::new(),
        }
    }

    /// Asset id for `source`, uploading it on first sight.
    ///
    /// Failures are logged and yield `None`; they are not cached, so a later
    /// reference to the same image tries again.
    pub(crate) async fn upload<S: ContentStore>(
        &mut self,
        store: &S,
        source: &str,
    ) -> Option<String> {
        if let Some(asset_id) = self.cache.get(source) {
            tracing::debug!(image = source, asset_id = %asset_id, "image already uploaded");
            return Some(asset_id.clone());
        }

        match self.upload_uncached(store, source).await {
            Ok(asset_id) => {
                tracing::info!(image = source, asset_id = %asset_id, "uploaded image");
                self.cache.insert(source.to_owned(), asset_id.clone());
                Some(asset_id)
            }
            Err(e) => {
                tracing::warn!(image = source, error = %format!("{e:#}"), "image upload failed");
                None
            }
        }
    }

    async fn upload_uncached<S: ContentStore>(
        &self,
        store: &S,
        source: &str,
    ) -> anyhow::Result<String> {
        let bytes = if source.starts_with("http") {
            self.fetch_remote(source).await?
        } else {
            let path = self.public_dir.join(source.trim_start_matches('/'));
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        };
        let asset_id = store.upload_image(bytes, &file_name_of(source)).await?;
        Ok(asset_id)
    }

    async fn fetch_remote(&self, url: &str) -> anyhow::Result<Vec<u8>> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        Ok(bytes.to_vec())
    }
}

/// Last path segment without any query string; `image` if that is empty.
fn file_name_of(source: &str) -> String {
    let without_query = source.split(['?', '#']).next().unwrap_or(source);
    without_query
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("image")
        .to_owned()
}
