use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Settings shared by every binary. Nothing here is required.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Directory holding `fabrics.json`, `colors.json` and `products.json`.
    pub data_dir: PathBuf,
    /// Root that local image paths such as `/images/men/polo.jpg` resolve against.
    pub public_dir: PathBuf,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join("products.json")
    }
}

/// Credentials and addressing for the hosted CMS.
#[derive(Clone)]
pub struct CmsConfig {
    pub project_id: String,
    pub dataset: String,
    pub api_token: String,
    /// Date-style API version without the leading `v`, e.g. `2025-01-15`.
    pub api_version: String,
    /// Scheme and host of the CMS API, e.g. `https://abc123.api.sanity.io`.
    pub api_host: String,
}

impl std::fmt::Debug for CmsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CmsConfig")
            .field("project_id", &self.project_id)
            .field("dataset", &self.dataset)
            .field("api_token", &"[redacted]")
            .field("api_version", &self.api_version)
            .field("api_host", &self.api_host)
            .finish()
    }
}

/// Everything the import flow needs: the CMS plus the export endpoint it reads from.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub cms: CmsConfig,
    /// Base URL of the storefront serving `POST /api/importData`, without a trailing slash.
    pub api_base_url: String,
}
