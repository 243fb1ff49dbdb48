pub mod app_config;
pub mod catalog;
pub mod config;
pub mod reference;
pub mod validate;

pub use app_config::{AppConfig, CmsConfig, Environment, ImportConfig};
pub use catalog::{Audience, ColorRecord, DataType, ProductRecord, VariantRecord};
pub use config::{
    load_app_config, load_app_config_from_env, load_cms_config, load_import_config,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
