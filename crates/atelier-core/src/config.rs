use std::env::VarError;

use crate::app_config::{AppConfig, CmsConfig, Environment, ImportConfig};
use crate::ConfigError;

/// Load `.env.local` and then `.env` into the process environment.
///
/// Values already present in the environment win; missing files are ignored.
fn load_dotenv() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
}

/// Load application configuration from environment variables.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    load_dotenv();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load the CMS credentials used by the import and delete flows.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] naming the first absent variable.
pub fn load_cms_config() -> Result<CmsConfig, ConfigError> {
    load_dotenv();
    build_cms_config(|key| std::env::var(key))
}

/// Load the CMS credentials plus the export endpoint base URL.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] naming the first absent variable.
pub fn load_import_config() -> Result<ImportConfig, ConfigError> {
    load_dotenv();
    build_import_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a pure
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let bind_raw = or_default("ATELIER_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = bind_raw
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "ATELIER_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let timeout_raw = or_default("ATELIER_HTTP_TIMEOUT_SECS", "30");
    let http_timeout_secs = timeout_raw
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "ATELIER_HTTP_TIMEOUT_SECS".to_string(),
            reason: e.to_string(),
        })?;

    Ok(AppConfig {
        env: parse_environment(&or_default("ATELIER_ENV", "development")),
        bind_addr,
        log_level: or_default("ATELIER_LOG_LEVEL", "info"),
        data_dir: PathBuf::from(or_default("ATELIER_DATA_DIR", "./data")),
        public_dir: PathBuf::from(or_default("ATELIER_PUBLIC_DIR", "./public")),
        http_timeout_secs,
    })
}

fn build_cms_config<F>(lookup: F) -> Result<CmsConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    let project_id = require("SANITY_PROJECT_ID")?;
    let dataset = require("SANITY_DATASET")?;
    let api_token = require("SANITY_API_TOKEN")?;
    let api_version = normalize_api_version(&require("SANITY_API_VERSION")?)?;

    let api_host = match lookup("SANITY_API_HOST") {
        Ok(host) if !host.trim().is_empty() => host.trim().trim_end_matches('/').to_string(),
        _ => format!("https://{project_id}.api.sanity.io"),
    };

    Ok(CmsConfig {
        project_id,
        dataset,
        api_token,
        api_version,
        api_host,
    })
}

fn build_import_config<F>(lookup: F) -> Result<ImportConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let cms = build_cms_config(&lookup)?;
    let api_base_url = match lookup("ATELIER_API_BASE_URL") {
        Ok(v) if !v.trim().is_empty() => v.trim().trim_end_matches('/').to_string(),
        _ => return Err(ConfigError::MissingEnvVar("ATELIER_API_BASE_URL".to_string())),
    };
    Ok(ImportConfig { cms, api_base_url })
}

/// Accepts `2025-01-15` or `v2025-01-15`; returns the bare date form.
fn normalize_api_version(raw: &str) -> Result<String, ConfigError> {
    let bare = raw.strip_prefix('v').unwrap_or(raw);
    let well_formed = bare.len() == 10
        && bare.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if well_formed || bare == "1" || bare == "X" {
        Ok(bare.to_string())
    } else {
        Err(ConfigError::InvalidEnvVar {
            var: "SANITY_API_VERSION".to_string(),
            reason: format!("expected YYYY-MM-DD, got '{raw}'"),
        })
    }
}

/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
