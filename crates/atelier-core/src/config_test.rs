use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with every CMS and import variable populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("SANITY_PROJECT_ID", "abc123");
    m.insert("SANITY_DATASET", "production");
    m.insert("SANITY_API_TOKEN", "sk-secret");
    m.insert("SANITY_API_VERSION", "2025-01-15");
    m.insert("ATELIER_API_BASE_URL", "http://localhost:3000/");
    m
}

#[test]
fn parse_environment_variants() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("./data"));
    assert_eq!(cfg.public_dir, std::path::PathBuf::from("./public"));
    assert_eq!(cfg.http_timeout_secs, 30);
    assert_eq!(
        cfg.products_path(),
        std::path::PathBuf::from("./data/products.json")
    );
}

#[test]
fn build_app_config_rejects_invalid_bind_addr() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ATELIER_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ATELIER_BIND_ADDR"),
        "expected InvalidEnvVar(ATELIER_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("ATELIER_HTTP_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "ATELIER_HTTP_TIMEOUT_SECS"),
        "expected InvalidEnvVar(ATELIER_HTTP_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_cms_config_reports_each_missing_variable() {
    for missing in [
        "SANITY_PROJECT_ID",
        "SANITY_DATASET",
        "SANITY_API_TOKEN",
        "SANITY_API_VERSION",
    ] {
        let mut map = full_env();
        map.remove(missing);
        let result = build_cms_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == missing),
            "expected MissingEnvVar({missing}), got: {result:?}"
        );
    }
}

#[test]
fn build_cms_config_treats_blank_as_missing() {
    let mut map = full_env();
    map.insert("SANITY_API_TOKEN", "   ");
    let result = build_cms_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SANITY_API_TOKEN"));
}

#[test]
fn build_cms_config_derives_host_from_project_id() {
    let map = full_env();
    let cfg = build_cms_config(lookup_from_map(&map)).expect("valid cms config");
    assert_eq!(cfg.api_host, "https://abc123.api.sanity.io");
    assert_eq!(cfg.api_version, "2025-01-15");
}

#[test]
fn build_cms_config_honours_host_override_and_v_prefix() {
    let mut map = full_env();
    map.insert("SANITY_API_HOST", "http://127.0.0.1:9999/");
    map.insert("SANITY_API_VERSION", "v2024-06-01");
    let cfg = build_cms_config(lookup_from_map(&map)).expect("valid cms config");
    assert_eq!(cfg.api_host, "http://127.0.0.1:9999");
    assert_eq!(cfg.api_version, "2024-06-01");
}

#[test]
fn build_cms_config_rejects_malformed_api_version() {
    let mut map = full_env();
    map.insert("SANITY_API_VERSION", "January");
    let result = build_cms_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SANITY_API_VERSION"),
        "got: {result:?}"
    );
}

#[test]
fn build_import_config_requires_api_base_url() {
    let mut map = full_env();
    map.remove("ATELIER_API_BASE_URL");
    let result = build_import_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "ATELIER_API_BASE_URL"),
        "got: {result:?}"
    );
}

#[test]
fn build_import_config_trims_trailing_slash() {
    let map = full_env();
    let cfg = build_import_config(lookup_from_map(&map)).expect("valid import config");
    assert_eq!(cfg.api_base_url, "http://localhost:3000");
    assert_eq!(cfg.cms.dataset, "production");
}

#[test]
fn cms_config_debug_redacts_token() {
    let map = full_env();
    let cfg = build_cms_config(lookup_from_map(&map)).expect("valid cms config");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-secret"), "token leaked: {rendered}");
    assert!(rendered.contains("[redacted]"));
}
