use serde_json::json;

use super::*;

fn test_client(base_url: &str) -> CmsClient {
    CmsClient::with_base_url(base_url, "2024-01-01", "production", "sk-test", 30)
        .expect("client construction should not fail")
}

#[test]
fn build_url_places_version_and_dataset() {
    let client = test_client("https://abc123.api.sanity.io");
    let url = client.build_url("data/mutate", &[("returnIds", "true")]);
    assert_eq!(
        url.as_str(),
        "https://abc123.api.sanity.io/v2024-01-01/data/mutate/production?returnIds=true"
    );
}

#[test]
fn build_url_strips_trailing_slash_and_leading_v() {
    let client = CmsClient::with_base_url("http://localhost:9000/", "v2024-01-01", "staging", "t", 5)
        .expect("client");
    let url = client.build_url("assets/images", &[]);
    assert_eq!(
        url.as_str(),
        "http://localhost:9000/v2024-01-01/assets/images/staging"
    );
}

#[test]
fn build_url_encodes_query_values() {
    let client = test_client("https://abc123.api.sanity.io");
    let url = client.build_url("data/query", &[("query", "*[_type == $type]"), ("$type", "\"color\"")]);
    let query = url.query().expect("query string");
    assert!(!query.contains(' '), "spaces must be encoded: {query}");
    assert!(query.contains("%24type="), "param name keeps its $ prefix: {query}");
    let decoded: Vec<(String, String)> = url.query_pairs().into_owned().collect();
    assert_eq!(decoded[0], ("query".to_owned(), "*[_type == $type]".to_owned()));
    assert_eq!(decoded[1], ("$type".to_owned(), "\"color\"".to_owned()));
}

#[test]
fn rejects_non_http_base_url() {
    let result = CmsClient::with_base_url("not a url", "2024-01-01", "production", "t", 5);
    assert!(matches!(result, Err(CmsError::InvalidBaseUrl { .. })));
}

#[test]
fn error_body_with_referencing_ids_becomes_referenced_document() {
    let body = json!({
        "error": {
            "description": "Mutation failed",
            "items": [{
                "error": {
                    "id": "color-1",
                    "type": "documentHasExistingReferencesError",
                    "referencingIDs": ["product-1", "product-2"]
                }
            }]
        }
    });
    match error_from_body(409, &body) {
        CmsError::ReferencedDocument {
            id,
            referencing_ids,
        } => {
            assert_eq!(id, "color-1");
            assert_eq!(referencing_ids, vec!["product-1", "product-2"]);
        }
        other => panic!("expected ReferencedDocument, got {other:?}"),
    }
}

#[test]
fn error_body_description_becomes_api_message() {
    let body = json!({"error": {"description": "Invalid token"}});
    match error_from_body(401, &body) {
        CmsError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid token");
        }
        other => panic!("expected Api, got {other:?}"),
    }
}

#[test]
fn error_body_falls_back_to_message_then_status() {
    let with_message = error_from_body(403, &json!({"error": "Forbidden", "message": "no access"}));
    assert!(matches!(with_message, CmsError::Api { ref message, .. } if message == "no access"));

    let plain_text = error_from_body(502, &json!("Bad Gateway"));
    assert!(matches!(plain_text, CmsError::Api { ref message, .. } if message == "Bad Gateway"));

    let empty = error_from_body(500, &serde_json::Value::Null);
    assert!(matches!(empty, CmsError::Api { ref message, .. } if message == "HTTP 500"));
}

#[test]
fn content_type_follows_extension() {
    assert_eq!(content_type_for("shirt.JPG"), "image/jpeg");
    assert_eq!(content_type_for("a/b/look.webp"), "image/webp");
    assert_eq!(content_type_for("logo.png"), "image/png");
    assert_eq!(content_type_for("noext"), "application/octet-stream");
}
