//! Integration tests for `CmsClient` using wiremock HTTP mocks.

use atelier_cms::{CmsClient, CmsError, ContentStore};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CmsClient {
    CmsClient::with_base_url(base_url, "2024-01-01", "production", "sk-test", 30)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn find_id_by_field_sends_groq_and_json_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2024-01-01/data/query/production"))
        .and(header("authorization", "Bearer sk-test"))
        .and(query_param(
            "query",
            "*[_type == $type && name == $value][0]._id",
        ))
        .and(query_param("$type", "\"color\""))
        .and(query_param("$value", "\"Navy Blue\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ms": 3,
            "query": "...",
            "result": "color-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let id = client
        .find_id_by_field("color", "name", "Navy Blue")
        .await
        .expect("lookup succeeds");
    assert_eq!(id.as_deref(), Some("color-42"));
}

#[tokio::test]
async fn find_id_by_field_returns_none_for_null_result() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2024-01-01/data/query/production"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let id = client
        .find_id_by_field("fabric", "name", "Cotton")
        .await
        .expect("lookup succeeds");
    assert!(id.is_none());
}

#[tokio::test]
async fn list_ids_returns_every_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2024-01-01/data/query/production"))
        .and(query_param("query", "*[_type == $type]._id"))
        .and(query_param("$type", "\"product\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"result": ["p1", "p2", "p3"]})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ids = client.list_ids("product").await.expect("list succeeds");
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
}

#[tokio::test]
async fn create_posts_mutation_and_returns_id() {
    let server = MockServer::start().await;
    let document = json!({"_type": "fabric", "name": "Linen"});

    Mock::given(method("POST"))
        .and(path("/v2024-01-01/data/mutate/production"))
        .and(query_param("returnIds", "true"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_json(json!({"mutations": [{"create": document.clone()}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactionId": "tx-1",
            "results": [{"id": "fabric-7", "operation": "create"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let id = client.create(document).await.expect("create succeeds");
    assert_eq!(id, "fabric-7");
}

#[tokio::test]
async fn delete_of_referenced_document_reports_referrers() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2024-01-01/data/mutate/production"))
        .and(body_json(json!({"mutations": [{"delete": {"id": "color-1"}}]})))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "error": {
                "description": "Document cannot be deleted as there are references to it",
                "type": "mutationError",
                "items": [{
                    "error": {
                        "id": "color-1",
                        "type": "documentHasExistingReferencesError",
                        "referencingIDs": ["product-9"]
                    },
                    "index": 0
                }]
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.delete("color-1").await.expect_err("delete is refused");
    assert!(matches!(err, CmsError::ReferencedDocument { ref id, .. } if id == "color-1"));
    assert_eq!(err.referencing_ids(), ["product-9".to_string()]);
}

#[tokio::test]
async fn delete_succeeds_on_200() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2024-01-01/data/mutate/production"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactionId": "tx-2",
            "results": [{"id": "product-1", "operation": "delete"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.delete("product-1").await.expect("delete succeeds");
}

#[tokio::test]
async fn upload_image_posts_bytes_and_returns_asset_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2024-01-01/assets/images/production"))
        .and(query_param("filename", "shirt.jpg"))
        .and(header("content-type", "image/jpeg"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "document": {
                "_id": "image-abc-800x600-jpg",
                "url": "https://cdn.example/image-abc.jpg"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let asset_id = ContentStore::upload_image(&client, vec![0xFF, 0xD8, 0xFF], "shirt.jpg")
        .await
        .expect("upload succeeds");
    assert_eq!(asset_id, "image-abc-800x600-jpg");
}

#[tokio::test]
async fn unauthorized_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"description": "Session not found", "type": "httpUnauthorized"}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.list_ids("color").await.expect_err("401 is an error");
    match err {
        CmsError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Session not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_lookup_field_never_reaches_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": null})))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client
        .find_id_by_field("color", "name || true", "x")
        .await
        .expect_err("invalid field");
    assert!(matches!(err, CmsError::InvalidField(_)));
}
