//! Tests for dimension value operations

use crate::config::Credentials;
use crate::http::EconomicClient;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EconomicClient {
    EconomicClient::builder(Credentials::new("grant", "secret"))
        .rest_base_url(&server.uri())
        .api_base_url(&server.uri())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_create_dimension_value_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dimensionsapi/v4.3.0/values"))
        .and(body_json(json!({
            "active": true,
            "dimensionNumber": 1,
            "key": 42,
            "name": "Events"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.create_dimension_value(1, 42, "Events").await.unwrap();
}

#[tokio::test]
async fn test_ensure_dimension_value_skips_existing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dimensionsapi/v4.3.0/values/1/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dimensionNumber": 1, "key": 42, "name": "Events", "active": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dimensionsapi/v4.3.0/values"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.ensure_dimension_value(1, 42, "Events").await.unwrap();
    assert!(!created);
}

#[tokio::test]
async fn test_ensure_dimension_value_creates_on_missing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dimensionsapi/v4.3.0/values/1/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "title": "Dimension value not found.",
            "errorCode": "E_NOT_FOUND"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/dimensionsapi/v4.3.0/values"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let created = client.ensure_dimension_value(1, 42, "Events").await.unwrap();
    assert!(created);
}

#[tokio::test]
async fn test_add_dimension_to_draft_entry_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/dimensionsapi/v4.3.0/dimension-data/draft-entries"))
        .and(body_json(json!({
            "dimensionNumber": 1,
            "dimensionKey": 42,
            "journalNumber": 2,
            "entryNumber": 77
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .add_dimension_to_draft_entry(1, 42, 2, 77)
        .await
        .unwrap();
}
