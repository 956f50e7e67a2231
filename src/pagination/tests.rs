//! Tests for the pagination fetcher

use crate::config::Credentials;
use crate::error::Error;
use crate::http::EconomicClient;
use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EconomicClient {
    EconomicClient::builder(Credentials::new("grant", "secret"))
        .rest_base_url(server.uri())
        .api_base_url(server.uri())
        .build()
        .unwrap()
}

fn page_body(items: &[i64], results: i64, page_size: i64) -> serde_json::Value {
    json!({
        "collection": items.iter().map(|n| json!({"customerNumber": n})).collect::<Vec<_>>(),
        "pagination": {"results": results, "pageSize": page_size},
        "self": "https://restapi.e-conomic.com/customers"
    })
}

#[tokio::test]
async fn test_fetch_collection_walks_all_pages_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("pagesize", "2"))
        .and(query_param_is_missing("skippages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[1, 2], 5, 2)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("skippages", "1"))
        .and(query_param("pagesize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[3, 4], 5, 2)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("skippages", "2"))
        .and(query_param("pagesize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[5], 5, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items: Vec<serde_json::Value> = client.fetch_collection("customers", 2).await.unwrap();

    let numbers: Vec<i64> = items
        .iter()
        .map(|v| v["customerNumber"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_fetch_collection_overfetches_on_exact_multiple() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param_is_missing("skippages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[1, 2], 4, 2)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("skippages", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[3, 4], 4, 2)))
        .expect(1)
        .mount(&server)
        .await;

    // 4 results at page size 2 still trigger a third request (4/2 + 1 pages).
    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("skippages", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[], 4, 2)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items: Vec<serde_json::Value> = client.fetch_collection("customers", 2).await.unwrap();
    assert_eq!(items.len(), 4);
}

#[tokio::test]
async fn test_fetch_collection_empty() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[], 0, 50)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items: Vec<serde_json::Value> = client.fetch_collection("customers", 50).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_fetch_collection_aborts_on_page_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param_is_missing("skippages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[1, 2], 6, 2)))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("skippages", "1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("page exploded"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result: crate::error::Result<Vec<serde_json::Value>> =
        client.fetch_collection("customers", 2).await;

    // All-or-nothing: the partial first page is discarded.
    assert!(matches!(
        result.unwrap_err(),
        Error::RestApi { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_fetch_items_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journalsapi/v6.0.0/draft-entries"))
        .and(query_param_is_missing("skippages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"voucherNumber": 1}, {"voucherNumber": 2}],
            "pagination": {"results": 2, "pageSize": 3}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items: Vec<serde_json::Value> = client
        .fetch_items("/journalsapi/v6.0.0/draft-entries", 3)
        .await
        .unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["voucherNumber"], 1);
}
