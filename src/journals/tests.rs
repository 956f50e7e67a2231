//! Tests for journal entry operations

use crate::config::Credentials;
use crate::error::Error;
use crate::http::EconomicClient;
use crate::models::JournalEntry;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EconomicClient {
    EconomicClient::builder(Credentials::new("grant", "secret"))
        .rest_base_url(&server.uri())
        .api_base_url(&server.uri())
        .build()
        .unwrap()
}

fn sample_entry() -> JournalEntry {
    JournalEntry {
        entry_type_number: 2,
        voucher_number: 20240001,
        journal_number: 2,
        date: "2024-05-01".into(),
        amount: 1250.0,
        currency: "DKK".into(),
        account_number: 6724,
        contra_account_number: 6730,
        text: "Event id: evt-1".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_journal_entry_assigns_entry_number() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/journalsapi/v6.0.0/draft-entries/"))
        .and(body_json(json!({
            "entryTypeNumber": 2,
            "voucherNumber": 20240001,
            "journalNumber": 2,
            "date": "2024-05-01",
            "amount": 1250.0,
            "currency": "DKK",
            "accountNumber": 6724,
            "contraAccountNumber": 6730,
            "text": "Event id: evt-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "entryNumber": 77
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut entry = sample_entry();
    client.create_journal_entry(&mut entry).await.unwrap();
    assert_eq!(entry.entry_number, 77);
}

#[tokio::test]
async fn test_delete_journal_entry() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/journalsapi/v6.0.0/draft-entries/77"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_journal_entry(77).await.unwrap();
}

#[tokio::test]
async fn test_draft_entry_count() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journalsapi/v6.0.0/draft-entries/count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(3)))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.draft_entry_count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_find_draft_entry_by_voucher() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/journalsapi/v6.0.0/draft-entries"))
        .and(query_param("filter", "voucherNumber$eq:20240001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "voucherNumber": 20240001,
                "journalNumber": 2,
                "date": "2024-05-01",
                "amount": 1250.0,
                "currency": "DKK",
                "entryNumber": 77
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let entry = client.find_draft_entry_by_voucher(20240001).await.unwrap();
    assert_eq!(entry.entry_number, 77);
    assert_eq!(entry.amount, 1250.0);
}

#[tokio::test]
async fn test_find_booked_entry_missing_voucher() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookedEntriesapi/v2.0.0/booked-entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.find_booked_entry_by_voucher(42).await.unwrap_err();
    assert!(matches!(err, Error::VoucherNotFound { voucher: 42 }));
}

#[tokio::test]
async fn test_book_journal() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/journalsapi/v6.0.0/journals/2/book"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.book_journal(2).await.unwrap();
}
