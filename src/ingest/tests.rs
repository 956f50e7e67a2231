//! Tests for order ingest

use super::{handle_order, InboundOrder, InboundOrderItem};
use crate::config::Credentials;
use crate::error::Error;
use crate::http::EconomicClient;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> EconomicClient {
    EconomicClient::builder(Credentials::new("grant", "secret"))
        .rest_base_url(&server.uri())
        .api_base_url(&server.uri())
        .build()
        .unwrap()
}

fn sample_order(paid: bool) -> InboundOrder {
    InboundOrder {
        event_id: 9001,
        invoice_address_1: "Main Street 1".into(),
        invoice_city: "Copenhagen".into(),
        invoice_country_code: "DK".into(),
        invoice_cvr: "66666666".into(),
        invoice_email: "jane@acme.example".into(),
        invoice_person: "Jane Doe".into(),
        invoice_telephone: "12345678".into(),
        invoice_zip: "2100".into(),
        order_currency: "DKK".into(),
        order_items: vec![
            InboundOrderItem {
                description: "Ticket".into(),
                product_id: 47,
                quantity: 2,
                sort_key: 1,
                total_price: 400.0,
                unit_price: 200.0,
                ..Default::default()
            },
            InboundOrderItem {
                description: "Ticket fee".into(),
                product_id: 10,
                quantity: 2,
                sort_key: 2,
                total_price: 50.0,
                unit_price: 25.0,
                ..Default::default()
            },
        ],
        paid,
        tikko_order_id: 20240001,
        ..Default::default()
    }
}

#[test]
fn test_order_feed_decodes() {
    let raw = json!({
        "due_date": null,
        "event_date": "2024-06-01",
        "event_id": 9001,
        "include_vat": true,
        "invoice_address_1": "Main Street 1",
        "invoice_address_2": "",
        "invoice_city": "Copenhagen",
        "invoice_company": "ACME ApS",
        "invoice_country_code": "DK",
        "invoice_cvr": "66666666",
        "invoice_ean_ref": "5790000000000",
        "invoice_email": "jane@acme.example",
        "invoice_person": "Jane Doe",
        "invoice_telephone": "12345678",
        "invoice_zip": "2100",
        "order_created_datetime": "2024-05-01 12:00:00",
        "order_creator": "webshop",
        "order_currency": "DKK",
        "order_description": "Tickets",
        "order_items": [{
            "description": "Ticket",
            "product_id": 47,
            "quantity": 2,
            "sort_key": 1,
            "total_price": 400.0,
            "unit_price": 200.0,
            "vat_amount": 100.0,
            "vat_percent": 25.0
        }],
        "paid": false,
        "sales_person_email": null,
        "tikko_order_id": 20240001
    });
    let order: InboundOrder = serde_json::from_value(raw).unwrap();
    assert_eq!(order.tikko_order_id, 20240001);
    assert_eq!(order.invoice_ean, "5790000000000");
    assert_eq!(order.order_items[0].vat_percent, Some(25.0));
}

#[tokio::test]
async fn test_paid_order_records_a_payment_entry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/journalsapi/v6.0.0/draft-entries/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "entryNumber": 77
        })))
        .expect(1)
        .mount(&server)
        .await;
    // No invoicing for a paid order.
    Mock::given(method("POST"))
        .and(path("/invoices/drafts"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    handle_order(&client, &sample_order(true)).await.unwrap();

    // The posted entry sums the item totals.
    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["amount"], 450.0);
    assert_eq!(body["voucherNumber"], 20240001);
    assert_eq!(body["accountNumber"], 6724);
    assert_eq!(body["contraAccountNumber"], 6730);
    assert_eq!(body["text"], "Event id: 9001");
}

#[tokio::test]
async fn test_unpaid_order_creates_customer_and_draft_invoice() {
    let server = MockServer::start().await;

    // The buyer is unknown, so the customer is created first.
    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": [], "pagination": {"results": 0}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "customerNumber": 555000111,
            "name": "Jane Doe",
            "currency": "DKK",
            "vatZone": {"vatZoneNumber": 1},
            "customerGroup": {"customerGroupNumber": 1},
            "paymentTerms": {"paymentTermsNumber": 4},
            "corporateIdentificationNumber": "66666666",
            "vatNumber": "66666666"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customers/555000111/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection": [], "pagination": {"results": 0}
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/customers/555000111/contacts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "customerContactNumber": 1
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/invoices/drafts"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "draftInvoiceNumber": 4711
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    handle_order(&client, &sample_order(false)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let draft = requests
        .iter()
        .find(|r| r.url.path() == "/invoices/drafts")
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&draft.body).unwrap();
    assert_eq!(body["customer"]["customerNumber"], 555000111);
    assert_eq!(body["layout"]["layoutNumber"], 20);
    assert_eq!(body["recipient"]["name"], "Jane Doe");
    assert_eq!(body["lines"][0]["product"]["productNumber"], "10");
    assert_eq!(body["lines"][0]["quantity"], 2.0);
    assert_eq!(
        body["lines"][0]["departmentalDistribution"]["departmentalDistributionNumber"],
        9001
    );
    assert_eq!(body["lines"][1]["product"]["productNumber"], "11");
}

#[tokio::test]
async fn test_malformed_due_date_fails_before_any_call() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let mut order = sample_order(false);
    order.due_date = Some("01-06-2024".into());
    let err = handle_order(&client, &order).await.unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(server.received_requests().await.unwrap().is_empty());
}
