//! The upstream order feed schema. Field names follow the feed, which uses
//! snake_case throughout.

use serde::Deserialize;

/// One order as delivered by the ticketing system.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundOrder {
    /// Requested due date, ISO-8601 (YYYY-MM-DD).
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub event_date: String,
    pub event_id: i64,
    #[serde(default)]
    pub include_vat: bool,
    #[serde(default)]
    pub invoice_address_1: String,
    #[serde(default)]
    pub invoice_address_2: String,
    #[serde(default)]
    pub invoice_city: String,
    #[serde(default)]
    pub invoice_company: String,
    #[serde(default)]
    pub invoice_country_code: String,
    /// The buyer's CVR number, the business identifier used for
    /// customer reconciliation.
    #[serde(default)]
    pub invoice_cvr: String,
    #[serde(default, rename = "invoice_ean_ref")]
    pub invoice_ean: String,
    #[serde(default)]
    pub invoice_email: String,
    #[serde(default)]
    pub invoice_person: String,
    #[serde(default)]
    pub invoice_telephone: String,
    #[serde(default)]
    pub invoice_zip: String,
    #[serde(default)]
    pub order_created_datetime: String,
    #[serde(default)]
    pub order_creator: String,
    #[serde(default)]
    pub order_currency: String,
    #[serde(default)]
    pub order_description: String,
    #[serde(default)]
    pub order_items: Vec<InboundOrderItem>,
    /// Already paid orders skip invoicing and only record the payment.
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub sales_person_email: Option<String>,
    /// The upstream order id, used as the voucher number for payments.
    pub tikko_order_id: i64,
}

/// One line item on an inbound order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundOrderItem {
    #[serde(default)]
    pub description: String,
    pub product_id: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub sort_key: i64,
    #[serde(default)]
    pub total_price: f64,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub vat_amount: Option<f64>,
    #[serde(default)]
    pub vat_percent: Option<f64>,
}
