//! Reference shapes shared between customers, orders and invoices.

use serde::{Deserialize, Serialize};

/// Reference to an invoice/order layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// A unique identifier of the layout.
    pub layout_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// Indicates in which VAT zone a customer or recipient is located.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VatZone {
    /// The unique identifier of the VAT zone.
    pub vat_zone_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// Reference to the payment terms resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTermsRef {
    /// The unique identifier of the payment terms.
    pub payment_terms_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// Reference to the employee responsible for contact with the customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPerson {
    /// The unique identifier of the employee.
    pub employee_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// Reference to a customer by number, as used on orders and invoices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRef {
    /// The customer number. Positive, at most 9 digits.
    pub customer_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}
