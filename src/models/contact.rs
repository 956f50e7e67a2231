//! Customer contact schema.

use super::{is_false, is_zero_i64};
use serde::{Deserialize, Serialize};

/// A contact person belonging to exactly one customer.
///
/// For reconciliation the identity is not the numeric id but a loose match
/// on email, phone or name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerContact {
    /// Unique numerical identifier; zero means not yet assigned.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub customer_contact_number: i64,
    /// Contact e-mail address. Copies of sales documents are sent here.
    #[serde(default)]
    pub email: String,
    /// Contact name.
    #[serde(default)]
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Electronic invoicing id, appears on EAN invoices.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub e_invoice_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    /// Events the contact receives email notifications for.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_notifications: Vec<String>,
    /// Vendor soft-delete flag. Contacts are never hard-deleted here.
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
    /// Owning customer number.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub customer_number: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub sort_key: i64,
}

/// Reference to a customer contact by number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerContactRef {
    /// Unique identifier of the customer contact.
    pub customer_contact_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}
