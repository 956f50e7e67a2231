//! Payment term schema.

use serde::{Deserialize, Serialize};

/// A payment term configured on the agreement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentTerm {
    /// A unique identifier of the payment term.
    #[serde(default)]
    pub payment_terms_number: i64,
    /// The number of days before payment must be made.
    #[serde(default)]
    pub days_of_credit: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub name: String,
    /// The type of payment term, e.g. 'net' or 'duedate'.
    #[serde(default)]
    pub payment_terms_type: String,
    #[serde(rename = "self", default)]
    pub self_: String,
}
