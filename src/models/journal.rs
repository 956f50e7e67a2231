//! Journal entry schema (journals OpenAPI).

use super::{is_false, is_zero_i64};
use serde::{Deserialize, Serialize};

/// A draft accounting entry in a journal.
///
/// Created as a draft, optionally deleted while a draft, then booked in bulk
/// per journal. Set `is_credit` when the amount should be negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub entry_type_number: i64,
    /// Voucher number, used to look the entry up again.
    #[serde(default)]
    pub voucher_number: i64,
    /// The journal the entry belongs to.
    #[serde(default)]
    pub journal_number: i64,
    /// Entry date, ISO-8601 (YYYY-MM-DD).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: f64,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    /// Vendor-assigned entry number, set once the draft is created.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub entry_number: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub account_number: i64,
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub contra_account_number: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contra_vat_code: String,
    /// When true the booked amount is negated.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_credit: bool,
}

/// Response shape for draft entry creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftEntryCreated {
    /// The vendor-assigned entry number.
    #[serde(default)]
    pub entry_number: i64,
}
