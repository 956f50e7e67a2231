//! Draft and booked invoice schema.

use super::order::{Notes, OrderLine, Recipient, References};
use super::shared::{Layout, PaymentTermsRef};
use serde::{Deserialize, Serialize};

/// A draft or booked invoice as returned by the vendor.
///
/// A non-zero `booked_invoice_number` means the invoice is booked; a
/// non-zero `draft_invoice_number` means it is a draft. A booked invoice is
/// immutable except through credit notes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub booked_invoice_number: i64,
    #[serde(default)]
    pub draft_invoice_number: i64,
    /// Issue date, ISO-8601 (YYYY-MM-DD).
    #[serde(default)]
    pub date: String,
    /// ISO 4217 currency code.
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub exchange_rate: f64,
    /// Total before taxes and discounts. Negative on credit notes.
    #[serde(default)]
    pub net_amount: f64,
    /// Total after taxes and discounts. Negative on credit notes.
    #[serde(default)]
    pub gross_amount: f64,
    /// Total VAT, same sign as the net amount.
    #[serde(default)]
    pub vat_amount: f64,
    #[serde(default)]
    pub rounding_amount: f64,
    /// Remaining amount to be paid.
    #[serde(default)]
    pub remainder: f64,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub payment_terms_number: i64,
    #[serde(default)]
    pub days_of_credit: i64,
    #[serde(default)]
    pub payment_terms: Option<PaymentTermsRef>,
    /// The owning customer number.
    #[serde(default)]
    pub customer_number: i64,
    #[serde(default)]
    pub recipient: Option<Recipient>,
    #[serde(default)]
    pub notes: Option<Notes>,
    #[serde(default)]
    pub references: Option<References>,
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub sent: String,
    #[serde(rename = "self", default)]
    pub self_: String,
}

impl Invoice {
    /// True when this invoice has been booked.
    pub fn is_booked(&self) -> bool {
        self.booked_invoice_number != 0
    }
}
