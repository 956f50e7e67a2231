//! Order schema: a header plus an ordered sequence of lines.
//!
//! Orders are submitted to `invoices/drafts` to create draft invoices.
//! Required by the vendor: date, currency, layout, payment terms, customer,
//! recipient (with name and VAT zone).

use super::contact::CustomerContactRef;
use super::shared::{CustomerRef, Layout, PaymentTermsRef, SalesPerson, VatZone};
use super::{is_zero_f64, is_zero_i64};
use serde::{Deserialize, Serialize};

/// An order header with its lines.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Issue date, ISO-8601 (YYYY-MM-DD).
    pub date: String,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Exchange rate between the order currency and the agreement's base
    /// currency, per 100 units. Daily rate applied when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<f64>,
    /// Due date, mandatory only for 'duedate' payment terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Total amount after taxes and discounts. Negative on credit notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<f64>,
    /// Total amount before taxes and discounts.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub net_amount: f64,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub rounding_amount: f64,
    /// Total VAT, same sign as the net amount.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub vat_amount: f64,
    pub layout: Layout,
    pub payment_terms: PaymentTermsRef,
    pub customer: CustomerRef,
    pub recipient: Recipient,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<Delivery>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Notes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<References>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

/// The actual recipient of an order. Usually the same info found on the
/// customer, but it may be a different recipient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// The name of the actual recipient.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    /// European Article Number of the recipient.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ean: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_entry_number: String,
    /// The person this order is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attention: Option<Attention>,
    /// Recipient VAT zone.
    #[serde(default)]
    pub vat_zone: VatZone,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mobile_phone: String,
}

/// The customer employee this order is addressed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attention {
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub customer_contact_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// The actual place of delivery for the goods on the order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delivery_terms: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub delivery_date: String,
}

/// Free-text notes displayed on the order document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notes {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub heading: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text_line1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text_line2: String,
}

/// Customer and company references related to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct References {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_contact: Option<CustomerContactRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_person: Option<SalesPerson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_reference: Option<VendorReference>,
    /// Free-form caller reference, typically the caller's own order id.
    /// Used for lookup-by-reference.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub other: String,
}

/// A second employee involved in the sale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorReference {
    pub employee_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// One order line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Unique line number within the order.
    pub line_number: i64,
    /// Sort key used to order lines ascending within the order.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub sort_key: i64,
    /// Description of the product or service sold.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,
    /// Number of units on the line.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub quantity: f64,
    /// Price of one unit in the order currency.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub unit_net_price: f64,
    /// Line discount as a percentage.
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub discount_percentage: f64,
    #[serde(default, skip_serializing_if = "is_zero_f64")]
    pub unit_cost_price: f64,
    /// Departmental distribution for this entry. Requires the departments
    /// module on the agreement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departmental_distribution: Option<DepartmentalDistribution>,
}

/// Unit of measure applied to an order line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub unit_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// The product offered on an order line. The product number can be a SKU.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub product_number: String,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}

/// Distribution of an entry between departments.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentalDistribution {
    pub departmental_distribution_number: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distribution_type: String,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}
