//! Customer (debtor) schema.

use super::shared::{Layout, PaymentTermsRef, SalesPerson, VatZone};
use super::{is_false, is_zero_i64};
use serde::{Deserialize, Serialize};

/// A customer, aka. debtor.
///
/// Mandatory on creation: name, currency, VAT zone, customer group and
/// payment terms. The customer number is a positive unique identifier with
/// at most 9 digits; if zero, the system assigns one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// The customer name.
    #[serde(default)]
    pub name: String,
    /// Default payment currency (ISO 4217).
    #[serde(default)]
    pub currency: String,
    /// VAT zone the customer is located in.
    #[serde(default)]
    pub vat_zone: VatZone,
    /// Customer group the customer belongs to. Required by the vendor on
    /// creation.
    #[serde(default)]
    pub customer_group: CustomerGroup,
    /// Default payment terms for the customer.
    #[serde(default)]
    pub payment_terms: PaymentTermsRef,

    /// Vendor-assigned customer number; zero means not yet assigned.
    #[serde(default, skip_serializing_if = "is_zero_i64")]
    pub customer_number: i64,
    /// Corporate identification number, e.g. CVR in Denmark. Business
    /// identifier used for reconciliation.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub corporate_identification_number: String,
    /// VAT identification number. Canonical lookup field on some agreements.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub vat_number: String,
    /// Extension of the corporate identification number (p-nummer).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub p_number: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub telephone_and_fax_number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub mobile_phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub website: String,
    /// European Article Number, used for invoicing the Danish public sector.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ean: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub public_entry_number: String,

    /// Whether the customer is barred from invoicing.
    #[serde(default, skip_serializing_if = "is_false")]
    pub barred: bool,
    /// Updatable only through the e-invoicing PATCH endpoint.
    #[serde(default, skip_serializing_if = "is_false")]
    pub e_invoicing_disabled_by_default: bool,

    /// The outstanding amount for this customer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_person: Option<SalesPerson>,
}

/// Customer group reference. Groups link members to the same account when
/// generating reports.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerGroup {
    /// The unique identifier of the customer group.
    pub customer_group_number: i64,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_: Option<String>,
}
