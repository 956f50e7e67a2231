//! Draft and booked invoice operations.

use crate::error::{Error, Result};
use crate::filter::{Filter, FilterOperator};
use crate::http::EconomicClient;
use crate::models::{CustomerRef, Invoice, Order, PaymentTerm, PaymentTermsRef};
use crate::pagination::{CollectionResponse, DEFAULT_PAGE_SIZE};
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// The vendor's invoice sub-collections. `Drafts` holds unbooked invoices;
/// the rest are views over booked ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvoiceClass {
    Drafts,
    Booked,
    Paid,
    Unpaid,
    Overdue,
    NotDue,
}

impl InvoiceClass {
    /// The URL path segment under `invoices/`.
    pub fn as_str(self) -> &'static str {
        match self {
            InvoiceClass::Drafts => "drafts",
            InvoiceClass::Booked => "booked",
            InvoiceClass::Paid => "paid",
            InvoiceClass::Unpaid => "unpaid",
            InvoiceClass::Overdue => "overdue",
            InvoiceClass::NotDue => "not-due",
        }
    }
}

impl fmt::Display for InvoiceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "drafts" => Ok(InvoiceClass::Drafts),
            "booked" => Ok(InvoiceClass::Booked),
            "paid" => Ok(InvoiceClass::Paid),
            "unpaid" => Ok(InvoiceClass::Unpaid),
            "overdue" => Ok(InvoiceClass::Overdue),
            "not-due" => Ok(InvoiceClass::NotDue),
            other => Err(Error::InvalidInvoiceClass {
                class: other.to_string(),
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookInvoiceRequest {
    draft_invoice: DraftInvoiceRef,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftInvoiceRef {
    draft_invoice_number: i64,
}

impl EconomicClient {
    /// Create a draft invoice from an order.
    pub async fn create_draft_invoice(&self, order: &Order) -> Result<Invoice> {
        let invoice: Invoice = self
            .rest_json(Method::POST, "invoices/drafts", &[], Some(order))
            .await?;
        info!("created draft invoice {}", invoice.draft_invoice_number);
        Ok(invoice)
    }

    /// Fetch a draft invoice by number, `None` when it does not exist.
    pub async fn get_draft_invoice(&self, number: i64) -> Result<Option<Invoice>> {
        self.rest_get_optional(&format!("invoices/drafts/{number}"))
            .await
    }

    /// Delete a draft invoice. Booked invoices cannot be deleted.
    pub async fn delete_draft_invoice(&self, number: i64) -> Result<()> {
        self.rest_unit::<()>(Method::DELETE, &format!("invoices/drafts/{number}"), None)
            .await
    }

    /// Fetch a booked invoice by number, `None` when it does not exist.
    pub async fn get_booked_invoice(&self, number: i64) -> Result<Option<Invoice>> {
        self.rest_get_optional(&format!("invoices/booked/{number}"))
            .await
    }

    /// All booked invoices on the agreement.
    pub async fn list_booked_invoices(&self) -> Result<Vec<Invoice>> {
        self.fetch_collection("invoices/booked", DEFAULT_PAGE_SIZE)
            .await
    }

    /// All payment terms configured on the agreement.
    pub async fn list_payment_terms(&self) -> Result<Vec<PaymentTerm>> {
        self.fetch_collection("payment-terms", DEFAULT_PAGE_SIZE)
            .await
    }

    /// Book a draft invoice, returning the booked invoice. Irreversible.
    pub async fn book_invoice(&self, draft_invoice_number: i64) -> Result<Invoice> {
        let request = BookInvoiceRequest {
            draft_invoice: DraftInvoiceRef {
                draft_invoice_number,
            },
        };
        let invoice: Invoice = self
            .rest_json(Method::POST, "invoices/booked", &[], Some(&request))
            .await?;
        info!(
            "booked draft invoice {draft_invoice_number} as {}",
            invoice.booked_invoice_number
        );
        Ok(invoice)
    }

    /// All invoices in the given class whose external reference
    /// (`references.other`) equals `reference`.
    pub async fn find_invoices_by_class_and_ref(
        &self,
        class: InvoiceClass,
        reference: &str,
    ) -> Result<Vec<Invoice>> {
        let mut filter = Filter::new();
        filter.and_condition("references.other", FilterOperator::Equals, reference);
        let resp: CollectionResponse<Invoice> = self
            .rest_json::<(), _>(
                Method::GET,
                &format!("invoices/{class}"),
                &[("filter", filter.to_string())],
                None,
            )
            .await?;
        Ok(resp.collection)
    }

    /// The single invoice in the given class carrying the external
    /// reference. No match and more than one match are distinct errors.
    pub async fn find_one_invoice_by_class_and_ref(
        &self,
        class: InvoiceClass,
        reference: &str,
    ) -> Result<Invoice> {
        let mut matches = self.find_invoices_by_class_and_ref(class, reference).await?;
        match matches.len() {
            0 => Err(Error::ReferenceNotFound {
                reference: reference.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            n => Err(Error::AmbiguousReference {
                reference: reference.to_string(),
                matches: n,
            }),
        }
    }

    /// Find the invoice carrying the external reference, looking through
    /// drafts first and booked invoices second.
    pub async fn get_invoice_by_ref(
        &self,
        reference: &str,
    ) -> Result<(Invoice, InvoiceClass)> {
        match self
            .find_one_invoice_by_class_and_ref(InvoiceClass::Drafts, reference)
            .await
        {
            Ok(invoice) => Ok((invoice, InvoiceClass::Drafts)),
            Err(Error::ReferenceNotFound { .. }) => {
                let invoice = self
                    .find_one_invoice_by_class_and_ref(InvoiceClass::Booked, reference)
                    .await?;
                Ok((invoice, InvoiceClass::Booked))
            }
            Err(err) => Err(err),
        }
    }

    /// Whether the invoice with the external reference is still a draft or
    /// already booked.
    pub async fn classify_invoice_ref(&self, reference: &str) -> Result<InvoiceClass> {
        let (_, class) = self.get_invoice_by_ref(reference).await?;
        Ok(class)
    }

    /// Create a credit note draft that reverses the booked invoice carrying
    /// the external reference. Amounts and quantities are negated; dates,
    /// currency, layout, payment terms, customer and recipient are carried
    /// over unchanged. The credit note is left unbooked.
    pub async fn credit_invoice_by_ref(&self, reference: &str) -> Result<Invoice> {
        let booked = self
            .find_one_invoice_by_class_and_ref(InvoiceClass::Booked, reference)
            .await?;
        let payment_terms = booked.payment_terms.clone().unwrap_or(PaymentTermsRef {
            payment_terms_number: booked.payment_terms_number,
            self_: None,
        });
        let credit = Order {
            date: booked.date.clone(),
            currency: booked.currency.clone(),
            gross_amount: Some(-booked.gross_amount),
            net_amount: -booked.net_amount,
            vat_amount: -booked.vat_amount,
            rounding_amount: -booked.rounding_amount,
            layout: booked.layout.clone().unwrap_or_default(),
            payment_terms,
            customer: CustomerRef {
                customer_number: booked.customer_number,
                self_: None,
            },
            recipient: booked.recipient.clone().unwrap_or_default(),
            references: booked.references.clone(),
            lines: booked
                .lines
                .iter()
                .cloned()
                .map(|mut line| {
                    line.quantity = -line.quantity;
                    line
                })
                .collect(),
            ..Default::default()
        };
        info!(
            "crediting booked invoice {} (reference '{reference}')",
            booked.booked_invoice_number
        );
        self.create_draft_invoice(&credit).await
    }
}
