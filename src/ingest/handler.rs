//! Dispatch of one inbound order against the accounting backend.

use super::order::{InboundOrder, InboundOrderItem};
use crate::dates::validate_date;
use crate::error::Result;
use crate::http::EconomicClient;
use crate::models::{
    Customer, CustomerContact, CustomerGroup, CustomerRef, DepartmentalDistribution, JournalEntry,
    Layout, Order, OrderLine, PaymentTermsRef, Product, Recipient, VatZone,
};
use chrono::Local;
use tracing::info;

/// Journal and account constants for ticket payments. Agreed with the
/// bookkeeper; changing them requires a matching chart-of-accounts change.
const PAYMENT_JOURNAL: i64 = 2;
const PAYMENT_ENTRY_TYPE: i64 = 2;
const PAYMENT_ACCOUNT: i64 = 6724;
const PAYMENT_CONTRA_ACCOUNT: i64 = 6730;

const INVOICE_LAYOUT: i64 = 20;
const DEFAULT_CUSTOMER_GROUP: i64 = 1;
/// Net 14 days.
const DEFAULT_PAYMENT_TERMS: i64 = 4;
const DOMESTIC_VAT_ZONE: i64 = 1;

/// Map a ticketing product id onto the accounting product catalogue.
/// Unknown ids map to the empty product.
fn product_number_for(product_id: i64) -> &'static str {
    match product_id {
        63 => "15", // gift card
        47 => "10", // ticket
        10 => "11", // ticket fee
        8 => "14",  // addon
        58 => "12", // invoice fee
        68 => "13", // SMS fee
        _ => "",
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Process one inbound order.
///
/// Paid orders are already settled upstream, so only the payment is
/// recorded, as a draft journal entry keyed by the upstream order id.
/// Unpaid orders get the buyer reconciled as a customer and a draft
/// invoice created; booking is left to the bookkeeper.
pub async fn handle_order(client: &EconomicClient, order: &InboundOrder) -> Result<()> {
    if let Some(due_date) = order.due_date.as_deref() {
        if !due_date.is_empty() {
            validate_date(due_date)?;
        }
    }

    if order.paid {
        let amount: f64 = order.order_items.iter().map(|item| item.total_price).sum();
        let mut entry = JournalEntry {
            amount,
            currency: "DKK".into(),
            voucher_number: order.tikko_order_id,
            date: today(),
            account_number: PAYMENT_ACCOUNT,
            contra_account_number: PAYMENT_CONTRA_ACCOUNT,
            entry_type_number: PAYMENT_ENTRY_TYPE,
            journal_number: PAYMENT_JOURNAL,
            text: format!("Event id: {}", order.event_id),
            ..Default::default()
        };
        client.create_journal_entry(&mut entry).await?;
        info!(
            "recorded payment for order {} as draft entry {}",
            order.tikko_order_id, entry.entry_number
        );
        return Ok(());
    }

    let mut customer = customer_from(order);
    let contact = contact_from(order);
    let resolved = client
        .get_or_create_customer(&mut customer, Some(&contact))
        .await?;

    let draft = Order {
        date: today(),
        currency: order.order_currency.clone(),
        layout: Layout {
            layout_number: INVOICE_LAYOUT,
            ..Default::default()
        },
        payment_terms: resolved.payment_terms.clone(),
        customer: CustomerRef {
            customer_number: resolved.customer_number,
            ..Default::default()
        },
        recipient: Recipient {
            name: resolved.name.clone(),
            address: format!("{} {}", order.invoice_address_1, order.invoice_address_2)
                .trim()
                .to_string(),
            city: order.invoice_city.clone(),
            zip: order.invoice_zip.clone(),
            vat_zone: VatZone {
                vat_zone_number: DOMESTIC_VAT_ZONE,
                ..Default::default()
            },
            ..Default::default()
        },
        lines: order
            .order_items
            .iter()
            .map(|item| order_line_from(item, order.event_id))
            .collect(),
        ..Default::default()
    };
    let invoice = client.create_draft_invoice(&draft).await?;
    info!(
        "created draft invoice {} for order {}",
        invoice.draft_invoice_number, order.tikko_order_id
    );
    Ok(())
}

fn customer_from(order: &InboundOrder) -> Customer {
    Customer {
        name: order.invoice_person.clone(),
        address: order.invoice_address_1.clone(),
        city: order.invoice_city.clone(),
        zip: order.invoice_zip.clone(),
        email: order.invoice_email.clone(),
        telephone_and_fax_number: order.invoice_telephone.clone(),
        country: order.invoice_country_code.clone(),
        corporate_identification_number: order.invoice_cvr.clone(),
        currency: "DKK".into(),
        customer_group: CustomerGroup {
            customer_group_number: DEFAULT_CUSTOMER_GROUP,
            ..Default::default()
        },
        payment_terms: PaymentTermsRef {
            payment_terms_number: DEFAULT_PAYMENT_TERMS,
            ..Default::default()
        },
        vat_zone: VatZone {
            vat_zone_number: DOMESTIC_VAT_ZONE,
            ..Default::default()
        },
        ..Default::default()
    }
}

fn contact_from(order: &InboundOrder) -> CustomerContact {
    CustomerContact {
        name: order.invoice_person.clone(),
        email: order.invoice_email.clone(),
        phone: order.invoice_telephone.clone(),
        ..Default::default()
    }
}

fn order_line_from(item: &InboundOrderItem, event_id: i64) -> OrderLine {
    OrderLine {
        line_number: item.product_id,
        sort_key: item.sort_key,
        description: item.description.clone(),
        product: Some(Product {
            product_number: product_number_for(item.product_id).to_string(),
            ..Default::default()
        }),
        quantity: item.quantity as f64,
        unit_net_price: item.unit_price,
        departmental_distribution: Some(DepartmentalDistribution {
            departmental_distribution_number: event_id,
            ..Default::default()
        }),
        ..Default::default()
    }
}
