//! Order ingest
//!
//! The upstream ticketing feed delivers one order per invocation as a JSON
//! document on stdin. Paid orders are recorded as a draft journal entry for
//! the payment; unpaid orders become a customer (created on first sight)
//! and a draft invoice.

mod handler;
mod order;

pub use handler::handle_order;
pub use order::{InboundOrder, InboundOrderItem};

#[cfg(test)]
mod tests;
