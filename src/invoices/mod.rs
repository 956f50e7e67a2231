//! Invoice lifecycle
//!
//! Draft creation, booking, per-class listing, lookup by external
//! reference and credit notes, all against the legacy REST API.

mod lifecycle;

pub use lifecycle::InvoiceClass;
