//! Customer operations
//!
//! CRUD against the `customers` resource plus the idempotent
//! find-or-create-or-update reconciliation keyed by the business identifier
//! (corporate identification number, or VAT number when absent), and the
//! contact sync that follows it.

mod contacts;
mod crud;
mod reconcile;

pub use reconcile::MAX_CREATE_ATTEMPTS;
