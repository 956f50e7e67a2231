//! Vendor wire shapes
//!
//! Serde mirrors of the e-conomic JSON schemas. These are plain data
//! transfer values owned by the caller; the client holds no entity state.

mod contact;
mod customer;
mod invoice;
mod journal;
mod order;
mod payment_terms;
mod shared;

pub use contact::{CustomerContact, CustomerContactRef};
pub use customer::{Customer, CustomerGroup};
pub use invoice::Invoice;
pub use journal::{DraftEntryCreated, JournalEntry};
pub use order::{
    Attention, Delivery, DepartmentalDistribution, Notes, Order, OrderLine, Product, Recipient,
    References, Unit, VendorReference,
};
pub use payment_terms::PaymentTerm;
pub use shared::{CustomerRef, Layout, PaymentTermsRef, SalesPerson, VatZone};

pub(crate) fn is_zero_i64(n: &i64) -> bool {
    *n == 0
}

pub(crate) fn is_zero_f64(n: &f64) -> bool {
    *n == 0.0
}

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}
