//! Query filter builder
//!
//! Builds the filter expression string consumed by the vendor's list
//! endpoints, e.g. `name$eq:test$and:age$gt:10`.

mod builder;

pub use builder::{Filter, FilterOperator, FilterValue};
