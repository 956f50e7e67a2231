//! Paginated collection fetching
//!
//! The legacy REST API wraps collections in a `collection` array, the
//! OpenAPI family in an `items` array; both carry the same pagination
//! metadata. [`EconomicClient::fetch_collection`] walks every page of a
//! resource and returns one ordered sequence.
//!
//! [`EconomicClient::fetch_collection`]: crate::http::EconomicClient::fetch_collection

mod fetcher;

pub use fetcher::{CollectionResponse, ItemsResponse, Page, PageInfo, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
