//! HTTP transport for both e-conomic API generations
//!
//! One client, two vendor hosts: the legacy REST API (unstructured error
//! bodies) and the newer OpenAPI-style API (structured problem documents).
//! Failures are surfaced to the caller; there is no automatic retry.

mod client;

pub use client::{EconomicClient, EconomicClientBuilder, OPENAPI_BASE_URL, REST_BASE_URL};
