//! Error types for economic-sync
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde::Deserialize;
use thiserror::Error;

/// Vendor error code reported when an entity with the same identifier
/// already exists on the agreement.
pub const ENTITY_EXISTS_CODE: &str = "E06010";

/// One entry from the OpenAPI problem document's error list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// The request property the error refers to.
    #[serde(default)]
    pub property: String,
    /// Human-readable message for this property.
    #[serde(default)]
    pub message: String,
    /// Vendor error code, e.g. `E06010`.
    #[serde(rename = "errorCode", default)]
    pub error_code: String,
}

/// The main error type for economic-sync
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid invoice class '{class}'")]
    InvalidInvoiceClass { class: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure from the legacy REST API. The response body is unstructured
    /// text and is surfaced verbatim; `error_code` is populated when the
    /// body turns out to be JSON carrying an `errorCode` field.
    #[error("e-conomic REST call failed ({method} {path}): HTTP {status}: {body}")]
    RestApi {
        method: String,
        path: String,
        status: u16,
        body: String,
        error_code: Option<String>,
    },

    /// Failure from the OpenAPI-style API, decoded from its problem document.
    #[error("e-conomic API call failed ({method} {path}): HTTP {status}: {title} {}", format_details(.errors))]
    Api {
        method: String,
        path: String,
        status: u16,
        title: String,
        errors: Vec<ApiErrorDetail>,
    },

    // ============================================================================
    // Reconciliation Errors
    // ============================================================================
    #[error("Exceeded the maximum number of attempts ({attempts}) to create a customer")]
    CreateAttemptsExhausted { attempts: u32 },

    // ============================================================================
    // Lookup Errors
    // ============================================================================
    #[error("No invoice found with reference '{reference}'")]
    ReferenceNotFound { reference: String },

    #[error("Reference '{reference}' matches {matches} invoices, expected exactly one")]
    AmbiguousReference { reference: String, matches: usize },

    #[error("No journal entry found with voucher number {voucher}")]
    VoucherNotFound { voucher: i64 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_details(errors: &[ApiErrorDetail]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {} ({})", e.property, e.message, e.error_code))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status of a failed vendor call, if this is a transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::RestApi { status, .. } | Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the vendor reported that the entity being created already
    /// exists (code `E06010`), on either API generation.
    pub fn is_entity_exists(&self) -> bool {
        match self {
            Error::RestApi { error_code, .. } => error_code.as_deref() == Some(ENTITY_EXISTS_CODE),
            Error::Api { errors, .. } => errors.iter().any(|e| e.error_code == ENTITY_EXISTS_CODE),
            _ => false,
        }
    }

    /// True when the vendor responded 404 for the requested resource.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Result type alias for economic-sync
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("missing credentials");
        assert_eq!(err.to_string(), "Configuration error: missing credentials");

        let err = Error::validation("no corporate identification number or vat number provided");
        assert_eq!(
            err.to_string(),
            "Validation error: no corporate identification number or vat number provided"
        );

        let err = Error::RestApi {
            method: "POST".into(),
            path: "customers".into(),
            status: 400,
            body: "bad request".into(),
            error_code: None,
        };
        assert_eq!(
            err.to_string(),
            "e-conomic REST call failed (POST customers): HTTP 400: bad request"
        );
    }

    #[test]
    fn test_api_error_display_includes_details() {
        let err = Error::Api {
            method: "POST".into(),
            path: "/journalsapi/v6.0.0/draft-entries/".into(),
            status: 400,
            title: "One or more errors occurred.".into(),
            errors: vec![ApiErrorDetail {
                property: "amount".into(),
                message: "Amount is required".into(),
                error_code: "E00001".into(),
            }],
        };
        let text = err.to_string();
        assert!(text.contains("One or more errors occurred."));
        assert!(text.contains("amount: Amount is required (E00001)"));
    }

    #[test]
    fn test_is_entity_exists_rest() {
        let err = Error::RestApi {
            method: "POST".into(),
            path: "customers".into(),
            status: 400,
            body: String::new(),
            error_code: Some(ENTITY_EXISTS_CODE.to_string()),
        };
        assert!(err.is_entity_exists());

        let err = Error::RestApi {
            method: "POST".into(),
            path: "customers".into(),
            status: 400,
            body: String::new(),
            error_code: None,
        };
        assert!(!err.is_entity_exists());
    }

    #[test]
    fn test_is_entity_exists_api() {
        let err = Error::Api {
            method: "POST".into(),
            path: "x".into(),
            status: 400,
            title: String::new(),
            errors: vec![ApiErrorDetail {
                property: "customerNumber".into(),
                message: "already exists".into(),
                error_code: ENTITY_EXISTS_CODE.into(),
            }],
        };
        assert!(err.is_entity_exists());
        assert!(!Error::validation("x").is_entity_exists());
    }

    #[test]
    fn test_is_not_found() {
        let err = Error::RestApi {
            method: "GET".into(),
            path: "customers/42".into(),
            status: 404,
            body: "not found".into(),
            error_code: None,
        };
        assert!(err.is_not_found());
        assert!(!Error::validation("x").is_not_found());
    }
}
