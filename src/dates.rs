//! Date validation.

use crate::error::{Error, Result};
use chrono::NaiveDate;

/// Validate an ISO-8601 calendar date (YYYY-MM-DD). Impossible dates such
/// as `2024-02-30` are rejected, not just malformed strings.
pub fn validate_date(date: &str) -> Result<()> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| Error::validation(format!("invalid date '{date}', expected YYYY-MM-DD")))
}
