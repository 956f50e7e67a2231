//! Dimension values
//!
//! Creation of dimension values (e.g. departments) and attachment of
//! dimension data to draft entries, against the dimensions OpenAPI.

use crate::error::Result;
use crate::http::EconomicClient;
use reqwest::Method;
use serde::Serialize;
use tracing::debug;

const DIMENSIONS_BASE: &str = "/dimensionsapi/v4.3.0";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewDimensionValue<'a> {
    active: bool,
    dimension_number: i64,
    key: i64,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DraftEntryDimensionData {
    dimension_number: i64,
    dimension_key: i64,
    journal_number: i64,
    entry_number: i64,
}

impl EconomicClient {
    /// Create a value under a dimension. Fails when the key is taken.
    pub async fn create_dimension_value(
        &self,
        dimension_number: i64,
        key: i64,
        name: &str,
    ) -> Result<()> {
        let body = NewDimensionValue {
            active: true,
            dimension_number,
            key,
            name,
        };
        self.api_unit(
            Method::POST,
            &format!("{DIMENSIONS_BASE}/values"),
            &[],
            Some(&body),
        )
        .await
    }

    /// Create the dimension value unless it already exists. Returns true
    /// when a value was created. The name of an existing value is left
    /// untouched.
    pub async fn ensure_dimension_value(
        &self,
        dimension_number: i64,
        key: i64,
        name: &str,
    ) -> Result<bool> {
        let lookup = self
            .api_unit::<()>(
                Method::GET,
                &format!("{DIMENSIONS_BASE}/values/{dimension_number}/{key}"),
                &[],
                None,
            )
            .await;
        match lookup {
            Ok(()) => {
                debug!("dimension value {dimension_number}/{key} already exists");
                Ok(false)
            }
            Err(err) if err.is_not_found() => {
                self.create_dimension_value(dimension_number, key, name)
                    .await?;
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    /// Attach a dimension value to a draft entry.
    pub async fn add_dimension_to_draft_entry(
        &self,
        dimension_number: i64,
        dimension_key: i64,
        journal_number: i64,
        entry_number: i64,
    ) -> Result<()> {
        let body = DraftEntryDimensionData {
            dimension_number,
            dimension_key,
            journal_number,
            entry_number,
        };
        self.api_unit(
            Method::POST,
            &format!("{DIMENSIONS_BASE}/dimension-data/draft-entries"),
            &[],
            Some(&body),
        )
        .await
    }
}

#[cfg(test)]
mod tests;
