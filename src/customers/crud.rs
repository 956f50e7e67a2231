//! Plain customer CRUD against the legacy REST API.

use crate::error::Result;
use crate::filter::{Filter, FilterOperator};
use crate::http::EconomicClient;
use crate::models::Customer;
use crate::pagination::CollectionResponse;
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct JsonPatchOp<'a> {
    op: &'a str,
    path: &'a str,
    value: bool,
}

impl EconomicClient {
    /// Fetch one customer by its vendor-assigned number. `None` when the
    /// number is unknown to the agreement.
    pub async fn get_customer_by_number(&self, number: i64) -> Result<Option<Customer>> {
        self.rest_get_optional(&format!("customers/{number}")).await
    }

    /// All customers whose corporate identification number equals the given
    /// business identifier.
    pub async fn find_customers_by_corporate_id(
        &self,
        corporate_id: &str,
    ) -> Result<Vec<Customer>> {
        let mut filter = Filter::new();
        filter.and_condition(
            "corporateIdentificationNumber",
            FilterOperator::Equals,
            corporate_id,
        );
        let resp: CollectionResponse<Customer> = self
            .rest_json::<(), _>(
                Method::GET,
                "customers",
                &[("filter", filter.to_string())],
                None,
            )
            .await?;
        Ok(resp.collection)
    }

    /// Create a customer, returning the record with its vendor-assigned
    /// number.
    pub async fn create_customer(&self, customer: &Customer) -> Result<Customer> {
        self.rest_json(Method::POST, "customers", &[], Some(customer))
            .await
    }

    /// Replace a customer in place by its number.
    pub async fn update_customer(&self, customer: &Customer) -> Result<()> {
        self.rest_unit(
            Method::PUT,
            &format!("customers/{}", customer.customer_number),
            Some(customer),
        )
        .await
    }

    /// Delete a customer. The vendor only allows this while the customer
    /// has no booked documents; that rule is not enforced locally.
    pub async fn delete_customer(&self, number: i64) -> Result<()> {
        self.rest_unit::<()>(Method::DELETE, &format!("customers/{number}"), None)
            .await
    }

    /// Toggle default e-invoicing for a customer. This property is only
    /// updatable through PATCH.
    pub async fn set_e_invoicing(&self, number: i64, disable: bool) -> Result<()> {
        let ops = [JsonPatchOp {
            op: "replace",
            path: "/eInvoicingDisabledByDefault",
            value: disable,
        }];
        self.rest_unit(Method::PATCH, &format!("customers/{number}"), Some(&ops))
            .await
    }
}
