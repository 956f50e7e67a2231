//! Idempotent get-or-create reconciliation for customers.

use crate::error::{Error, Result};
use crate::http::EconomicClient;
use crate::models::{Customer, CustomerContact};
use rand::Rng;
use tracing::{debug, warn};

/// Maximum number of creation attempts before giving up.
pub const MAX_CREATE_ATTEMPTS: u32 = 10;

const CUSTOMER_NUMBER_MIN: i64 = 100_000_000;
const CUSTOMER_NUMBER_MAX: i64 = 999_999_999;

fn random_customer_number() -> i64 {
    rand::thread_rng().gen_range(CUSTOMER_NUMBER_MIN..CUSTOMER_NUMBER_MAX)
}

/// Tie-break among multiple customers sharing a corporate id: prefer the one
/// whose corporate identification number equals its own customer number.
/// Vendor-observed behavior, kept as is.
fn pick_customer(mut customers: Vec<Customer>) -> Customer {
    if customers.len() > 1 {
        warn!(
            "multiple customers found with corporate id {}",
            customers[0].corporate_identification_number
        );
        if let Some(pos) = customers
            .iter()
            .position(|c| c.corporate_identification_number == c.customer_number.to_string())
        {
            return customers.swap_remove(pos);
        }
    }
    customers.swap_remove(0)
}

impl EconomicClient {
    /// Resolve the customer record the given value refers to, or `None`
    /// when no matching customer exists yet.
    ///
    /// The numeric id is tried first when known and is only trusted when
    /// the corporate identification number also matches; otherwise the
    /// business identifier is searched and the first (tie-broken) result
    /// wins.
    async fn resolve_customer(&self, customer: &Customer) -> Result<Option<Customer>> {
        if customer.customer_number > 0 {
            if let Some(found) = self.get_customer_by_number(customer.customer_number).await? {
                if found.corporate_identification_number
                    == customer.corporate_identification_number
                {
                    return Ok(Some(found));
                }
                debug!(
                    "customer {} has corporate id {:?}, expected {:?}; searching by identifier",
                    customer.customer_number,
                    found.corporate_identification_number,
                    customer.corporate_identification_number
                );
            }
        }
        let lookup = if customer.corporate_identification_number.is_empty() {
            &customer.vat_number
        } else {
            &customer.corporate_identification_number
        };
        let matches = self.find_customers_by_corporate_id(lookup).await?;
        if matches.is_empty() {
            return Ok(None);
        }
        Ok(Some(pick_customer(matches)))
    }

    /// Get the customer identified by the business identifier, creating it
    /// when absent. `customer` is read and updated in place with the
    /// resolved customer number; the full resolved record is returned.
    ///
    /// At least one of the corporate identification number or the VAT
    /// number must be set. A present corporate id is copied into the VAT
    /// number, which is the canonical lookup field on some agreements.
    ///
    /// Creation uses a random candidate number and retries on the vendor's
    /// entity-exists code, bounded by [`MAX_CREATE_ATTEMPTS`]. The
    /// create-if-absent race has no distributed lock: callers driving the
    /// same business key concurrently can produce duplicate customers, so
    /// writes per business key must be serialized by the caller.
    pub async fn get_or_create_customer(
        &self,
        customer: &mut Customer,
        contact: Option<&CustomerContact>,
    ) -> Result<Customer> {
        if customer.corporate_identification_number.is_empty() && customer.vat_number.is_empty() {
            return Err(Error::validation(
                "no corporate identification number or vat number provided",
            ));
        }
        if !customer.corporate_identification_number.is_empty() {
            customer.vat_number = customer.corporate_identification_number.clone();
        }

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let resolved = match self.resolve_customer(customer).await? {
                None => {
                    if customer.customer_number == 0 {
                        customer.customer_number = random_customer_number();
                        debug!("new candidate customer number {}", customer.customer_number);
                    }
                    match self.create_customer(customer).await {
                        Ok(created) => created,
                        Err(err) if err.is_entity_exists() => {
                            warn!(
                                "customer number {} already exists (attempt {attempt}/{MAX_CREATE_ATTEMPTS})",
                                customer.customer_number
                            );
                            customer.customer_number = random_customer_number();
                            continue;
                        }
                        Err(err) => return Err(err),
                    }
                }
                // A record that matches on neither identifier is a number
                // collision with some other business.
                Some(found)
                    if found.corporate_identification_number
                        != customer.corporate_identification_number
                        && found.vat_number != customer.vat_number =>
                {
                    warn!(
                        "customer number {} belongs to a different business (attempt {attempt}/{MAX_CREATE_ATTEMPTS})",
                        found.customer_number
                    );
                    customer.customer_number = random_customer_number();
                    continue;
                }
                Some(found) => found,
            };

            customer.customer_number = resolved.customer_number;
            if let Some(contact) = contact {
                self.sync_contact(&resolved, contact).await?;
            }
            return Ok(resolved);
        }

        warn!("exceeded the maximum number of attempts to create customer {customer:?}");
        Err(Error::CreateAttemptsExhausted {
            attempts: MAX_CREATE_ATTEMPTS,
        })
    }

    /// Get-or-create, then replace the remote record with the supplied one.
    /// Returns the resolved customer number.
    pub async fn update_or_create_customer(
        &self,
        mut customer: Customer,
        contact: &CustomerContact,
    ) -> Result<i64> {
        self.get_or_create_customer(&mut customer, Some(contact))
            .await?;
        self.update_customer(&customer).await?;
        Ok(customer.customer_number)
    }
}
