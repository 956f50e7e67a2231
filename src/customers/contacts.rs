//! Contact sync for customers.

use crate::error::Result;
use crate::http::EconomicClient;
use crate::models::{Customer, CustomerContact};
use crate::pagination::CollectionResponse;
use reqwest::Method;
use tracing::debug;

impl EconomicClient {
    /// All contacts registered on a customer.
    pub async fn customer_contacts(&self, customer_number: i64) -> Result<Vec<CustomerContact>> {
        let resp: CollectionResponse<CustomerContact> = self
            .rest_json::<(), _>(
                Method::GET,
                &format!("customers/{customer_number}/contacts"),
                &[],
                None,
            )
            .await?;
        Ok(resp.collection)
    }

    /// Create a contact on a customer.
    pub async fn create_contact(
        &self,
        customer_number: i64,
        contact: &CustomerContact,
    ) -> Result<CustomerContact> {
        self.rest_json(
            Method::POST,
            &format!("customers/{customer_number}/contacts"),
            &[],
            Some(contact),
        )
        .await
    }

    /// Number of the most recently listed contact on a customer, `None`
    /// when the customer has no contacts.
    pub async fn latest_contact_number(&self, customer_number: i64) -> Result<Option<i64>> {
        let contacts = self.customer_contacts(customer_number).await?;
        Ok(contacts.last().map(|c| c.customer_contact_number))
    }

    /// Bring the customer's contact list in line with `contact`.
    ///
    /// Identity is a loose match: an existing contact with the same email,
    /// phone or name is considered the same person and is replaced in
    /// place. Without a match a new contact is created. Contacts are never
    /// deleted here.
    pub(crate) async fn sync_contact(
        &self,
        customer: &Customer,
        contact: &CustomerContact,
    ) -> Result<()> {
        let existing = self.customer_contacts(customer.customer_number).await?;
        let matched = existing.into_iter().find(|c| {
            c.email == contact.email || c.phone == contact.phone || c.name == contact.name
        });
        match matched {
            Some(found) => {
                debug!(
                    "updating contact {} on customer {}",
                    found.customer_contact_number, customer.customer_number
                );
                let mut updated = contact.clone();
                updated.customer_contact_number = found.customer_contact_number;
                self.rest_unit(
                    Method::PUT,
                    &format!(
                        "customers/{}/contacts/{}",
                        customer.customer_number, found.customer_contact_number
                    ),
                    Some(&updated),
                )
                .await
            }
            None => {
                debug!("creating contact on customer {}", customer.customer_number);
                self.create_contact(customer.customer_number, contact)
                    .await?;
                Ok(())
            }
        }
    }
}
