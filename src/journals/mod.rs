//! Journal entries
//!
//! Draft accounting entries (cash payments) against the journals OpenAPI,
//! lookup by voucher number over drafts and booked entries, and bulk
//! booking of a journal.

use crate::error::{Error, Result};
use crate::filter::{Filter, FilterOperator};
use crate::http::EconomicClient;
use crate::models::{DraftEntryCreated, JournalEntry};
use crate::pagination::ItemsResponse;
use reqwest::Method;
use tracing::info;

const JOURNALS_BASE: &str = "/journalsapi/v6.0.0";
const BOOKED_ENTRIES_BASE: &str = "/bookedEntriesapi/v2.0.0";

impl EconomicClient {
    /// Create a draft entry. On success `entry.entry_number` is set to the
    /// vendor-assigned number.
    pub async fn create_journal_entry(&self, entry: &mut JournalEntry) -> Result<()> {
        let created: DraftEntryCreated = self
            .api_json(
                Method::POST,
                &format!("{JOURNALS_BASE}/draft-entries/"),
                &[],
                Some(entry),
            )
            .await?;
        info!("created draft entry {}", created.entry_number);
        entry.entry_number = created.entry_number;
        Ok(())
    }

    /// Delete a draft entry by its entry number. Booked entries cannot be
    /// deleted.
    pub async fn delete_journal_entry(&self, entry_number: i64) -> Result<()> {
        self.api_unit::<()>(
            Method::DELETE,
            &format!("{JOURNALS_BASE}/draft-entries/{entry_number}"),
            &[],
            None,
        )
        .await
    }

    /// Number of draft entries currently waiting to be booked.
    pub async fn draft_entry_count(&self) -> Result<i64> {
        self.api_json::<(), i64>(
            Method::GET,
            &format!("{JOURNALS_BASE}/draft-entries/count"),
            &[],
            None,
        )
        .await
    }

    /// The draft entry carrying the given voucher number.
    pub async fn find_draft_entry_by_voucher(&self, voucher: i64) -> Result<JournalEntry> {
        self.find_entry_by_voucher(&format!("{JOURNALS_BASE}/draft-entries"), voucher)
            .await
    }

    /// The booked entry carrying the given voucher number. To credit the
    /// payment, fill in the remaining fields and set `is_credit`.
    pub async fn find_booked_entry_by_voucher(&self, voucher: i64) -> Result<JournalEntry> {
        self.find_entry_by_voucher(&format!("{BOOKED_ENTRIES_BASE}/booked-entries"), voucher)
            .await
    }

    async fn find_entry_by_voucher(&self, path: &str, voucher: i64) -> Result<JournalEntry> {
        let mut filter = Filter::new();
        filter.and_condition("voucherNumber", FilterOperator::Equals, voucher);
        let resp: ItemsResponse<JournalEntry> = self
            .api_json::<(), _>(Method::GET, path, &[("filter", filter.to_string())], None)
            .await?;
        resp.items
            .into_iter()
            .next()
            .ok_or(Error::VoucherNotFound { voucher })
    }

    /// Book every draft entry in the journal. Irreversible.
    pub async fn book_journal(&self, journal_number: i64) -> Result<()> {
        info!("booking all draft entries in journal {journal_number}");
        self.api_unit::<()>(
            Method::POST,
            &format!("{JOURNALS_BASE}/journals/{journal_number}/book"),
            &[],
            None,
        )
        .await
    }
}

#[cfg(test)]
mod tests;
