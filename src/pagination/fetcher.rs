//! Page response types and the all-pages fetcher.

use crate::error::Result;
use crate::http::EconomicClient;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Pagination metadata shared by both response envelopes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub first_page: String,
    #[serde(default)]
    pub last_page: String,
    #[serde(default)]
    pub max_page_size_allowed: i64,
    #[serde(default)]
    pub page_size: i64,
    /// Total result count across all pages.
    #[serde(default)]
    pub results: i64,
    #[serde(default)]
    pub results_without_filter: i64,
    #[serde(default)]
    pub skip_pages: i64,
}

/// Collection envelope used by the legacy REST API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse<T> {
    #[serde(default = "Vec::new")]
    pub collection: Vec<T>,
    #[serde(default)]
    pub pagination: PageInfo,
    #[serde(rename = "self", default)]
    pub self_: String,
}

/// Items envelope used by the OpenAPI family.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub pagination: PageInfo,
    #[serde(rename = "self", default)]
    pub self_: String,
}

/// Seam over the two page envelopes so the fetcher can walk either.
pub trait Page<T> {
    /// Total result count reported by the page's metadata.
    fn total_results(&self) -> i64;
    /// Consume the page, yielding its items in vendor order.
    fn into_items(self) -> Vec<T>;
}

impl<T> Page<T> for CollectionResponse<T> {
    fn total_results(&self) -> i64 {
        self.pagination.results
    }

    fn into_items(self) -> Vec<T> {
        self.collection
    }
}

impl<T> Page<T> for ItemsResponse<T> {
    fn total_results(&self) -> i64 {
        self.pagination.results
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Which API generation a paged resource lives on.
#[derive(Clone, Copy)]
enum ApiFamily {
    Rest,
    OpenApi,
}

impl EconomicClient {
    /// Fetch every page of a legacy REST collection resource, returning all
    /// items in vendor order. Any page failure aborts the whole fetch.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        path: &str,
        page_size: i64,
    ) -> Result<Vec<T>> {
        self.fetch_all::<CollectionResponse<T>, T>(ApiFamily::Rest, path, page_size)
            .await
    }

    /// Fetch every page of an OpenAPI items resource.
    pub async fn fetch_items<T: DeserializeOwned>(
        &self,
        path: &str,
        page_size: i64,
    ) -> Result<Vec<T>> {
        self.fetch_all::<ItemsResponse<T>, T>(ApiFamily::OpenApi, path, page_size)
            .await
    }

    async fn fetch_page<P>(
        &self,
        family: ApiFamily,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<P>
    where
        P: DeserializeOwned,
    {
        match family {
            ApiFamily::Rest => self.rest_json::<(), _>(Method::GET, path, query, None).await,
            ApiFamily::OpenApi => self.api_json::<(), _>(Method::GET, path, query, None).await,
        }
    }

    async fn fetch_all<P, T>(&self, family: ApiFamily, path: &str, page_size: i64) -> Result<Vec<T>>
    where
        P: Page<T> + DeserializeOwned,
    {
        let page_size = page_size.max(1);
        let first: P = self
            .fetch_page(family, path, &[("pagesize", page_size.to_string())])
            .await?;
        let total = first.total_results();
        // Observed vendor-client behavior: one page past the integer
        // quotient is always fetched, even when results divide evenly.
        let pages = total / page_size + 1;
        let mut all = first.into_items();
        for skip in 1..pages {
            let page: P = self
                .fetch_page(
                    family,
                    path,
                    &[
                        ("skippages", skip.to_string()),
                        ("pagesize", page_size.to_string()),
                    ],
                )
                .await?;
            all.extend(page.into_items());
        }
        debug!("fetched {} items from {path} over {pages} pages", all.len());
        Ok(all)
    }
}
