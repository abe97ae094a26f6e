//! Client calls for the filter endpoints.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use common::{filter_criteria::FilterCriteria, filter_response::{FilterCountResponse, InsertListingResponse}, listing::Listing};
use reqwest::Client;
use tracing::debug;

/// Anything that can count listings for a set of criteria.
#[async_trait]
pub trait CountSource: Send + Sync {
    async fn count(&self, criteria: &FilterCriteria) -> anyhow::Result<u64>;
}

pub struct FilterApiClient {
    client: Client,
    filter_url: String,
}

impl FilterApiClient {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        let filter_url = format!("{}/filter", base_url.trim_end_matches('/'));
        Ok(Self { client, filter_url })
    }

    pub async fn insert_listing(&self, listing: &Listing) -> anyhow::Result<InsertListingResponse> {
        let response = self
            .client
            .post(&self.filter_url)
            .json(listing)
            .send()
            .await
            .context("Failed to send listing")?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Error: {}: {}", status, body);
        }
        response.json::<InsertListingResponse>().await.context("Failed to decode insert response")
    }
}

#[async_trait]
impl CountSource for FilterApiClient {
    async fn count(&self, criteria: &FilterCriteria) -> anyhow::Result<u64> {
        let query = criteria.to_query_pairs();
        debug!("GET {} {:?}", self.filter_url, query);
        let response = self
            .client
            .get(&self.filter_url)
            .query(&query)
            .send()
            .await
            .context("Failed to send count query")?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Error: {}: {}", status, body);
        }
        let body: FilterCountResponse = response.json().await.context("Failed to decode count response")?;
        Ok(body.count)
    }
}
