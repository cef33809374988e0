//! Socrata Open Data API transport: one bounded query per call, no paging
//! logic here. The collector and the facades decide what to ask for.

pub mod predicate;

pub use predicate::Where;

use async_trait::async_trait;
use rea_core::common::error::{IngestError, Result};
use rea_core::common::types::RawRecord;
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between the pipeline and the remote portal. Facades own a concrete
/// [`SodaClient`]; tests substitute scripted fetchers.
#[async_trait]
pub trait RowFetcher: Send + Sync {
    async fn fetch_rows(&self, dataset: &str, query: &SodaQuery) -> Result<Vec<RawRecord>>;
}

/// One bounded SODA query: column selection, filter, ordering, page bounds.
#[derive(Debug, Clone, Default)]
pub struct SodaQuery {
    select: Option<String>,
    filter: Option<Where>,
    order: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
}

impl SodaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    pub fn filter(mut self, clause: Where) -> Self {
        if !clause.is_empty() {
            self.filter = Some(clause);
        }
        self
    }

    pub fn order(mut self, order: &str) -> Self {
        self.order = Some(order.to_string());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(select) = &self.select {
            params.push(("$select", select.clone()));
        }
        if let Some(filter) = &self.filter {
            params.push(("$where", filter.to_clause()));
        }
        if let Some(order) = &self.order {
            params.push(("$order", order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("$limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            params.push(("$offset", offset.to_string()));
        }
        params
    }
}

/// HTTP client for one portal. Each facade owns its own instance; there is
/// no process-wide shared session.
pub struct SodaClient {
    client: reqwest::Client,
    base_url: String,
}

impl SodaClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RowFetcher for SodaClient {
    async fn fetch_rows(&self, dataset: &str, query: &SodaQuery) -> Result<Vec<RawRecord>> {
        let url = format!("{}/{}.json", self.base_url, dataset);
        debug!(%url, "SODA request");

        let response = self
            .client
            .get(&url)
            .query(&query.to_params())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
