//! Austin Open Data Portal: property appraisals and building permits.

use super::env_or;
use crate::aggregate::{self, round2, summarize_zips};
use crate::collect::normalize_rows;
use crate::normalize::{normalize_permit, normalize_property};
use crate::soda::{RowFetcher, SodaClient, SodaQuery, Where};
use chrono::Utc;
use rea_core::common::error::Result;
use rea_core::domain::{
    MarketSummary, MarketSummaryResult, PermitRecord, PropertyRecord, ZipSummary,
};
use std::sync::Arc;
use tracing::{error, instrument};

pub const BASE_URL: &str = "https://data.austintexas.gov/resource";
const USER_AGENT: &str = "Austin-Real-Estate-Dashboard/1.0";

const DEFAULT_PROPERTIES_DATASET: &str = "nne4-8riu";
const DEFAULT_PERMITS_DATASET: &str = "3syk-w9eu";

const MARKET_SUMMARY_SAMPLE: u32 = 5_000;
const ZIP_ANALYSIS_SAMPLE: u32 = 3_000;

pub struct AustinApi {
    fetcher: Arc<dyn RowFetcher>,
    properties_dataset: String,
    permits_dataset: String,
}

impl AustinApi {
    pub fn from_env() -> Result<Self> {
        let client = SodaClient::new(BASE_URL, USER_AGENT)?;
        Ok(Self::with_fetcher(Arc::new(client)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn RowFetcher>) -> Self {
        Self {
            fetcher,
            properties_dataset: env_or("AUSTIN_PROPERTIES_DATASET_ID", DEFAULT_PROPERTIES_DATASET),
            permits_dataset: env_or("AUSTIN_PERMITS_DATASET_ID", DEFAULT_PERMITS_DATASET),
        }
    }

    /// Up to `limit` normalized properties, optionally filtered server-side
    /// by ZIP code and a minimum appraised value. Transport failures log
    /// and come back as an empty list.
    #[instrument(skip(self))]
    pub async fn properties(
        &self,
        limit: u32,
        zip_code: Option<&str>,
        min_value: Option<f64>,
    ) -> Vec<PropertyRecord> {
        match self.fetch_properties(limit, zip_code, min_value).await {
            Ok(properties) => properties,
            Err(e) => {
                error!(error = %e, "failed to fetch properties");
                Vec::new()
            }
        }
    }

    async fn fetch_properties(
        &self,
        limit: u32,
        zip_code: Option<&str>,
        min_value: Option<f64>,
    ) -> Result<Vec<PropertyRecord>> {
        let mut clause = Where::new();
        if let Some(zip) = zip_code {
            clause = clause.eq_text("postal_code", zip);
        }
        if let Some(threshold) = min_value {
            clause = clause.gt("appraised_total_value", threshold);
        }

        let query = SodaQuery::new().filter(clause).limit(limit);
        let rows = self.fetcher.fetch_rows(&self.properties_dataset, &query).await?;
        Ok(normalize_rows(&rows, &mut normalize_property))
    }

    /// Citywide appraised-value statistics over a fixed sample. An empty
    /// sample is reported as such, never as statistics over nothing.
    #[instrument(skip(self))]
    pub async fn market_summary(&self) -> MarketSummaryResult {
        let properties = self.properties(MARKET_SUMMARY_SAMPLE, None, None).await;
        if properties.is_empty() {
            return MarketSummaryResult::Unavailable {
                error: "No data available".to_string(),
            };
        }

        let values: Vec<f64> = properties.iter().map(|p| p.appraised_value).collect();
        MarketSummaryResult::Ready(MarketSummary {
            total_properties: properties.len() as u64,
            average_value: round2(aggregate::mean(&values)),
            median_value: round2(aggregate::median(&values)),
            min_value: round2(values.iter().copied().fold(f64::INFINITY, f64::min)),
            max_value: round2(values.iter().copied().fold(f64::NEG_INFINITY, f64::max)),
            last_updated: Utc::now(),
        })
    }

    /// Appraised-value statistics per ZIP code, small groups dropped.
    #[instrument(skip(self))]
    pub async fn zip_analysis(&self) -> Vec<ZipSummary> {
        let properties = self.properties(ZIP_ANALYSIS_SAMPLE, None, None).await;
        summarize_zips(&properties)
    }

    /// The `limit` most recently issued permits. Transport failures log and
    /// come back as an empty list.
    #[instrument(skip(self))]
    pub async fn recent_permits(&self, limit: u32) -> Vec<PermitRecord> {
        let query = SodaQuery::new().order("issued_date DESC").limit(limit);
        match self.fetcher.fetch_rows(&self.permits_dataset, &query).await {
            Ok(rows) => normalize_rows(&rows, &mut normalize_permit),
            Err(e) => {
                error!(error = %e, "failed to fetch permits");
                Vec::new()
            }
        }
    }
}
