//! NYC Department of Finance rolling sales.

use super::env_or;
use crate::aggregate::{sort_descending_by_median, summarize_by};
use crate::collect::{collect_paged, collect_single_page, cutoff_for_months};
use crate::normalize::{normalize_sale, SaleKey};
use crate::soda::{RowFetcher, SodaClient, SodaQuery, Where};
use chrono::Utc;
use rea_core::common::error::Result;
use rea_core::domain::{borough_code, BoroughSummary, NeighborhoodSummary};
use std::sync::Arc;
use tracing::instrument;

pub const BASE_URL: &str = "https://data.cityofnewyork.us/resource";
const USER_AGENT: &str = "NYC-Sales-Dashboard/1.0";

const DEFAULT_SALES_DATASET: &str = "usep-8jbt";

const BOROUGH_COLUMNS: &str = "borough, sale_price, sale_date";
const NEIGHBORHOOD_COLUMNS: &str = "neighborhood, sale_price, sale_date";

pub struct NycSalesApi {
    fetcher: Arc<dyn RowFetcher>,
    dataset: String,
}

impl NycSalesApi {
    pub fn from_env() -> Result<Self> {
        let client = SodaClient::new(BASE_URL, USER_AGENT)?;
        Ok(Self::with_fetcher(Arc::new(client)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn RowFetcher>) -> Self {
        Self {
            fetcher,
            dataset: env_or("NYC_SALES_DATASET_ID", DEFAULT_SALES_DATASET),
        }
    }

    /// Sales inside the window grouped by borough, ranked by median price.
    /// The top borough carries a generation timestamp.
    #[instrument(skip(self))]
    pub async fn recent_sales_by_borough(
        &self,
        months: u32,
        pages: u32,
    ) -> Result<Vec<BoroughSummary>> {
        let cutoff = cutoff_for_months(months);
        let base = SodaQuery::new()
            .select(BOROUGH_COLUMNS)
            .filter(Where::new().gt("sale_price", 0.0));

        let sales = collect_paged(self.fetcher.as_ref(), &self.dataset, &base, pages, |row| {
            normalize_sale(row, cutoff, SaleKey::Borough)
        })
        .await?;
        if sales.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = summarize_by(&sales, |s| s.area.as_str(), |s| s.sale_price);
        sort_descending_by_median(&mut rows);

        let mut boroughs: Vec<BoroughSummary> = rows
            .into_iter()
            .map(|group| BoroughSummary {
                borough: group.key,
                median_value: group.median_value,
                avg_value: group.avg_value,
                count: group.count,
                last_updated: None,
            })
            .collect();
        if let Some(top) = boroughs.first_mut() {
            top.last_updated = Some(Utc::now());
        }

        Ok(boroughs)
    }

    /// Per-neighborhood breakdown for one borough, ranked by median price.
    /// Neighborhood volume is small enough for a single page.
    #[instrument(skip(self))]
    pub async fn neighborhood_breakdown(
        &self,
        borough: &str,
        months: u32,
    ) -> Result<Vec<NeighborhoodSummary>> {
        let cutoff = cutoff_for_months(months);
        let clause = Where::new()
            .gt("sale_price", 0.0)
            .eq_text("borough", borough_code(borough));
        let base = SodaQuery::new().select(NEIGHBORHOOD_COLUMNS).filter(clause);

        let sales = collect_single_page(self.fetcher.as_ref(), &self.dataset, &base, |row| {
            normalize_sale(row, cutoff, SaleKey::Neighborhood)
        })
        .await?;
        if sales.is_empty() {
            return Ok(Vec::new());
        }

        let mut rows = summarize_by(&sales, |s| s.area.as_str(), |s| s.sale_price);
        sort_descending_by_median(&mut rows);

        Ok(rows
            .into_iter()
            .map(|group| NeighborhoodSummary {
                neighborhood: group.key,
                median_value: group.median_value,
                avg_value: group.avg_value,
                count: group.count,
            })
            .collect())
    }
}
