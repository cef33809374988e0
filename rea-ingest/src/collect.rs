//! Windowed collection: page through a dataset until the recency window is
//! exhausted, normalizing and filtering as pages arrive.

use crate::soda::{RowFetcher, SodaQuery};
use chrono::{Duration, NaiveDateTime, Utc};
use rea_core::common::error::Result;
use rea_core::common::types::RawRecord;
use tracing::{debug, info, warn};

/// Rows per page. Also the bound for single-shot queries.
pub const PAGE_SIZE: u32 = 20_000;

/// Earliest date still considered recent. Months are counted as 30 days
/// flat, not calendar months.
pub fn cutoff_for_months(months: u32) -> NaiveDateTime {
    Utc::now().naive_utc() - Duration::days(30 * i64::from(months))
}

/// Apply a normalizer to every row, keeping survivors. Malformed rows log a
/// warning and are skipped; they never abort the batch.
pub fn normalize_rows<T, F>(rows: &[RawRecord], normalize: &mut F) -> Vec<T>
where
    F: FnMut(&RawRecord) -> Result<Option<T>>,
{
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        match normalize(row) {
            Ok(Some(record)) => kept.push(record),
            Ok(None) => {}
            Err(e) => warn!(error = %e, "skipping malformed row"),
        }
    }
    kept
}

/// Fetch up to `max_pages` pages of `PAGE_SIZE` rows, stopping early when a
/// page comes back empty (source exhausted) or when a non-empty page yields
/// zero survivors after filtering.
///
/// The zero-survivor stop assumes the source returns rows in roughly
/// descending date order, so a page entirely outside the window means the
/// rest are older still. The portals do not guarantee that ordering.
pub async fn collect_paged<T, F>(
    fetcher: &dyn RowFetcher,
    dataset: &str,
    base: &SodaQuery,
    max_pages: u32,
    mut normalize: F,
) -> Result<Vec<T>>
where
    F: FnMut(&RawRecord) -> Result<Option<T>>,
{
    let mut collected = Vec::new();

    for page in 0..max_pages {
        let query = base.clone().limit(PAGE_SIZE).offset(page * PAGE_SIZE);
        let rows = fetcher.fetch_rows(dataset, &query).await?;
        if rows.is_empty() {
            debug!(page, "source exhausted");
            break;
        }

        let survivors = normalize_rows(&rows, &mut normalize);
        if survivors.is_empty() {
            debug!(page, raw = rows.len(), "no rows inside the window, stopping");
            break;
        }

        info!(page, kept = survivors.len(), raw = rows.len(), "collected page");
        collected.extend(survivors);
    }

    Ok(collected)
}

/// Single-shot variant for small-volume queries: one page bounded at
/// [`PAGE_SIZE`], same filtering, no continuation.
pub async fn collect_single_page<T, F>(
    fetcher: &dyn RowFetcher,
    dataset: &str,
    base: &SodaQuery,
    mut normalize: F,
) -> Result<Vec<T>>
where
    F: FnMut(&RawRecord) -> Result<Option<T>>,
{
    let query = base.clone().limit(PAGE_SIZE);
    let rows = fetcher.fetch_rows(dataset, &query).await?;
    Ok(normalize_rows(&rows, &mut normalize))
}
