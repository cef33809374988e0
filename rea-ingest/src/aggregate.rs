//! Group-by aggregation over normalized records. Every numeric output field
//! is rounded to two decimals.

use rea_core::domain::{GroupSummary, PropertyRecord, ZipSummary};
use std::collections::BTreeMap;

/// ZIP groups smaller than this are statistical noise and are dropped.
pub const MIN_ZIP_GROUP: u64 = 10;

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Statistical median: the middle value, or the mean of the two middle
/// values for even-sized input. Callers guarantee a non-empty slice.
pub fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Partition records by a key accessor and reduce each group to
/// count/mean/median of a value accessor. Groups come back in key order;
/// callers impose any ranking they need. Empty input yields empty output.
pub fn summarize_by<T>(
    records: &[T],
    key: impl Fn(&T) -> &str,
    value: impl Fn(&T) -> f64,
) -> Vec<GroupSummary> {
    let mut groups: BTreeMap<&str, Vec<f64>> = BTreeMap::new();
    for record in records {
        groups.entry(key(record)).or_default().push(value(record));
    }

    groups
        .into_iter()
        .map(|(key, values)| GroupSummary {
            key: key.to_string(),
            avg_value: round2(mean(&values)),
            median_value: round2(median(&values)),
            count: values.len() as u64,
        })
        .collect()
}

/// Rank groups by median, highest first. The sort is stable, so tied
/// medians keep their incoming order.
pub fn sort_descending_by_median(rows: &mut [GroupSummary]) {
    rows.sort_by(|a, b| b.median_value.total_cmp(&a.median_value));
}

/// ZIP-level property aggregation: appraised value stats plus mean square
/// footage, with small groups dropped.
pub fn summarize_zips(properties: &[PropertyRecord]) -> Vec<ZipSummary> {
    let mut groups: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    for property in properties {
        let entry = groups.entry(property.zip_code.as_str()).or_default();
        entry.0.push(property.appraised_value);
        entry.1.push(property.square_feet);
    }

    groups
        .into_iter()
        .filter(|(_, (values, _))| values.len() as u64 >= MIN_ZIP_GROUP)
        .map(|(zip, (values, sqft))| ZipSummary {
            zip_code: zip.to_string(),
            avg_value: round2(mean(&values)),
            median_value: round2(median(&values)),
            property_count: values.len() as u64,
            avg_sqft: round2(mean(&sqft)),
        })
        .collect()
}
