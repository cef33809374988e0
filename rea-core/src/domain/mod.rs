use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized Austin property appraisal row. Only rows with a positive
/// appraised value are ever constructed; the normalizer drops the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub address: String,
    pub zip_code: String,
    pub appraised_value: f64,
    pub land_value: f64,
    pub building_value: f64,
    pub property_type: String,
    pub year_built: String,
    pub square_feet: f64,
    pub lot_size: f64,
}

/// Normalized Austin building permit. The issue date stays a raw string;
/// downstream consumers only display it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermitRecord {
    pub permit_id: String,
    pub address: String,
    pub permit_type: String,
    pub work_description: String,
    pub issued_date: String,
    pub estimated_cost: f64,
}

/// Normalized NYC sale inside the recency window. `area` is a borough name
/// or a neighborhood depending on which query produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    pub area: String,
    pub sale_price: f64,
    pub sale_date: NaiveDateTime,
}

/// One group from a group-by aggregation, before it is mapped onto a
/// response-specific row shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummary {
    pub key: String,
    pub avg_value: f64,
    pub median_value: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipSummary {
    pub zip_code: String,
    pub avg_value: f64,
    pub median_value: f64,
    pub property_count: u64,
    pub avg_sqft: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoroughSummary {
    pub borough: String,
    pub median_value: f64,
    pub avg_value: f64,
    pub count: u64,
    /// Stamped on the top-ranked borough only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodSummary {
    pub neighborhood: String,
    pub median_value: f64,
    pub avg_value: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSummary {
    pub total_properties: u64,
    pub average_value: f64,
    pub median_value: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub last_updated: DateTime<Utc>,
}

/// Market summary payload: either computed statistics or an explicit
/// no-data marker, never statistics over an empty set.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MarketSummaryResult {
    Ready(MarketSummary),
    Unavailable { error: String },
}

/// Borough codes as used by the NYC Department of Finance rolling sales
/// dataset. Unknown codes pass through unchanged.
pub fn borough_name(code: &str) -> &str {
    match code {
        "1" => "Manhattan",
        "2" => "Bronx",
        "3" => "Brooklyn",
        "4" => "Queens",
        "5" => "Staten Island",
        other => other,
    }
}

/// Inverse of [`borough_name`]. Unknown names pass through unchanged.
pub fn borough_code(name: &str) -> &str {
    match name {
        "Manhattan" => "1",
        "Bronx" => "2",
        "Brooklyn" => "3",
        "Queens" => "4",
        "Staten Island" => "5",
        other => other,
    }
}
