use super::text_field;
use chrono::NaiveDateTime;
use rea_core::common::error::{IngestError, Result};
use rea_core::common::types::RawRecord;
use rea_core::domain::{borough_name, SaleRecord};
use serde_json::Value;

/// Which column labels the sale and how it maps to a human-readable area.
#[derive(Debug, Clone, Copy)]
pub enum SaleKey {
    /// Numeric borough code, translated to the borough name.
    Borough,
    /// Free-text neighborhood, defaulting to "Unknown" when absent.
    Neighborhood,
}

/// Normalize one NYC rolling-sales row against a recency cutoff.
///
/// Rows outside the window, with no date, or with an absent or literal-zero
/// price are filtered (`Ok(None)`); unparsable dates and prices are
/// malformed (`Err`).
pub fn normalize_sale(
    raw: &RawRecord,
    cutoff: NaiveDateTime,
    key: SaleKey,
) -> Result<Option<SaleRecord>> {
    let Some(raw_date) = text_field(raw, "sale_date").filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let sale_date = parse_sale_date(&raw_date)?;
    if sale_date < cutoff {
        return Ok(None);
    }

    let Some(sale_price) = sale_price(raw)? else {
        return Ok(None);
    };

    let area = match key {
        SaleKey::Borough => {
            let code = text_field(raw, "borough").unwrap_or_default();
            borough_name(&code).to_string()
        }
        SaleKey::Neighborhood => text_field(raw, "neighborhood")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "Unknown".into()),
    };

    Ok(Some(SaleRecord {
        area,
        sale_price,
        sale_date,
    }))
}

/// Sale dates arrive as ISO-8601, sometimes with a trailing `Z`; the
/// comparison against the cutoff is naive either way.
fn parse_sale_date(raw: &str) -> Result<NaiveDateTime> {
    raw.trim_end_matches('Z')
        .parse::<NaiveDateTime>()
        .map_err(|_| IngestError::invalid_record("sale_date", raw))
}

/// `None` for absent or zero prices (the dataset records transfers such as
/// deed gifts as zero-dollar sales), `Err` for unparsable ones.
fn sale_price(raw: &RawRecord) -> Result<Option<f64>> {
    match raw.get("sale_price") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.is_empty() || s == "0" => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| IngestError::invalid_record("sale_price", s)),
        Some(Value::Number(n)) => {
            let value = n
                .as_f64()
                .ok_or_else(|| IngestError::invalid_record("sale_price", &n.to_string()))?;
            Ok(if value == 0.0 { None } else { Some(value) })
        }
        Some(other) => Err(IngestError::invalid_record("sale_price", &other.to_string())),
    }
}
