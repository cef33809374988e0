use super::{f64_if_present, f64_or_zero, parse_f64, present, text_field};
use rea_core::common::error::Result;
use rea_core::common::types::RawRecord;
use rea_core::domain::PropertyRecord;

/// Normalize one Austin property appraisal row.
///
/// A positive appraised value is a membership precondition: rows that
/// resolve to zero are excluded, not defaulted.
pub fn normalize_property(raw: &RawRecord) -> Result<Option<PropertyRecord>> {
    let record = PropertyRecord {
        id: text_field(raw, "account_number").unwrap_or_default(),
        address: format_address(raw),
        zip_code: text_field(raw, "postal_code").unwrap_or_default(),
        appraised_value: appraised_value(raw)?,
        land_value: f64_or_zero(raw, "appraised_land_value")?,
        building_value: f64_or_zero(raw, "appraised_building_value")?,
        property_type: text_field(raw, "property_type_code").unwrap_or_else(|| "Unknown".into()),
        year_built: text_field(raw, "year_built").unwrap_or_default(),
        square_feet: f64_if_present(raw, "building_square_feet")?,
        lot_size: f64_if_present(raw, "land_area_square_feet")?,
    };

    if record.appraised_value > 0.0 {
        Ok(Some(record))
    } else {
        Ok(None)
    }
}

/// The market value column moved between dataset revisions; take the first
/// populated one, else zero (which excludes the row).
fn appraised_value(raw: &RawRecord) -> Result<f64> {
    for key in ["prevvalmarket", "prevvalappraised"] {
        if present(raw, key) {
            return parse_f64(raw, key);
        }
    }
    Ok(0.0)
}

fn format_address(raw: &RawRecord) -> String {
    let mut parts = Vec::new();
    if let Some(street) = text_field(raw, "property_address").filter(|s| !s.is_empty()) {
        parts.push(street);
    }
    parts.push("Austin, TX".to_string());
    if let Some(zip) = text_field(raw, "postal_code").filter(|s| !s.is_empty()) {
        parts.push(zip);
    }
    parts.join(", ")
}
