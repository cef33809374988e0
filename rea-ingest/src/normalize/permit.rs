use super::{f64_if_present, text_field};
use rea_core::common::error::Result;
use rea_core::common::types::RawRecord;
use rea_core::domain::PermitRecord;

/// Normalize one Austin building permit row. Permits have no inclusion
/// precondition; every field defaults to empty except the estimated cost,
/// where only a malformed (non-numeric, non-empty) value rejects the row.
pub fn normalize_permit(raw: &RawRecord) -> Result<Option<PermitRecord>> {
    let record = PermitRecord {
        permit_id: text_field(raw, "permit_number").unwrap_or_default(),
        address: text_field(raw, "original_address1").unwrap_or_default(),
        permit_type: text_field(raw, "permit_type").unwrap_or_default(),
        work_description: text_field(raw, "work_description").unwrap_or_default(),
        issued_date: text_field(raw, "issued_date").unwrap_or_default(),
        estimated_cost: f64_if_present(raw, "estimated_cost")?,
    };

    Ok(Some(record))
}
