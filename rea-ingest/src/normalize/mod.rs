//! Row-level normalization: coerce one raw portal row into a canonical
//! record, or signal why it cannot be.
//!
//! Normalizers return `Result<Option<T>>`. `Err(InvalidRecord)` means the
//! row carried a malformed value (unparsable number or date) and should be
//! logged and skipped; `Ok(None)` means the row was filtered on purpose
//! (non-positive value, out-of-window date, absent price) and drops
//! silently.

mod permit;
mod property;
mod sale;

pub use permit::normalize_permit;
pub use property::normalize_property;
pub use sale::{normalize_sale, SaleKey};

use rea_core::common::error::{IngestError, Result};
use rea_core::common::types::RawRecord;
use serde_json::Value;

/// Field value as text. JSON numbers print as their decimal form so that
/// pass-through fields like `year_built` survive either representation.
pub(crate) fn text_field(raw: &RawRecord, key: &str) -> Option<String> {
    match raw.get(key) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// A field counts as present only when it is non-null and non-empty.
pub(crate) fn present(raw: &RawRecord, key: &str) -> bool {
    match raw.get(key) {
        Some(Value::String(s)) => !s.is_empty(),
        None | Some(Value::Null) => false,
        Some(_) => true,
    }
}

/// Coerce a field to f64. The field must exist; absence handling is the
/// caller's policy.
pub(crate) fn parse_f64(raw: &RawRecord, key: &str) -> Result<f64> {
    match raw.get(key) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| IngestError::invalid_record(key, &n.to_string())),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| IngestError::invalid_record(key, s)),
        Some(other) => Err(IngestError::invalid_record(key, &other.to_string())),
        None => Err(IngestError::invalid_record(key, "<missing>")),
    }
}

/// Missing or null defaults to zero; anything else must parse, including an
/// empty string (which does not, and rejects the row).
pub(crate) fn f64_or_zero(raw: &RawRecord, key: &str) -> Result<f64> {
    match raw.get(key) {
        None | Some(Value::Null) => Ok(0.0),
        Some(_) => parse_f64(raw, key),
    }
}

/// Presence-sensitive coercion: absent, null, or empty-string fields become
/// zero without attempting a parse.
pub(crate) fn f64_if_present(raw: &RawRecord, key: &str) -> Result<f64> {
    if present(raw, key) {
        parse_f64(raw, key)
    } else {
        Ok(0.0)
    }
}
