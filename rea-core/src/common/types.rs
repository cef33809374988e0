/// One row exactly as the open-data portal delivered it. Any field may be
/// missing, null, or a string where a number was expected.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
