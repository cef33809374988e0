use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid record: field `{field}` had value `{value}`")]
    InvalidRecord { field: String, value: String },

    #[error("API error: {message}")]
    Api { message: String },
}

impl IngestError {
    /// Row-level rejection signal. Callers log it and move on to the next
    /// row; it never aborts a batch.
    pub fn invalid_record(field: &str, value: &str) -> Self {
        IngestError::InvalidRecord {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
