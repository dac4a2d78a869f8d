/// Errors raised while reading process-engine records from JSON.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required top-level field is missing or null.
    #[error("document missing required field: '{field}'")]
    MissingField { field: String },

    /// A record is present but does not have the expected shape.
    #[error("invalid {record} record: {message}")]
    InvalidRecord { record: String, message: String },

    /// The document itself is not usable (e.g. not a JSON object).
    #[error("invalid document: {0}")]
    InvalidDocument(String),
}
