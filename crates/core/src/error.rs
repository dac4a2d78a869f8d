use flowmeta_records::RecordError;

/// Errors surfaced by the metadata layer.
///
/// Aggregation itself never fails; these come from reading input documents
/// and from parsing timestamps supplied by the caller.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// An input document could not be read into records.
    #[error(transparent)]
    Records(#[from] RecordError),

    /// A timestamp is not RFC 3339 (or the engine's `+0000` offset form).
    #[error("invalid timestamp '{value}': {message}")]
    InvalidTimestamp { value: String, message: String },
}
