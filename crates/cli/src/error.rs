use std::path::PathBuf;

use flowmeta_core::MetadataError;

/// Everything that can make a `flowmeta` invocation exit non-zero.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("error reading file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("error parsing JSON in '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("error parsing config '{}': {source}", path.display())]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
