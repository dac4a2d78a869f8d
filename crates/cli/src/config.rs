//! Optional `flowmeta.toml` configuration.
//!
//! # Example
//!
//! ```toml
//! [logging]
//! filter = "flowmeta_core=debug"
//!
//! [output]
//! format = "json"
//! pretty = false
//!
//! [summary]
//! running_suffix = " (running)"
//! ```
//!
//! Every section and key may be omitted.

use std::path::{Path, PathBuf};

use flowmeta_core::SummaryOptions;
use serde::Deserialize;

use crate::error::CliError;
use crate::OutputFormat;

/// Looked up in the working directory when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "flowmeta.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub summary: SummaryConfig,
}

/// `[logging]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct OutputConfig {
    /// Used when `--output` is not passed.
    pub format: Option<OutputFormat>,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            pretty: true,
        }
    }
}

/// `[summary]`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct SummaryConfig {
    pub running_suffix: Option<String>,
}

impl Config {
    /// Load `explicit` if given (it must exist), else `flowmeta.toml` in the
    /// working directory if present, else defaults.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Config, CliError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    return Ok(Config::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
            path: path.clone(),
            source,
        })?;
        Config::parse(&content).map_err(|source| CliError::Config { path, source })
    }

    pub(crate) fn parse(content: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(content)
    }

    pub(crate) fn summary_options(&self) -> SummaryOptions {
        let mut options = SummaryOptions::default();
        if let Some(suffix) = &self.summary.running_suffix {
            options.running_suffix = suffix.clone();
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.pretty);
        assert_eq!(config.output.format, None);
        assert_eq!(config.summary_options(), SummaryOptions::default());
    }

    #[test]
    fn full_config() {
        let config = Config::parse(
            r#"
            [logging]
            filter = "debug"

            [output]
            format = "json"
            pretty = false

            [summary]
            running_suffix = " (active)"
            "#,
        )
        .unwrap();
        assert_eq!(config.logging.filter.as_deref(), Some("debug"));
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.pretty);
        assert_eq!(config.summary_options().running_suffix, " (active)");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Config::parse("[output]\nformat = \"yaml\"\n").is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Config::load(Some(Path::new("definitely/not/here/flowmeta.toml")));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }
}
