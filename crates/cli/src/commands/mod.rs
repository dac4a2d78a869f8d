pub(crate) mod build;
pub(crate) mod resolve;
pub(crate) mod summary;

use std::path::Path;

use flowmeta_core::SummaryOptions;
use serde::Serialize;
use serde_json::Value;

use crate::error::CliError;
use crate::OutputFormat;

/// Settings resolved from flags and config, shared by every subcommand.
#[derive(Debug, Clone)]
pub(crate) struct RunContext {
    pub output: OutputFormat,
    pub pretty: bool,
    pub summary: SummaryOptions,
}

pub(crate) fn read_json(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), CliError> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
