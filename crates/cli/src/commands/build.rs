use std::path::Path;

use super::{print_json, read_json, RunContext};
use crate::error::CliError;

/// `flowmeta build <sources.json>`: aggregate already selected records.
pub(crate) fn cmd_build(file: &Path, ctx: &RunContext) -> Result<(), CliError> {
    let doc = read_json(file)?;
    let metadata = flowmeta_core::metadata_from_sources_json(&doc)?;
    tracing::info!(
        element_instance_key = %metadata.element_instance_key,
        "built instance metadata"
    );
    print_json(&metadata, ctx.pretty)
}
