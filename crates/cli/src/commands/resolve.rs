use std::path::Path;

use super::{print_json, read_json, RunContext};
use crate::error::CliError;

/// `flowmeta resolve <pages.json>`: pick linked records out of search pages,
/// then aggregate.
pub(crate) fn cmd_resolve(file: &Path, ctx: &RunContext) -> Result<(), CliError> {
    let doc = read_json(file)?;
    let metadata = flowmeta_core::metadata_from_pages_json(&doc)?;
    tracing::info!(
        element_instance_key = %metadata.element_instance_key,
        element_type = %metadata.element_type,
        "resolved linked records"
    );
    print_json(&metadata, ctx.pretty)
}
