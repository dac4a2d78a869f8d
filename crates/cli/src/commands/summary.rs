use std::path::Path;

use flowmeta_core::duration::parse_timestamp;
use flowmeta_core::MetadataSummary;
use time::OffsetDateTime;

use super::{print_json, read_json, RunContext};
use crate::error::CliError;
use crate::OutputFormat;

/// `flowmeta summary <sources.json> [--now <timestamp>]`: the popover's
/// headline rows.
pub(crate) fn cmd_summary(
    file: &Path,
    now: Option<&str>,
    ctx: &RunContext,
) -> Result<(), CliError> {
    let now = match now {
        Some(raw) => parse_timestamp(raw)?,
        None => OffsetDateTime::now_utc(),
    };

    let doc = read_json(file)?;
    let metadata = flowmeta_core::metadata_from_sources_json(&doc)?;
    let summary = MetadataSummary::from_metadata(&metadata, now, &ctx.summary);

    match ctx.output {
        OutputFormat::Json => print_json(&summary, ctx.pretty),
        OutputFormat::Text => {
            print!("{}", render_rows(&summary));
            Ok(())
        }
    }
}

fn render_rows(summary: &MetadataSummary) -> String {
    let rows = summary.rows();
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<width$}  {}\n", label, value, width = width));
    }
    out
}
