mod commands;
mod config;
mod error;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use crate::commands::RunContext;
use crate::config::Config;

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Element instance metadata for process-instance views.
#[derive(Parser)]
#[command(
    name = "flowmeta",
    version,
    about = "Element instance metadata for process-instance views"
)]
struct Cli {
    /// Output format (text or json); defaults to the config file, then text
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to a flowmeta.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate an element instance and its linked records into metadata JSON
    Build {
        /// Path to the metadata sources JSON file
        file: PathBuf,
    },

    /// Show the popover summary rows for an element instance
    Summary {
        /// Path to the metadata sources JSON file
        file: PathBuf,
        /// Reference time for running elements (RFC 3339); defaults to now
        #[arg(long)]
        now: Option<String>,
    },

    /// Pick linked records out of search pages, then aggregate
    Resolve {
        /// Path to the linked pages JSON file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            report_error(&e.to_string(), cli.output.unwrap_or(OutputFormat::Text), cli.quiet);
            process::exit(1);
        }
    };

    logging::init(config.logging.filter.as_deref(), cli.quiet);

    let ctx = RunContext {
        output: cli
            .output
            .or(config.output.format)
            .unwrap_or(OutputFormat::Text),
        pretty: config.output.pretty,
        summary: config.summary_options(),
    };

    let result = match &cli.command {
        Commands::Build { file } => commands::build::cmd_build(file, &ctx),
        Commands::Summary { file, now } => {
            commands::summary::cmd_summary(file, now.as_deref(), &ctx)
        }
        Commands::Resolve { file } => commands::resolve::cmd_resolve(file, &ctx),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        report_error(&e.to_string(), ctx.output, cli.quiet);
        process::exit(1);
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    match output {
        OutputFormat::Text => {
            if !quiet {
                eprintln!("{}", msg);
            }
        }
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}
