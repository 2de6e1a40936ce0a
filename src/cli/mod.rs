//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod formatters;
pub mod output;

pub use commands::Commands;
pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "janitor",
    version,
    about = "Find stale applications in a Cloud Foundry space",
    propagate_version = true
)]
pub struct Cli {
    /// Emit JSON on stdout (shorthand for --format json)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Output format: human, plain, json, jsonl
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a config file (default: <config dir>/janitor/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Output format requested on the command line, if any.
    #[must_use]
    pub const fn output_format(&self) -> Option<OutputFormat> {
        if self.robot {
            Some(OutputFormat::Json)
        } else {
            self.format
        }
    }

    /// Whether errors should be reported as JSON.
    #[must_use]
    pub const fn wants_json(&self) -> bool {
        matches!(self.output_format(), Some(format) if format.is_json())
    }
}
