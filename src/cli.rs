//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! auditar run --model model.json --dataset data.csv
//! auditar run --model model.json --dataset data.csv --check "Bias Check" --check "Privacy Scan"
//! auditar validate --model model.json --dataset data.csv
//! auditar checks
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Auditar: Compliance Audit Engine for trained predictive models
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "auditar")]
#[command(version)]
#[command(about = "Audits a trained model against a labeled dataset and reports compliance")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run an audit and print the report
    Run(RunArgs),

    /// Load the inputs and show the adapter view without running checks
    Validate(ValidateArgs),

    /// List the available check names
    Checks,
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to the model blob (json/yaml)
    #[arg(short, long, value_name = "MODEL")]
    pub model: PathBuf,

    /// Path to the dataset (csv/json)
    #[arg(short, long, value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Model name for the report (defaults to the blob metadata)
    #[arg(long)]
    pub name: Option<String>,

    /// Model description for the report (defaults to the blob metadata)
    #[arg(long)]
    pub description: Option<String>,

    /// Check display name to run; repeat for multiple. Defaults to all
    /// checks when omitted
    #[arg(short, long = "check", value_name = "NAME")]
    pub checks: Vec<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to the model blob (json/yaml)
    #[arg(short, long, value_name = "MODEL")]
    pub model: PathBuf,

    /// Path to the dataset (csv/json)
    #[arg(short, long, value_name = "DATASET")]
    pub dataset: PathBuf,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {s}. Valid formats: text, json")),
        }
    }
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
