//! Auditar CLI
//!
//! Command-line entry point for the auditar library.
//!
//! # Usage
//!
//! ```bash
//! # Audit with all checks
//! auditar run --model model.json --dataset data.csv
//!
//! # Audit with selected checks, JSON output
//! auditar run --model model.json --dataset data.csv \
//!     --check "Bias Check" --check "Privacy Scan" --format json
//!
//! # Inspect the adapter view without running checks
//! auditar validate --model model.json --dataset data.csv
//!
//! # List available checks
//! auditar checks
//! ```

use auditar::audit::{AuditContext, CheckKind};
use auditar::cli::{Cli, Command, OutputFormat, RunArgs, ValidateArgs};
use auditar::data::load_dataset;
use auditar::model::load_model;
use auditar::run::{run_audit, AuditSpec};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    let result = match cli.command {
        Command::Run(args) => cmd_run(args, log_level),
        Command::Validate(args) => cmd_validate(args, log_level),
        Command::Checks => cmd_checks(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        println!("{msg}");
    }
}

fn cmd_run(args: RunArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Auditing {} against {}",
            args.model.display(),
            args.dataset.display()
        ),
    );

    // No selection means every registered check
    let checks = if args.checks.is_empty() {
        CheckKind::all()
            .iter()
            .map(|k| k.display_name().to_string())
            .collect()
    } else {
        for name in &args.checks {
            if CheckKind::from_display_name(name).is_none() {
                log(
                    level,
                    LogLevel::Verbose,
                    &format!("Skipping unknown check: {name}"),
                );
            }
        }
        args.checks.clone()
    };

    let spec = AuditSpec {
        model: args.model,
        dataset: args.dataset,
        model_name: args.name,
        model_description: args.description,
        checks,
    };
    let report = run_audit(&spec).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    let model = load_model(&args.model).map_err(|e| e.to_string())?;
    let dataset = load_dataset(&args.dataset).map_err(|e| e.to_string())?;

    log(
        level,
        LogLevel::Normal,
        &format!("Model: {}", model.metadata.name),
    );
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Dataset: {} rows, {} columns",
            dataset.n_rows(),
            dataset.columns().len()
        ),
    );

    let ctx = AuditContext::from_parts(&model, dataset).map_err(|e| e.to_string())?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Sensitive attribute: {}",
            if ctx.sensitive().is_some() {
                "present"
            } else {
                "absent"
            }
        ),
    );
    log(level, LogLevel::Normal, "Inputs are valid");

    Ok(())
}

fn cmd_checks() -> Result<(), String> {
    for kind in CheckKind::all() {
        println!("{}", kind.display_name());
    }
    Ok(())
}
