//! CLI command handlers
//!
//! The CLI is a thin wrapper: it loads configuration and data, invokes the
//! orchestrator, and persists the resulting documents. All evaluation logic
//! lives in the library.

use super::data::load_labels;
use super::logging::{log, warn, LogLevel};
use crate::config;
use crate::error::Result;
use crate::run;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Evaluate classifier predictions, check alert thresholds, emit reports
#[derive(Parser)]
#[command(name = "evaluar", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress informational output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Show per-stage detail
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run an evaluation and write one report per requested format
    Run {
        /// Run configuration (YAML or JSON)
        config: PathBuf,

        /// Data file with predictions and ground truths (JSON)
        #[arg(long)]
        data: PathBuf,

        /// Directory to write reports into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Validate a run configuration without executing it
    Validate {
        /// Run configuration (YAML or JSON)
        config: PathBuf,
    },
}

/// Execute the parsed CLI command
pub fn run_command(cli: Cli) -> Result<()> {
    let level = LogLevel::from_flags(cli.quiet, cli.verbose);

    match cli.command {
        Command::Run { config, data, out } => cmd_run(&config, &data, &out, level),
        Command::Validate { config } => cmd_validate(&config, level),
    }
}

fn cmd_validate(config_path: &PathBuf, level: LogLevel) -> Result<()> {
    let spec = config::from_path(config_path)?;
    run::validate(&spec)?;
    log(level, LogLevel::Normal, &format!("config ok: {}", spec.run_name));
    Ok(())
}

fn cmd_run(config_path: &PathBuf, data_path: &PathBuf, out: &PathBuf, level: LogLevel) -> Result<()> {
    let spec = config::from_path(config_path)?;
    let (y_pred, y_true) = load_labels(data_path)?;

    log(
        level,
        LogLevel::Verbose,
        &format!("evaluating {} samples for run '{}'", y_pred.len(), spec.run_name),
    );

    let output = run::run(&spec, &y_pred, &y_true)?;

    for evaluation in &output.alerts {
        if evaluation.triggered {
            warn(&format!("alert triggered: {}", evaluation.rule));
        } else if evaluation.is_unresolved() {
            warn(&format!(
                "alert rule path did not resolve: {}",
                evaluation.rule.metric_path
            ));
        }
    }

    std::fs::create_dir_all(out)?;
    for doc in &output.reports {
        let path = out.join(&doc.file_name);
        std::fs::write(&path, &doc.content)?;
        log(
            level,
            LogLevel::Normal,
            &format!("wrote {}", path.display()),
        );
    }

    Ok(())
}
