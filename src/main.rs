//! evaluar CLI
//!
//! Thin wrapper around the evaluation engine: loads configuration and data,
//! runs the orchestrator, writes one report per requested format.
//!
//! # Usage
//!
//! ```bash
//! # Run an evaluation
//! evaluar run config.yaml --data predictions.json --out reports/
//!
//! # Validate a config without running
//! evaluar validate config.yaml
//! ```

use clap::Parser;
use evaluar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
