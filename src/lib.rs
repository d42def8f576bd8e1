//! evaluar: metrics & alerting evaluation engine
//!
//! Evaluates classifier predictions against ground truth, computes standard
//! metrics, checks threshold-based alert rules, and renders deterministic
//! reports in markdown, JSON, and HTML.
//!
//! ## Architecture
//!
//! Data flows strictly forward through immutable snapshots:
//!
//! labels → [`eval::ConfusionMatrix`] → [`eval::MetricReport`] →
//! [`alert::AlertEvaluation`] → [`report::ReportDocument`]
//!
//! - `eval`: confusion matrix accumulation and metric computation
//! - `alert`: threshold rules over dot-separated metric paths
//! - `report`: multi-format rendering with identical semantic content
//! - `run`: validation and orchestration of a single run
//! - `config`: run configuration schema and loading
//! - `cli`: thin command-line wrapper (the only file I/O)
//!
//! ## Example
//!
//! ```ignore
//! use evaluar::{config::RunSpec, run};
//!
//! let spec: RunSpec = evaluar::config::from_yaml_str(yaml)?;
//! let output = run::run(&spec, &predictions, &ground_truths)?;
//! for doc in &output.reports {
//!     println!("{}: {} bytes", doc.file_name, doc.content.len());
//! }
//! ```

pub mod alert;
pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod report;
pub mod run;
pub mod viz;

pub use error::{Error, Result};
