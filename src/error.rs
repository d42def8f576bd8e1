//! Error types for the evaluation engine
//!
//! Structural and configuration errors abort a run before any report is
//! produced. Per-rule resolution issues and zero-denominator metrics are
//! recovered locally and surfaced in the rendered reports instead.

use thiserror::Error;

/// Fatal evaluation errors
#[derive(Debug, Error)]
pub enum Error {
    #[error("prediction/ground-truth shape mismatch: {predictions} predictions, {ground_truth} ground-truth labels (equal, non-zero lengths required)")]
    ShapeMismatch {
        predictions: usize,
        ground_truth: usize,
    },

    #[error("unknown metric: {0} (supported: accuracy, precision, recall, f1_score)")]
    UnknownMetric(String),

    #[error("unsupported alert condition: {0} (supported: <, <=, >, >=, ==, !=)")]
    UnsupportedCondition(String),

    #[error("unknown report format: {0} (supported: markdown, json, html)")]
    UnknownFormat(String),

    #[error("metrics_to_run must not be empty")]
    EmptyMetrics,

    #[error("reporting_formats must not be empty")]
    EmptyFormats,

    #[error("failed to parse run config: {0}")]
    ConfigParse(String),

    #[error("failed to parse data file: {0}")]
    DataParse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for evaluation operations
pub type Result<T> = std::result::Result<T, Error>;
