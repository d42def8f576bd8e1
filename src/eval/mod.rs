//! Confusion matrix accumulation and metric computation
//!
//! - `confusion`: label×label count matrix built once per run
//! - `metrics`: ordered metric report with per-class subtree
//!
//! Both stages are pure functions over already-materialized data; each
//! produces an immutable snapshot consumed by the next stage.

mod confusion;
mod metrics;

pub use confusion::ConfusionMatrix;
pub use metrics::{Average, ClassMetrics, MetricEntry, MetricKind, MetricReport, MetricValue};
