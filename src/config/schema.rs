//! Run configuration schema
//!
//! The raw, serde-deserializable shape of a run configuration. Validation
//! into an executable plan happens once, at orchestration start, in
//! `crate::run::validate`.

use crate::eval::Average;
use serde::{Deserialize, Serialize};

/// Raw run configuration as loaded from YAML or JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSpec {
    /// Identifier for this run; also drives report and artifact file names
    pub run_name: String,

    /// Tag describing where predictions/labels came from
    pub data_source: String,

    /// Metric names to compute, in report order
    pub metrics_to_run: Vec<String>,

    /// Requested report formats: markdown, json, html
    pub reporting_formats: Vec<String>,

    /// Threshold rules checked against the computed metrics
    #[serde(default)]
    pub alert_rules: Vec<AlertRuleSpec>,

    /// Positive class for the binary view; defaults to the greatest observed
    /// label in sort order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positive_label: Option<String>,

    /// How per-class metrics combine in multi-class runs
    #[serde(default)]
    pub averaging: Average,
}

/// Raw alert rule as written in configuration
///
/// The condition stays a string here; it is parsed into a closed operator
/// enum during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRuleSpec {
    pub metric_path: String,
    pub condition: String,
    pub threshold: f64,
}
