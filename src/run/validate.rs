//! Run configuration validation
//!
//! Validates a raw `RunSpec` into an executable plan before any computation
//! starts. Fail-fast: a bad spec produces zero reports and no partial side
//! effects.

use crate::alert::AlertRule;
use crate::config::RunSpec;
use crate::error::{Error, Result};
use crate::report::ReportFormat;

/// A validated run plan: formats and conditions parsed into their closed
/// enums, ready for execution.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub formats: Vec<ReportFormat>,
    pub rules: Vec<AlertRule>,
}

/// Validate a run spec.
///
/// Checks:
/// - `metrics_to_run` is non-empty
/// - `reporting_formats` is a non-empty subset of the supported formats
/// - every alert rule condition parses
///
/// Unknown metric names are left to the metrics engine, which rejects them
/// atomically before any report is produced.
pub fn validate(spec: &RunSpec) -> Result<RunPlan> {
    if spec.metrics_to_run.is_empty() {
        return Err(Error::EmptyMetrics);
    }

    if spec.reporting_formats.is_empty() {
        return Err(Error::EmptyFormats);
    }

    let formats = spec
        .reporting_formats
        .iter()
        .map(|f| f.parse::<ReportFormat>())
        .collect::<Result<Vec<_>>>()?;

    let rules = spec
        .alert_rules
        .iter()
        .map(|rule| {
            Ok(AlertRule {
                metric_path: rule.metric_path.clone(),
                condition: rule.condition.parse()?,
                threshold: rule.threshold,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(RunPlan { formats, rules })
}
