//! Run orchestration
//!
//! Wires accumulation → metrics → alerts → rendering around one validated
//! run spec. Structural errors abort before any report exists; per-rule
//! resolution issues and zero-denominator metrics flow through as report
//! data. This is the only layer that may summarize a stage failure for the
//! caller; inner stages propagate their own errors.

use super::validate::{validate, RunPlan};
use crate::alert::{evaluate_rules, AlertEvaluation};
use crate::config::RunSpec;
use crate::error::Result;
use crate::eval::{ConfusionMatrix, MetricReport};
use crate::report::{render, ReportDocument, ReportFormat, ReportInput};
use crate::viz;
use chrono::Utc;

/// The immutable outcome of a run: one document per requested format plus
/// the intermediate snapshots, for callers that post-process them.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub reports: Vec<ReportDocument>,
    pub confusion: ConfusionMatrix,
    pub metrics: MetricReport,
    pub alerts: Vec<AlertEvaluation>,
}

impl RunOutput {
    /// The document rendered for a given format, if it was requested
    pub fn report_for(&self, format: ReportFormat) -> Option<&ReportDocument> {
        self.reports.iter().find(|d| d.format == format)
    }

    /// Alert evaluations that fired
    pub fn triggered_alerts(&self) -> impl Iterator<Item = &AlertEvaluation> {
        self.alerts.iter().filter(|a| a.triggered)
    }
}

/// Execute a full evaluation run.
///
/// The visualization artifact is referenced by the shared naming convention
/// (`<run_name>_confusion_matrix.png`); the image itself is the plotting
/// collaborator's job.
pub fn run<S: AsRef<str>>(spec: &RunSpec, y_pred: &[S], y_true: &[S]) -> Result<RunOutput> {
    let viz_ref = viz::plot_artifact_name(&spec.run_name);
    run_with_artifact(spec, y_pred, y_true, &viz_ref)
}

/// Execute a run with an externally supplied visualization reference, for
/// callers whose plotting collaborator names artifacts differently.
pub fn run_with_artifact<S: AsRef<str>>(
    spec: &RunSpec,
    y_pred: &[S],
    y_true: &[S],
    visualization_ref: &str,
) -> Result<RunOutput> {
    // Fail fast on configuration problems, before touching the data.
    let RunPlan { formats, rules } = validate(spec)?;

    let confusion = ConfusionMatrix::accumulate(y_pred, y_true, spec.positive_label.as_deref())?;
    let metrics = MetricReport::compute(&confusion, &spec.metrics_to_run, spec.averaging)?;
    let alerts = evaluate_rules(&metrics, &rules);

    let generated_at = Utc::now();
    let input = ReportInput {
        spec,
        confusion: &confusion,
        metrics: &metrics,
        alerts: &alerts,
        visualization_ref,
        generated_at,
    };

    let reports = formats.iter().map(|&format| render(input, format)).collect();

    Ok(RunOutput {
        reports,
        confusion,
        metrics,
        alerts,
    })
}
