//! Report rendering
//!
//! One rendering function per format; all formats carry the same semantic
//! content (run context echo, metric table in request order, alert table in
//! rule order, confusion matrix counts, visualization reference). Only the
//! serialization differs. Metric values are written with full float
//! precision in every format so documents stay content-equivalent.

use super::document::ReportDocument;
use super::format::ReportFormat;
use crate::alert::AlertEvaluation;
use crate::config::RunSpec;
use crate::eval::{ConfusionMatrix, MetricReport, MetricValue};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as FmtWrite;

/// Everything a renderer needs, as read-only snapshots.
#[derive(Clone, Copy)]
pub struct ReportInput<'a> {
    pub spec: &'a RunSpec,
    pub confusion: &'a ConfusionMatrix,
    pub metrics: &'a MetricReport,
    pub alerts: &'a [AlertEvaluation],
    /// File name of the confusion-matrix image produced by the plotting
    /// collaborator; referenced, never generated here.
    pub visualization_ref: &'a str,
    pub generated_at: DateTime<Utc>,
}

/// Render one report document in the requested format.
///
/// Pure: produces the document value; persistence belongs to the caller.
pub fn render(input: ReportInput<'_>, format: ReportFormat) -> ReportDocument {
    let content = match format {
        ReportFormat::Markdown => render_markdown(&input),
        ReportFormat::Json => render_json(&input),
        ReportFormat::Html => render_html(&input),
    };

    ReportDocument {
        format,
        file_name: format.file_name(&input.spec.run_name),
        content,
    }
}

fn title(spec: &RunSpec) -> String {
    format!("Evaluation Report: {}", spec.run_name)
}

fn metric_cell(value: MetricValue) -> String {
    value.value.to_string()
}

fn status_cell(value: MetricValue) -> &'static str {
    if value.undefined {
        "undefined (zero denominator)"
    } else {
        "ok"
    }
}

fn resolved_cell(evaluation: &AlertEvaluation) -> String {
    match evaluation.resolved_value {
        Some(v) => v.to_string(),
        None => "unresolved".to_string(),
    }
}

fn triggered_cell(evaluation: &AlertEvaluation) -> &'static str {
    if evaluation.triggered {
        "yes"
    } else {
        "no"
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct JsonReport<'a> {
    report_metadata: JsonMetadata,
    run_context: &'a RunSpec,
    confusion_matrix: ConfusionView<'a>,
    metrics: &'a MetricReport,
    alerts: &'a [AlertEvaluation],
    visualization: JsonVisualization<'a>,
}

#[derive(Serialize)]
struct JsonMetadata {
    title: String,
    generated_at: DateTime<Utc>,
    format: ReportFormat,
}

#[derive(Serialize)]
struct ConfusionView<'a> {
    labels: &'a [String],
    /// matrix[true_label][predicted_label] = count
    matrix: Vec<Vec<usize>>,
    positive_label: &'a str,
}

#[derive(Serialize)]
struct JsonVisualization<'a> {
    confusion_matrix_plot: &'a str,
}

fn render_json(input: &ReportInput<'_>) -> String {
    let cm = input.confusion;
    let matrix: Vec<Vec<usize>> = (0..cm.n_classes())
        .map(|i| (0..cm.n_classes()).map(|j| cm.get(i, j)).collect())
        .collect();

    let report = JsonReport {
        report_metadata: JsonMetadata {
            title: title(input.spec),
            generated_at: input.generated_at,
            format: ReportFormat::Json,
        },
        run_context: input.spec,
        confusion_matrix: ConfusionView {
            labels: cm.labels(),
            matrix,
            positive_label: cm.positive_label(),
        },
        metrics: input.metrics,
        alerts: input.alerts,
        visualization: JsonVisualization {
            confusion_matrix_plot: input.visualization_ref,
        },
    };

    // Serialization of these value types cannot fail.
    serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
}

// ---------------------------------------------------------------------------
// Markdown
// ---------------------------------------------------------------------------

fn render_markdown(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    let spec = input.spec;

    let _ = writeln!(out, "# {}", title(spec));
    let _ = writeln!(out);
    let _ = writeln!(out, "*Generated: {}*", input.generated_at.to_rfc3339());
    let _ = writeln!(out);

    let _ = writeln!(out, "## Run Context");
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Run Name**: `{}`", spec.run_name);
    let _ = writeln!(out, "- **Data Source**: `{}`", spec.data_source);
    let _ = writeln!(
        out,
        "- **Requested Metrics**: {}",
        spec.metrics_to_run.join(", ")
    );
    let _ = writeln!(
        out,
        "- **Report Formats**: {}",
        spec.reporting_formats.join(", ")
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## Metrics");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Metric | Value | Status |");
    let _ = writeln!(out, "|--------|-------|--------|");
    for entry in input.metrics.requested() {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            entry.name,
            metric_cell(entry.value),
            status_cell(entry.value)
        );
    }
    let _ = writeln!(out);

    if !input.metrics.per_class().is_empty() {
        let _ = writeln!(out, "### Per-Class Metrics");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Class | Precision | Recall | F1 | Support |");
        let _ = writeln!(out, "|-------|-----------|--------|----|---------|");
        for class in input.metrics.per_class() {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                class.label,
                metric_cell(class.precision),
                metric_cell(class.recall),
                metric_cell(class.f1),
                class.support
            );
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "## Alerts");
    let _ = writeln!(out);
    if input.alerts.is_empty() {
        let _ = writeln!(out, "No alert rules configured.");
    } else {
        let _ = writeln!(out, "| Metric Path | Condition | Threshold | Value | Triggered |");
        let _ = writeln!(out, "|-------------|-----------|-----------|-------|-----------|");
        for evaluation in input.alerts {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} |",
                evaluation.rule.metric_path,
                evaluation.rule.condition,
                evaluation.rule.threshold,
                resolved_cell(evaluation),
                triggered_cell(evaluation)
            );
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "## Confusion Matrix");
    let _ = writeln!(out);
    write_markdown_matrix(&mut out, input.confusion);
    let _ = writeln!(out);
    let _ = writeln!(out, "![Confusion Matrix]({})", input.visualization_ref);

    out
}

fn write_markdown_matrix(out: &mut String, cm: &ConfusionMatrix) {
    let _ = write!(out, "| true \\ pred |");
    for label in cm.labels() {
        let _ = write!(out, " {label} |");
    }
    let _ = writeln!(out);

    let _ = write!(out, "|---|");
    for _ in cm.labels() {
        let _ = write!(out, "---|");
    }
    let _ = writeln!(out);

    for (i, label) in cm.labels().iter().enumerate() {
        let _ = write!(out, "| {label} |");
        for j in 0..cm.n_classes() {
            let _ = write!(out, " {} |", cm.get(i, j));
        }
        let _ = writeln!(out);
    }
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

fn render_html(input: &ReportInput<'_>) -> String {
    let mut out = String::new();
    let spec = input.spec;

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"en\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "<meta charset=\"UTF-8\">");
    let _ = writeln!(out, "<title>{}</title>", escape_html(&title(spec)));
    let _ = writeln!(out, "<style>");
    let _ = writeln!(out, "body {{ font-family: sans-serif; margin: 20px; }}");
    let _ = writeln!(
        out,
        "table {{ border-collapse: collapse; margin-bottom: 20px; }}"
    );
    let _ = writeln!(
        out,
        "th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}"
    );
    let _ = writeln!(out, "th {{ background-color: #f2f2f2; }}");
    let _ = writeln!(out, "h1, h2 {{ color: #333; }}");
    let _ = writeln!(
        out,
        "img {{ max-width: 100%; height: auto; border: 1px solid #ddd; }}"
    );
    let _ = writeln!(out, "</style>");
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(&title(spec)));
    let _ = writeln!(
        out,
        "<p><em>Generated: {}</em></p>",
        input.generated_at.to_rfc3339()
    );

    let _ = writeln!(out, "<h2>Run Context</h2>");
    let _ = writeln!(out, "<table>");
    let _ = writeln!(
        out,
        "<tr><th>Run Name</th><td>{}</td></tr>",
        escape_html(&spec.run_name)
    );
    let _ = writeln!(
        out,
        "<tr><th>Data Source</th><td>{}</td></tr>",
        escape_html(&spec.data_source)
    );
    let _ = writeln!(
        out,
        "<tr><th>Requested Metrics</th><td>{}</td></tr>",
        escape_html(&spec.metrics_to_run.join(", "))
    );
    let _ = writeln!(
        out,
        "<tr><th>Report Formats</th><td>{}</td></tr>",
        escape_html(&spec.reporting_formats.join(", "))
    );
    let _ = writeln!(out, "</table>");

    let _ = writeln!(out, "<h2>Metrics</h2>");
    let _ = writeln!(out, "<table>");
    let _ = writeln!(out, "<tr><th>Metric</th><th>Value</th><th>Status</th></tr>");
    for entry in input.metrics.requested() {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&entry.name),
            metric_cell(entry.value),
            status_cell(entry.value)
        );
    }
    let _ = writeln!(out, "</table>");

    if !input.metrics.per_class().is_empty() {
        let _ = writeln!(out, "<h2>Per-Class Metrics</h2>");
        let _ = writeln!(out, "<table>");
        let _ = writeln!(
            out,
            "<tr><th>Class</th><th>Precision</th><th>Recall</th><th>F1</th><th>Support</th></tr>"
        );
        for class in input.metrics.per_class() {
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&class.label),
                metric_cell(class.precision),
                metric_cell(class.recall),
                metric_cell(class.f1),
                class.support
            );
        }
        let _ = writeln!(out, "</table>");
    }

    let _ = writeln!(out, "<h2>Alerts</h2>");
    if input.alerts.is_empty() {
        let _ = writeln!(out, "<p>No alert rules configured.</p>");
    } else {
        let _ = writeln!(out, "<table>");
        let _ = writeln!(
            out,
            "<tr><th>Metric Path</th><th>Condition</th><th>Threshold</th><th>Value</th><th>Triggered</th></tr>"
        );
        for evaluation in input.alerts {
            let _ = writeln!(
                out,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&evaluation.rule.metric_path),
                escape_html(evaluation.rule.condition.symbol()),
                evaluation.rule.threshold,
                resolved_cell(evaluation),
                triggered_cell(evaluation)
            );
        }
        let _ = writeln!(out, "</table>");
    }

    let _ = writeln!(out, "<h2>Confusion Matrix</h2>");
    let _ = writeln!(out, "<table>");
    let _ = write!(out, "<tr><th>true \\ pred</th>");
    for label in input.confusion.labels() {
        let _ = write!(out, "<th>{}</th>", escape_html(label));
    }
    let _ = writeln!(out, "</tr>");
    for (i, label) in input.confusion.labels().iter().enumerate() {
        let _ = write!(out, "<tr><th>{}</th>", escape_html(label));
        for j in 0..input.confusion.n_classes() {
            let _ = write!(out, "<td>{}</td>", input.confusion.get(i, j));
        }
        let _ = writeln!(out, "</tr>");
    }
    let _ = writeln!(out, "</table>");
    let _ = writeln!(
        out,
        "<img src=\"{}\" alt=\"Confusion Matrix\">",
        escape_html(input.visualization_ref)
    );

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    out
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
