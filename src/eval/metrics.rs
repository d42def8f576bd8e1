//! Metric computation over a confusion matrix
//!
//! Produces an ordered metric report mirroring the requested metric list,
//! with a per-class subtree for rule paths like `per_class.<label>.precision`.
//! Zero-denominator metrics are defined as 0.0 and flagged undefined instead
//! of propagating NaN into downstream arithmetic.

use super::confusion::ConfusionMatrix;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported classification metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Fraction of correctly classified samples
    Accuracy,
    /// TP / (TP + FP)
    Precision,
    /// TP / (TP + FN)
    Recall,
    /// Harmonic mean of precision and recall
    F1,
}

impl MetricKind {
    /// Metric name as it appears in configuration and reports
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Accuracy => "accuracy",
            MetricKind::Precision => "precision",
            MetricKind::Recall => "recall",
            MetricKind::F1 => "f1_score",
        }
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accuracy" => Ok(MetricKind::Accuracy),
            "precision" => Ok(MetricKind::Precision),
            "recall" => Ok(MetricKind::Recall),
            "f1_score" => Ok(MetricKind::F1),
            other => Err(Error::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Averaging strategy for combining per-class metrics in multi-class runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Average {
    /// Unweighted mean across classes
    #[default]
    Macro,
    /// Mean weighted by per-class support
    Weighted,
}

/// A computed metric value in [0, 1]
///
/// `undefined` marks a zero-denominator case; the value is then 0.0 by
/// definition so downstream arithmetic never sees NaN.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: f64,
    pub undefined: bool,
}

impl MetricValue {
    fn defined(value: f64) -> Self {
        Self {
            value,
            undefined: false,
        }
    }

    fn ratio(numerator: f64, denominator: f64) -> Self {
        if denominator > 0.0 {
            Self::defined(numerator / denominator)
        } else {
            Self {
                value: 0.0,
                undefined: true,
            }
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.undefined {
            write!(f, "{} (undefined)", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

/// One requested metric in the report, in request order
#[derive(Clone, Debug, Serialize)]
pub struct MetricEntry {
    pub name: String,
    #[serde(flatten)]
    pub value: MetricValue,
}

/// Per-class precision/recall/f1 for the nested report subtree
#[derive(Clone, Debug, Serialize)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: MetricValue,
    pub recall: MetricValue,
    #[serde(rename = "f1_score")]
    pub f1: MetricValue,
    pub support: usize,
}

impl ClassMetrics {
    fn from_matrix(cm: &ConfusionMatrix, class: usize) -> Self {
        let tp = cm.true_positives(class) as f64;
        let fp = cm.false_positives(class) as f64;
        let fn_ = cm.false_negatives(class) as f64;

        let precision = MetricValue::ratio(tp, tp + fp);
        let recall = MetricValue::ratio(tp, tp + fn_);
        let f1 = f1_from(precision, recall);

        Self {
            label: cm.labels()[class].clone(),
            precision,
            recall,
            f1,
            support: cm.support(class),
        }
    }

    fn get(&self, metric: MetricKind) -> Option<MetricValue> {
        match metric {
            MetricKind::Precision => Some(self.precision),
            MetricKind::Recall => Some(self.recall),
            MetricKind::F1 => Some(self.f1),
            MetricKind::Accuracy => None,
        }
    }
}

fn f1_from(precision: MetricValue, recall: MetricValue) -> MetricValue {
    let (p, r) = (precision.value, recall.value);
    if p + r > 0.0 {
        MetricValue {
            value: 2.0 * p * r / (p + r),
            undefined: precision.undefined || recall.undefined,
        }
    } else {
        MetricValue {
            value: 0.0,
            undefined: true,
        }
    }
}

/// Ordered metric report: the MetricResult tree
///
/// `requested` mirrors `metrics_to_run` exactly; `per_class` holds the
/// nested subtree addressable as `per_class.<label>.<metric>`.
#[derive(Clone, Debug, Serialize)]
pub struct MetricReport {
    requested: Vec<MetricEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    per_class: Vec<ClassMetrics>,
}

impl MetricReport {
    /// Compute the requested metrics from a confusion matrix.
    ///
    /// Fails atomically with `UnknownMetric` on the first unrecognized name;
    /// no partial report is returned. Output order mirrors `metrics_to_run`.
    pub fn compute(cm: &ConfusionMatrix, metrics_to_run: &[String], average: Average) -> Result<Self> {
        let kinds = metrics_to_run
            .iter()
            .map(|name| MetricKind::from_str(name))
            .collect::<Result<Vec<_>>>()?;

        let per_class: Vec<ClassMetrics> = (0..cm.n_classes())
            .map(|class| ClassMetrics::from_matrix(cm, class))
            .collect();

        let requested = kinds
            .iter()
            .map(|&kind| MetricEntry {
                name: kind.name().to_string(),
                value: top_level_value(cm, &per_class, kind, average),
            })
            .collect();

        Ok(Self {
            requested,
            per_class,
        })
    }

    /// Requested metrics in request order
    pub fn requested(&self) -> &[MetricEntry] {
        &self.requested
    }

    /// Per-class subtree (one entry per observed label)
    pub fn per_class(&self) -> &[ClassMetrics] {
        &self.per_class
    }

    /// Look up a top-level metric by name
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.requested
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.value)
    }

    /// Resolve a dot-separated metric path against the tree.
    ///
    /// `accuracy` resolves at the top level; `per_class.<label>.<metric>`
    /// resolves into the per-class subtree. Returns None for any path that
    /// does not exist.
    pub fn resolve(&self, path: &str) -> Option<MetricValue> {
        let segments: Vec<&str> = path.split('.').collect();
        match segments.as_slice() {
            [name] => self.get(name),
            ["per_class", label, metric] => {
                let kind = MetricKind::from_str(metric).ok()?;
                self.per_class
                    .iter()
                    .find(|c| c.label == *label)
                    .and_then(|c| c.get(kind))
            }
            _ => None,
        }
    }

    /// Whether any requested or per-class value carries the undefined flag
    pub fn has_undefined(&self) -> bool {
        self.requested.iter().any(|e| e.value.undefined)
    }
}

fn top_level_value(
    cm: &ConfusionMatrix,
    per_class: &[ClassMetrics],
    kind: MetricKind,
    average: Average,
) -> MetricValue {
    match kind {
        MetricKind::Accuracy => MetricValue::ratio(cm.correct() as f64, cm.total() as f64),
        MetricKind::Precision | MetricKind::Recall | MetricKind::F1 => {
            if cm.is_binary() {
                // Binary view: report the positive class directly.
                per_class[cm.positive_index()]
                    .get(kind)
                    .unwrap_or(MetricValue {
                        value: 0.0,
                        undefined: true,
                    })
            } else {
                average_classes(per_class, kind, average)
            }
        }
    }
}

fn average_classes(per_class: &[ClassMetrics], kind: MetricKind, average: Average) -> MetricValue {
    let values: Vec<MetricValue> = per_class.iter().filter_map(|c| c.get(kind)).collect();
    if values.is_empty() {
        return MetricValue {
            value: 0.0,
            undefined: true,
        };
    }

    // An averaged value that absorbed a zero-denominator placeholder is
    // itself flagged undefined.
    let undefined = values.iter().any(|v| v.undefined);

    let value = match average {
        Average::Macro => values.iter().map(|v| v.value).sum::<f64>() / values.len() as f64,
        Average::Weighted => {
            let total_support: usize = per_class.iter().map(|c| c.support).sum();
            if total_support == 0 {
                return MetricValue {
                    value: 0.0,
                    undefined: true,
                };
            }
            values
                .iter()
                .zip(per_class.iter())
                .map(|(v, c)| v.value * c.support as f64)
                .sum::<f64>()
                / total_support as f64
        }
    };

    MetricValue { value, undefined }
}
