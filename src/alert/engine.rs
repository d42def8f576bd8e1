//! Alert evaluation against a computed metric report
//!
//! Each rule is evaluated independently in rule order. A metric path that
//! does not resolve is recorded as an unresolved, non-triggered evaluation
//! rather than aborting the run; the rendered report surfaces it as a
//! warning.

use super::rule::AlertRule;
use crate::eval::MetricReport;
use serde::{Serialize, Serializer};

/// Outcome of evaluating one alert rule
#[derive(Clone, Debug, Serialize)]
pub struct AlertEvaluation {
    pub rule: AlertRule,
    /// The value the rule's path resolved to; None when the path does not
    /// exist in the metric report.
    #[serde(serialize_with = "serialize_resolved")]
    pub resolved_value: Option<f64>,
    pub triggered: bool,
}

impl AlertEvaluation {
    /// Whether the rule's metric path failed to resolve
    pub fn is_unresolved(&self) -> bool {
        self.resolved_value.is_none()
    }
}

fn serialize_resolved<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => serializer.serialize_f64(*v),
        None => serializer.serialize_str("unresolved"),
    }
}

/// Evaluate all rules against the metric report, preserving rule order.
///
/// Infallible: unsupported conditions were rejected at validation time, and
/// unresolved paths degrade to non-triggered evaluations.
pub fn evaluate_rules(metrics: &MetricReport, rules: &[AlertRule]) -> Vec<AlertEvaluation> {
    rules
        .iter()
        .map(|rule| match metrics.resolve(&rule.metric_path) {
            Some(metric) => AlertEvaluation {
                rule: rule.clone(),
                resolved_value: Some(metric.value),
                triggered: rule.condition.holds(metric.value, rule.threshold),
            },
            None => AlertEvaluation {
                rule: rule.clone(),
                resolved_value: None,
                triggered: false,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::Condition;
    use crate::eval::{Average, ConfusionMatrix, MetricReport};

    fn rule(path: &str, condition: Condition, threshold: f64) -> AlertRule {
        AlertRule {
            metric_path: path.to_string(),
            condition,
            threshold,
        }
    }

    fn worked_example_report() -> MetricReport {
        // TP=14, FP=12, TN=11, FN=13
        let mut y_pred = Vec::new();
        let mut y_true = Vec::new();
        for (pred, truth, count) in [("1", "1", 14), ("1", "0", 12), ("0", "0", 11), ("0", "1", 13)]
        {
            for _ in 0..count {
                y_pred.push(pred);
                y_true.push(truth);
            }
        }
        let cm = ConfusionMatrix::accumulate(&y_pred, &y_true, Some("1")).unwrap();
        let names: Vec<String> = ["accuracy", "precision", "recall", "f1_score"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        MetricReport::compute(&cm, &names, Average::Macro).unwrap()
    }

    #[test]
    fn test_worked_example_rules_trigger() {
        let report = worked_example_report();
        let rules = vec![
            rule("accuracy", Condition::LessThan, 0.7),
            rule("precision", Condition::LessOrEqual, 0.6),
        ];

        let evaluations = evaluate_rules(&report, &rules);
        assert_eq!(evaluations.len(), 2);
        assert!(evaluations[0].triggered);
        assert!(evaluations[1].triggered);
        assert_eq!(evaluations[0].resolved_value, Some(0.5));
        assert_eq!(evaluations[1].resolved_value, Some(0.5384615384615384));
    }

    #[test]
    fn test_unresolved_path_does_not_trigger() {
        let report = worked_example_report();
        let rules = vec![rule("nonexistent.metric", Condition::LessThan, 0.5)];

        let evaluations = evaluate_rules(&report, &rules);
        assert_eq!(evaluations.len(), 1);
        assert!(evaluations[0].is_unresolved());
        assert!(!evaluations[0].triggered);
    }

    #[test]
    fn test_evaluation_order_matches_rule_order() {
        let report = worked_example_report();
        let rules = vec![
            rule("recall", Condition::GreaterThan, 0.9),
            rule("accuracy", Condition::LessThan, 0.7),
            rule("missing", Condition::Equal, 1.0),
            rule("f1_score", Condition::NotEqual, 0.0),
        ];

        let evaluations = evaluate_rules(&report, &rules);
        let paths: Vec<&str> = evaluations
            .iter()
            .map(|e| e.rule.metric_path.as_str())
            .collect();
        assert_eq!(paths, ["recall", "accuracy", "missing", "f1_score"]);
        assert!(!evaluations[0].triggered);
        assert!(evaluations[1].triggered);
        assert!(!evaluations[2].triggered);
        assert!(evaluations[3].triggered);
    }

    #[test]
    fn test_per_class_path_resolves() {
        let report = worked_example_report();
        let rules = vec![rule("per_class.1.precision", Condition::LessThan, 0.6)];

        let evaluations = evaluate_rules(&report, &rules);
        assert_eq!(evaluations[0].resolved_value, Some(0.5384615384615384));
        assert!(evaluations[0].triggered);
    }

    #[test]
    fn test_unresolved_serializes_as_sentinel() {
        let report = worked_example_report();
        let rules = vec![rule("missing", Condition::LessThan, 0.5)];
        let evaluations = evaluate_rules(&report, &rules);

        let json = serde_json::to_value(&evaluations[0]).unwrap();
        assert_eq!(json["resolved_value"], "unresolved");
        assert_eq!(json["triggered"], false);
    }
}
