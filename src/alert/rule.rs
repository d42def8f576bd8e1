//! Alert rule definitions
//!
//! A rule compares a resolved metric value against a threshold. The condition
//! grammar is a closed set of comparison operators, parsed once at
//! configuration-validation time rather than re-parsed per evaluation.

use crate::error::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Comparison operator for alert rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
    Equal,
    NotEqual,
}

impl Condition {
    /// The operator symbol as written in configuration
    pub fn symbol(&self) -> &'static str {
        match self {
            Condition::LessThan => "<",
            Condition::LessOrEqual => "<=",
            Condition::GreaterThan => ">",
            Condition::GreaterOrEqual => ">=",
            Condition::Equal => "==",
            Condition::NotEqual => "!=",
        }
    }

    /// Evaluate `actual <condition> threshold`
    #[allow(clippy::float_cmp)]
    pub fn holds(&self, actual: f64, threshold: f64) -> bool {
        match self {
            Condition::LessThan => actual < threshold,
            Condition::LessOrEqual => actual <= threshold,
            Condition::GreaterThan => actual > threshold,
            Condition::GreaterOrEqual => actual >= threshold,
            Condition::Equal => actual == threshold,
            Condition::NotEqual => actual != threshold,
        }
    }
}

impl FromStr for Condition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "<" => Ok(Condition::LessThan),
            "<=" => Ok(Condition::LessOrEqual),
            ">" => Ok(Condition::GreaterThan),
            ">=" => Ok(Condition::GreaterOrEqual),
            "==" => Ok(Condition::Equal),
            "!=" => Ok(Condition::NotEqual),
            other => Err(Error::UnsupportedCondition(other.to_string())),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// A validated alert rule
#[derive(Clone, Debug, Serialize)]
pub struct AlertRule {
    /// Dot-separated path into the metric report
    pub metric_path: String,
    pub condition: Condition,
    pub threshold: f64,
}

impl fmt::Display for AlertRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.metric_path, self.condition, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_parse_roundtrip() {
        for symbol in ["<", "<=", ">", ">=", "==", "!="] {
            let condition: Condition = symbol.parse().unwrap();
            assert_eq!(condition.symbol(), symbol);
        }
    }

    #[test]
    fn test_unsupported_condition() {
        let err = "~=".parse::<Condition>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedCondition(op) if op == "~="));
    }

    #[test]
    fn test_condition_holds() {
        assert!(Condition::LessThan.holds(0.5, 0.7));
        assert!(!Condition::LessThan.holds(0.7, 0.7));
        assert!(Condition::LessOrEqual.holds(0.7, 0.7));
        assert!(Condition::GreaterThan.holds(0.8, 0.7));
        assert!(Condition::GreaterOrEqual.holds(0.7, 0.7));
        assert!(Condition::Equal.holds(0.5, 0.5));
        assert!(Condition::NotEqual.holds(0.5, 0.6));
    }

    #[test]
    fn test_rule_display() {
        let rule = AlertRule {
            metric_path: "accuracy".to_string(),
            condition: Condition::LessThan,
            threshold: 0.7,
        };
        assert_eq!(format!("{rule}"), "accuracy < 0.7");
    }
}
