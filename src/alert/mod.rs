//! Threshold-based alerting over computed metrics
//!
//! Rules are validated (condition parsed) before any computation starts and
//! evaluated independently in rule order after metrics are computed.

mod engine;
mod rule;

pub use engine::{evaluate_rules, AlertEvaluation};
pub use rule::{AlertRule, Condition};
