//! Data file loading for the CLI
//!
//! Expects a JSON object with `predictions` and `ground_truths` arrays.
//! Labels may be JSON strings, integers, or booleans; everything is carried
//! as a string label into the engine.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Deserialize)]
struct DataFile {
    predictions: Vec<Value>,
    ground_truths: Vec<Value>,
}

fn label_of(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::DataParse(format!(
            "labels must be strings, numbers, or booleans, got: {other}"
        ))),
    }
}

/// Load (predictions, ground_truths) label sequences from a JSON file
pub fn load_labels(path: &Path) -> Result<(Vec<String>, Vec<String>)> {
    let text = std::fs::read_to_string(path)?;
    let data: DataFile =
        serde_json::from_str(&text).map_err(|e| Error::DataParse(e.to_string()))?;

    let predictions = data
        .predictions
        .iter()
        .map(label_of)
        .collect::<Result<Vec<_>>>()?;
    let ground_truths = data
        .ground_truths
        .iter()
        .map(label_of)
        .collect::<Result<Vec<_>>>()?;

    Ok((predictions, ground_truths))
}
