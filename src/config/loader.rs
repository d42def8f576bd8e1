//! Run configuration loading
//!
//! Configs are written as YAML or JSON; the file extension decides the
//! parser, with YAML as the default.

use super::schema::RunSpec;
use crate::error::{Error, Result};
use std::path::Path;

/// Parse a run spec from YAML text
pub fn from_yaml_str(text: &str) -> Result<RunSpec> {
    serde_yaml::from_str(text).map_err(|e| Error::ConfigParse(e.to_string()))
}

/// Parse a run spec from JSON text
pub fn from_json_str(text: &str) -> Result<RunSpec> {
    serde_json::from_str(text).map_err(|e| Error::ConfigParse(e.to_string()))
}

/// Load a run spec from a file, picking the parser by extension
pub fn from_path(path: &Path) -> Result<RunSpec> {
    let text = std::fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json_str(&text),
        _ => from_yaml_str(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_and_json_agree() {
        let yaml = r#"
run_name: r
data_source: synthetic
metrics_to_run: [accuracy]
reporting_formats: [json]
"#;
        let json = r#"{
            "run_name": "r",
            "data_source": "synthetic",
            "metrics_to_run": ["accuracy"],
            "reporting_formats": ["json"]
        }"#;

        let from_yaml = from_yaml_str(yaml).unwrap();
        let from_json = from_json_str(json).unwrap();
        assert_eq!(from_yaml.run_name, from_json.run_name);
        assert_eq!(from_yaml.metrics_to_run, from_json.metrics_to_run);
    }

    #[test]
    fn test_malformed_config_fails() {
        let err = from_yaml_str("run_name: [not: a: string").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }
}
