//! Visualization artifact naming convention
//!
//! The engine never renders images; it only references them. The plotting
//! collaborator derives the same name from the run name, so the two agree
//! without coupling.

/// Confusion-matrix plot file name for a run: `<run_name>_confusion_matrix.png`
pub fn plot_artifact_name(run_name: &str) -> String {
    format!("{run_name}_confusion_matrix.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_artifact_name() {
        assert_eq!(
            plot_artifact_name("basic_accuracy_test_run"),
            "basic_accuracy_test_run_confusion_matrix.png"
        );
    }
}
