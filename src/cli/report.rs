//! Chart path validation and user-facing failure messages

use crate::error::{VisualizerError, VisualizerResult};
use std::path::Path;

/// Reject chart paths that are not existing directories
pub fn validate_chart_path(chart: &Path) -> VisualizerResult<()> {
    if chart.is_dir() {
        Ok(())
    } else {
        Err(VisualizerError::InvalidChartPath(chart.to_path_buf()))
    }
}

/// Prefix and message printed to stderr when a run fails
///
/// Helm failures show helm's own stderr; everything else is shown through
/// its `Display` text.
pub fn failure_message(err: &VisualizerError) -> (&'static str, String) {
    match err {
        VisualizerError::HelmFailed { stderr, .. } => ("Helm error:", stderr.clone()),
        VisualizerError::InvalidChartPath(path) => {
            ("Invalid chart path:", path.display().to_string())
        }
        other => ("Error:", other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinkError;

    #[test]
    fn test_directory_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        assert!(validate_chart_path(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-chart");

        let err = validate_chart_path(&missing).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidChartPath(ref p) if p == &missing));
    }

    #[test]
    fn test_plain_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = validate_chart_path(file.path()).unwrap_err();
        assert!(matches!(err, VisualizerError::InvalidChartPath(_)));
    }

    #[test]
    fn test_invalid_path_message() {
        let err = VisualizerError::InvalidChartPath("charts/missing".into());
        let (prefix, message) = failure_message(&err);
        assert_eq!(prefix, "Invalid chart path:");
        assert_eq!(message, "charts/missing");
    }

    #[cfg(unix)]
    #[test]
    fn test_helm_failure_shows_only_stderr() {
        use std::os::unix::process::ExitStatusExt;

        let err = VisualizerError::HelmFailed {
            status: std::process::ExitStatus::from_raw(1 << 8),
            stderr: "Error: Chart.yaml file is missing".to_string(),
        };
        let (prefix, message) = failure_message(&err);
        assert_eq!(prefix, "Helm error:");
        assert_eq!(message, "Error: Chart.yaml file is missing");
    }

    #[test]
    fn test_other_failures_use_display_text() {
        let err = VisualizerError::from(LinkError::MissingReferenceName {
            deployment: "web".to_string(),
            reference: "configMapKeyRef".to_string(),
        });
        let (prefix, message) = failure_message(&err);
        assert_eq!(prefix, "Error:");
        assert_eq!(
            message,
            "Deployment 'web' has a configMapKeyRef without a 'name' field"
        );
    }

    #[test]
    fn test_timeout_message() {
        let (prefix, message) = failure_message(&VisualizerError::HelmTimeout { seconds: 5 });
        assert_eq!(prefix, "Error:");
        assert_eq!(message, "helm did not finish within 5s");
    }
}
