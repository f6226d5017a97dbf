//! Error types for the visualizer pipeline

use std::path::PathBuf;
use std::process::ExitStatus;

/// Failures raised while resolving links out of a Deployment
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// A `valueFrom` reference is present but has no usable `name`
    #[error("Deployment '{deployment}' has a {reference} without a 'name' field")]
    MissingReferenceName {
        deployment: String,
        reference: String,
    },
}

/// Pipeline errors, from rendering the chart to building the tree
#[derive(Debug, thiserror::Error)]
pub enum VisualizerError {
    #[error("Failed to start helm: {0}")]
    HelmSpawn(#[source] std::io::Error),

    #[error("helm exited with {status}: {stderr}")]
    HelmFailed { status: ExitStatus, stderr: String },

    #[error("{} is not a directory", .0.display())]
    InvalidChartPath(PathBuf),

    #[error("helm output is not valid UTF-8: {0}")]
    NonUtf8Output(#[from] std::string::FromUtf8Error),

    #[error("helm did not finish within {seconds}s")]
    HelmTimeout { seconds: u64 },

    #[error("Rendered manifests are not valid YAML: {0}")]
    InvalidManifest(#[from] serde_yaml::Error),

    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Result type for pipeline operations
pub type VisualizerResult<T> = Result<T, VisualizerError>;
