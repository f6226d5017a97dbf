//! helmviz library
//!
//! Renders a Helm chart, indexes the resulting Kubernetes manifests and
//! infers the relationships between them for display as a tree. The binary
//! is a thin wrapper; everything here can be used and tested without a
//! `helm` installation.

pub mod cli;
pub mod config;
pub mod error;
pub mod helm;
pub mod index;
pub mod links;
pub mod manifest;
pub mod models;
pub mod output;
pub mod tree;

// Re-export commonly used types for convenience
pub use error::{LinkError, VisualizerError, VisualizerResult};
pub use helm::{ChartRenderer, HelmCli, visualize_chart};
pub use index::{ResourceIndex, index_resources};
pub use links::{
    DeploymentLinks, LinkSet, extract_deployment_links, match_service_to_deployments,
    resolve_links,
};
pub use manifest::parse_documents;
pub use models::{LinkedKind, ManifestRecord};
pub use output::TreePrinter;
pub use tree::{NodeRole, TreeNode, build_tree};
