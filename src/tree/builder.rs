//! Tree builder
//!
//! Lays out the indexed resources and their inferred relations as:
//! - Deployments, each with the resources it references
//! - Services, each with the Deployments it targets
//! - one section per remaining kind, sorted by kind name

use crate::error::LinkError;
use crate::index::ResourceIndex;
use crate::links::resolve_links;
use crate::models::resource_kind::{DEPLOYMENT, SERVICE};
use crate::tree::models::{NodeRole, TreeNode};

/// Label of the root node
pub const ROOT_LABEL: &str = "Kubernetes Resources";

/// Build the presentation tree for an index
///
/// Fails only when a Deployment carries a malformed env reference.
pub fn build_tree(index: &ResourceIndex) -> Result<TreeNode, LinkError> {
    let links = resolve_links(index)?;
    let mut root = TreeNode::new(ROOT_LABEL, NodeRole::Root);

    let deployments = root.add(TreeNode::new(section_label(DEPLOYMENT), NodeRole::Section));
    for (name, references) in &links.deployments {
        let node = deployments.add(TreeNode::new(name.as_str(), NodeRole::Resource));
        for (kind, names) in references {
            for referenced in names {
                node.add(TreeNode::reference(*kind, referenced));
            }
        }
    }

    let services = root.add(TreeNode::new(section_label(SERVICE), NodeRole::Section));
    for (name, targets) in &links.services {
        let node = services.add(TreeNode::new(name.as_str(), NodeRole::Resource));
        for target in targets {
            node.add(TreeNode::target(target));
        }
    }

    let mut other_kinds: Vec<&str> = index
        .kinds()
        .filter(|kind| *kind != DEPLOYMENT && *kind != SERVICE)
        .collect();
    other_kinds.sort_unstable();

    for kind in other_kinds {
        let section = root.add(TreeNode::new(section_label(kind), NodeRole::Section));
        for record in index.bucket(kind) {
            section.add(TreeNode::new(
                record.name().unwrap_or_default(),
                NodeRole::Resource,
            ));
        }
    }

    tracing::debug!("Built tree with {} top-level sections", root.children.len());
    Ok(root)
}

/// Section heading for a kind ("ConfigMap" -> "ConfigMaps")
pub fn section_label(kind: &str) -> String {
    format!("{}s", kind)
}
