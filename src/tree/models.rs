//! Presentation tree data structures

use crate::models::LinkedKind;

/// What a node stands for; drives icons and colors when printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// The single root for the whole resource collection
    Root,
    /// A per-kind section ("Deployments", "ConfigMaps", ...)
    Section,
    /// One named resource inside a section
    Resource,
    /// A resource referenced by a Deployment
    Reference(LinkedKind),
    /// A Deployment selected by a Service
    Target,
}

/// Caption shown before the name of a [`NodeRole::Target`] node
pub const TARGET_CAPTION: &str = "Targets Deployment";

/// A labeled node owning its children in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Full display text
    pub label: String,
    pub role: NodeRole,
    /// Name of the resource the node stands for; equals `label` except for
    /// reference and target nodes, where it is the referenced name only
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a node without children
    pub fn new(label: impl Into<String>, role: NodeRole) -> Self {
        let label = label.into();
        Self {
            name: label.clone(),
            label,
            role,
            children: Vec::new(),
        }
    }

    /// A resource referenced by a Deployment ("ConfigMap: web-cfg")
    pub fn reference(kind: LinkedKind, name: &str) -> Self {
        Self::captioned(kind.as_str(), name, NodeRole::Reference(kind))
    }

    /// A Deployment selected by a Service ("Targets Deployment: web")
    pub fn target(deployment: &str) -> Self {
        Self::captioned(TARGET_CAPTION, deployment, NodeRole::Target)
    }

    fn captioned(caption: &str, name: &str, role: NodeRole) -> Self {
        Self {
            label: format!("{}: {}", caption, name),
            role,
            name: name.to_string(),
            children: Vec::new(),
        }
    }

    /// Text shown before the name, for reference and target nodes
    pub fn caption(&self) -> Option<&'static str> {
        match self.role {
            NodeRole::Reference(kind) => Some(kind.as_str()),
            NodeRole::Target => Some(TARGET_CAPTION),
            _ => None,
        }
    }

    /// Append a child and return a handle to it
    pub fn add(&mut self, child: TreeNode) -> &mut TreeNode {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// First direct child with the given label
    pub fn find_child(&self, label: &str) -> Option<&TreeNode> {
        self.children.iter().find(|c| c.label == label)
    }

    /// Labels of the direct children, in order
    pub fn child_labels(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.label.as_str()).collect()
    }

    /// Names of the direct children, in order
    pub fn child_names(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }

    /// Number of leaves below (and including) this node
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }
}
