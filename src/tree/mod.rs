//! Presentation tree
//!
//! Turns indexed manifests into a rooted, ordered tree of labeled nodes that
//! the output layer prints.

mod builder;
mod models;

pub use builder::{ROOT_LABEL, build_tree, section_label};
pub use models::{NodeRole, TARGET_CAPTION, TreeNode};
