//! Model layer
//!
//! Typed views over rendered Kubernetes manifests.

pub mod manifest;
pub mod resource_kind;

pub use manifest::ManifestRecord;
pub use resource_kind::LinkedKind;
