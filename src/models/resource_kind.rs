//! Kubernetes resource kinds the visualizer treats specially
//!
//! Deployments and Services get their own tree sections; the kinds a
//! Deployment can reference are modelled as [`LinkedKind`] so that link
//! sets have a fixed, typed presentation order.

use std::fmt;
use std::str::FromStr;

/// Kind name of Deployment manifests
pub const DEPLOYMENT: &str = "Deployment";

/// Kind name of Service manifests
pub const SERVICE: &str = "Service";

/// Resource kinds a Deployment can reference from its pod template
///
/// Variant order is the order used when rendering a Deployment's links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkedKind {
    ServiceAccount,
    ConfigMap,
    Secret,
}

impl LinkedKind {
    /// Get the Kubernetes kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkedKind::ServiceAccount => "ServiceAccount",
            LinkedKind::ConfigMap => "ConfigMap",
            LinkedKind::Secret => "Secret",
        }
    }

    /// Try to parse a kind name, returning None if it is not a linked kind
    pub fn parse_optional(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// All linked kinds in presentation order
    pub fn all() -> &'static [Self] {
        &[
            LinkedKind::ServiceAccount,
            LinkedKind::ConfigMap,
            LinkedKind::Secret,
        ]
    }
}

impl fmt::Display for LinkedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<LinkedKind> for String {
    fn from(kind: LinkedKind) -> Self {
        kind.as_str().to_string()
    }
}

impl FromStr for LinkedKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ServiceAccount" => Ok(LinkedKind::ServiceAccount),
            "ConfigMap" => Ok(LinkedKind::ConfigMap),
            "Secret" => Ok(LinkedKind::Secret),
            _ => Err(format!("Unknown linked resource kind: {}", s)),
        }
    }
}
