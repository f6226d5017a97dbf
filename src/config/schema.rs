//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// How the chart is rendered
    #[serde(default)]
    pub helm: HelmConfig,

    /// How the tree is printed
    #[serde(default)]
    pub ui: UiConfig,
}

/// Helm invocation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HelmConfig {
    /// Helm binary name or path
    #[serde(default = "default_helm_binary")]
    pub binary: String,

    /// Seconds to wait for `helm template`; 0 waits forever
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Extra arguments passed after `template` (e.g. `--namespace`, `-f`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Print without ANSI colors
    #[serde(default = "default_false")]
    pub no_color: bool,

    /// Disable Unicode icons for compatibility
    #[serde(default = "default_false")]
    pub no_icons: bool,

    /// Colors per node role
    #[serde(default)]
    pub colors: ColorConfig,
}

/// Color names per node role
///
/// Accepts terminal color names (`yellow`, `darkgray`), hex (`#ff8800`,
/// `#f80`) or any CSS color name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    #[serde(default = "default_root_color")]
    pub root: String,
    #[serde(default = "default_section_color")]
    pub section: String,
    #[serde(default = "default_resource_color")]
    pub resource: String,
    #[serde(default = "default_reference_color")]
    pub reference: String,
}

// Default value functions
fn default_helm_binary() -> String {
    "helm".to_string()
}

fn default_timeout_seconds() -> u64 {
    120
}

fn default_false() -> bool {
    false
}

fn default_root_color() -> String {
    "cyan".to_string()
}

fn default_section_color() -> String {
    "yellow".to_string()
}

fn default_resource_color() -> String {
    "green".to_string()
}

fn default_reference_color() -> String {
    "blue".to_string()
}

impl Default for HelmConfig {
    fn default() -> Self {
        Self {
            binary: default_helm_binary(),
            timeout_seconds: default_timeout_seconds(),
            extra_args: Vec::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            no_color: default_false(),
            no_icons: default_false(),
            colors: ColorConfig::default(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            root: default_root_color(),
            section: default_section_color(),
            resource: default_resource_color(),
            reference: default_reference_color(),
        }
    }
}
