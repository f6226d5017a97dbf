//! Configuration system for helmviz
//!
//! Built-in defaults, an optional `config.yaml` in the user config directory,
//! and environment variable overrides, merged in that order.

pub mod colors;
mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use colors::parse_color;
pub use loader::ConfigLoader;
pub use schema::{ColorConfig, Config, HelmConfig, UiConfig};
