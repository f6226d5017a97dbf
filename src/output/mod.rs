//! Tree printing
//!
//! Writes a [`TreeNode`] as an indented ASCII tree to any `io::Write` sink:
//!
//! ```text
//! 📦 Kubernetes Resources
//! ├── Deployments
//! │   └── web
//! │       └── 🔗 ConfigMap: web-cfg
//! └── Services
//! ```

use crate::config::{UiConfig, parse_color};
use crate::tree::{NodeRole, TreeNode};
use anyhow::Result;
use crossterm::style::{Color, Stylize};
use std::io::Write;

/// Colors per node role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeStyle {
    pub root: Color,
    pub section: Color,
    pub resource: Color,
    pub reference: Color,
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self {
            root: Color::DarkCyan,
            section: Color::DarkYellow,
            resource: Color::DarkGreen,
            reference: Color::DarkBlue,
        }
    }
}

impl TreeStyle {
    /// Build a style from the configured color names
    pub fn from_config(ui: &UiConfig) -> Result<Self> {
        Ok(Self {
            root: parse_color(&ui.colors.root)?,
            section: parse_color(&ui.colors.section)?,
            resource: parse_color(&ui.colors.resource)?,
            reference: parse_color(&ui.colors.reference)?,
        })
    }
}

/// Prints presentation trees
#[derive(Debug, Clone, Default)]
pub struct TreePrinter {
    /// `None` prints plain text
    style: Option<TreeStyle>,
    icons: bool,
}

impl TreePrinter {
    /// Plain printer: no colors, with icons
    pub fn plain() -> Self {
        Self {
            style: None,
            icons: true,
        }
    }

    /// Printer honoring the UI configuration
    pub fn from_config(ui: &UiConfig) -> Result<Self> {
        let style = if ui.no_color {
            None
        } else {
            Some(TreeStyle::from_config(ui)?)
        };
        Ok(Self {
            style,
            icons: !ui.no_icons,
        })
    }

    pub fn with_style(mut self, style: Option<TreeStyle>) -> Self {
        self.style = style;
        self
    }

    pub fn with_icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }

    /// Write `tree` to `out`
    pub fn print<W: Write>(&self, tree: &TreeNode, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.label(tree))?;
        self.print_children(tree, "", out)
    }

    /// Render `tree` into a string
    pub fn render_to_string(&self, tree: &TreeNode) -> Result<String> {
        let mut buf = Vec::new();
        self.print(tree, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    fn print_children<W: Write>(&self, node: &TreeNode, prefix: &str, out: &mut W) -> Result<()> {
        let count = node.children.len();
        for (i, child) in node.children.iter().enumerate() {
            let last = i + 1 == count;
            let (branch, indent) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            writeln!(out, "{}{}{}", prefix, branch, self.label(child))?;
            self.print_children(child, &format!("{}{}", prefix, indent), out)?;
        }
        Ok(())
    }

    fn label(&self, node: &TreeNode) -> String {
        let icon = match (self.icons, node.role) {
            (false, _) => "",
            (true, NodeRole::Root) => "📦 ",
            (true, NodeRole::Reference(_)) => "🔗 ",
            (true, NodeRole::Target) => "↪️ ",
            (true, _) => "",
        };

        let Some(style) = self.style else {
            return format!("{}{}", icon, node.label);
        };

        match node.role {
            NodeRole::Root => format!("{}{}", icon, node.label.as_str().with(style.root).bold()),
            NodeRole::Section => node.label.as_str().with(style.section).to_string(),
            NodeRole::Resource => node.label.as_str().with(style.resource).to_string(),
            NodeRole::Reference(_) | NodeRole::Target => {
                // Only the referenced name is highlighted
                let caption = node.caption().unwrap_or_default();
                format!(
                    "{}{}: {}",
                    icon,
                    caption,
                    node.name.as_str().with(style.reference)
                )
            }
        }
    }
}
