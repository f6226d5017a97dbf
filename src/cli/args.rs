//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Visualize the Kubernetes resources rendered by a Helm chart as an ASCII tree
#[derive(Parser, Debug)]
#[command(name = "helmviz", version)]
#[command(about = "Visualize Helm chart Kubernetes resources as an ASCII relationship tree", long_about = None)]
pub struct Args {
    /// Path to the chart directory
    pub chart: PathBuf,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Disable Unicode icons
    #[arg(long)]
    pub no_icons: bool,

    /// Helm binary to run (defaults to `helm` on PATH)
    #[arg(long, value_name = "PATH")]
    pub helm: Option<String>,

    /// Seconds to wait for `helm template` (0 disables the timeout)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Values file passed to `helm template` (repeatable)
    #[arg(long = "values", short = 'f', value_name = "FILE")]
    pub values: Vec<PathBuf>,

    /// Namespace passed to `helm template`
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,
}

impl Args {
    /// Helm arguments contributed by the command line
    pub fn helm_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(ref namespace) = self.namespace {
            args.push("--namespace".to_string());
            args.push(namespace.clone());
        }
        for file in &self.values {
            args.push("--values".to_string());
            args.push(file.display().to_string());
        }
        args
    }
}
