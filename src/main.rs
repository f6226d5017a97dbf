//! helmviz - visualize Helm chart resources as an ASCII relationship tree
//!
//! Runs `helm template` on a chart directory and prints the rendered
//! Deployments, Services and other resources with the links between them.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::style::Stylize;
use helmviz::cli::{Args, failure_message, init_logging, validate_chart_path};
use helmviz::config::{Config, ConfigLoader};
use helmviz::{HelmCli, TreePrinter, VisualizerError, visualize_chart};
use std::io::Write;

/// Apply command-line overrides on top of the loaded configuration
fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(ref helm) = args.helm {
        config.helm.binary = helm.clone();
    }
    if let Some(timeout) = args.timeout {
        config.helm.timeout_seconds = timeout;
    }
    config.helm.extra_args.extend(args.helm_args());
    if args.no_color {
        config.ui.no_color = true;
    }
    if args.no_icons {
        config.ui.no_icons = true;
    }
    config
}

/// Print the failure to stderr and exit with code 1
fn fail(colored: bool, err: &VisualizerError) -> ! {
    let (prefix, message) = failure_message(err);
    if colored {
        eprintln!("{} {}", prefix.red(), message);
    } else {
        eprintln!("{} {}", prefix, message);
    }
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(), // --help / --version
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let log_file = init_logging(args.debug);
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let config = ConfigLoader::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load configuration: {:#}, using defaults", e);
        eprintln!("Warning: {:#}; using default configuration", e);
        ConfigLoader::load_defaults()
    });
    let config = apply_args(config, &args);
    let colored = !config.ui.no_color;

    if let Err(e) = validate_chart_path(&args.chart) {
        fail(colored, &e);
    }

    let printer = TreePrinter::from_config(&config.ui).context("Invalid color in configuration")?;

    let mut stdout = std::io::stdout().lock();
    if colored {
        writeln!(stdout, "{} {}", "Rendering Helm chart:".blue(), args.chart.display())?;
    } else {
        writeln!(stdout, "Rendering Helm chart: {}", args.chart.display())?;
    }
    stdout.flush()?;

    let renderer = HelmCli::new(&config.helm);
    let tree = match visualize_chart(&renderer, &args.chart).await {
        Ok(tree) => tree,
        Err(e) => fail(colored, &e),
    };

    printer.print(&tree, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}
