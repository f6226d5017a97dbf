//! CLI handling module
//!
//! Argument parsing, logging setup and failure reporting for the binary.

mod args;
mod logging;
mod report;

pub use args::Args;
pub use logging::init_logging;
pub use report::{failure_message, validate_chart_path};
