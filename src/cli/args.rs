// file: src/cli/args.rs
// version: 1.0.0
// guid: f2a6ef3b-d892-4eed-72fc-a3de8b7fab1d

//! Command line argument definitions
//!
//! The workflow selector is a positional literal beginning with a hyphen
//! (`-local`, `-test`, ...), so the positional allows hyphen values and the
//! dispatch is an exact string match rather than a subcommand tree.

use clap::Parser;

#[derive(Parser)]
#[command(name = "devflow-agent")]
#[command(about = "Developer workflow dispatcher for Python projects")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Workflow selector literal, e.g. "-local" or "-test"
    #[arg(value_name = "WORKFLOW", allow_hyphen_values = true)]
    pub mode: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to a devflow.yaml configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Print the planned commands without executing them
    #[arg(long)]
    pub dry_run: bool,
}
