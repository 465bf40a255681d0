// file: src/main.rs
// version: 1.0.0
// guid: 14c8015d-fab4-4aaf-94be-c5fa0d91cd3f

//! Devflow Agent - Main entry point

use clap::Parser;
use colored::Colorize;
use devflow_agent::{
    cli::{args::Cli, commands},
    logging::logger,
};
use tokio::signal;
use tracing::{error, warn};

/// Fixed diagnostic printed when a strict workflow aborts
const ABORT_MESSAGE: &str = "Workflow failed. Aborting.";

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Ctrl+C ends the run; foreground children receive the signal with us.
    let shutdown_signal = async {
        if signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, shutting down");
        }
    };

    let command_future = commands::dispatch(&cli);

    tokio::select! {
        result = command_future => {
            if let Err(e) = result {
                error!("{}", e);
                eprintln!("{}", ABORT_MESSAGE.red().bold());
                std::process::exit(1);
            }
        }
        _ = shutdown_signal => {
            std::process::exit(130); // Standard exit code for Ctrl+C
        }
    }
}
