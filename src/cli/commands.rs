// file: src/cli/commands.rs
// version: 1.0.0
// guid: 03b7f04c-e9a3-4ffe-83ad-b4ef9c80bc2e

//! Command implementations for the CLI

use crate::{
    cli::args::Cli,
    config::ConfigLoader,
    exec::StepRunner,
    utils::{ports, system::SystemUtils},
    workflow::{usage_text, Workflow},
    Result,
};
use std::time::Duration;
use tracing::{info, warn};

/// Dispatch the parsed CLI invocation.
///
/// No argument and unrecognized arguments both print the usage text and
/// succeed; only a recognized literal runs a workflow.
pub async fn dispatch(cli: &Cli) -> Result<()> {
    let workflow = match cli.mode.as_deref() {
        None => {
            print!("{}", usage_text());
            return Ok(());
        }
        Some(arg) => match Workflow::from_arg(arg) {
            Some(workflow) => workflow,
            None => {
                info!("Unrecognized workflow argument: {}", arg);
                print!("{}", usage_text());
                return Ok(());
            }
        },
    };

    run_workflow_command(workflow, cli.config.as_deref(), cli.dry_run).await
}

/// Run one workflow end to end
pub async fn run_workflow_command(
    workflow: Workflow,
    config_path: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let loader = ConfigLoader::new();
    let config = loader.resolve(config_path)?;

    let timeout = config.timeout_seconds.map(Duration::from_secs);
    let runner = StepRunner::new(dry_run, timeout);
    let plan = workflow.plan(&config);

    // Pre-flight: surface missing tools before anything runs. Programs
    // referenced by path (venv interpreters) may be created by earlier steps.
    let programs: Vec<&str> = plan
        .steps
        .iter()
        .map(|s| s.program.as_str())
        .filter(|p| !p.contains(std::path::MAIN_SEPARATOR))
        .collect();
    let missing = SystemUtils::missing_commands(&programs);
    if !missing.is_empty() {
        warn!("Missing tools on PATH: {}", missing.join(", "));
    }

    if workflow == Workflow::RunServer {
        if dry_run {
            println!("would free port {} before starting the server", config.server.port);
        } else {
            ports::free_port(config.server.port).await;
        }
    }

    let outcome = runner.run(&plan).await?;
    if outcome.failed > 0 {
        warn!(
            "Workflow '{}' completed with {} failed step(s)",
            plan.name, outcome.failed
        );
    }

    Ok(())
}
