// file: src/exec/runner.rs
// version: 1.0.0
// guid: 25d91e68-0bc5-4d76-a589-d6f1bc92de40

//! Sequential plan execution with strict and lenient failure semantics

use crate::error::DevflowError;
use crate::exec::step::{Step, StepMode, WorkflowPlan};
use crate::utils::system::SystemUtils;
use crate::Result;
use colored::Colorize;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Result of executing a full plan
#[derive(Debug, Clone, Default)]
pub struct PlanOutcome {
    /// Steps that ran and exited zero (or were spawned in the background)
    pub completed: usize,

    /// Lenient steps that exited nonzero or failed to start
    pub failed: usize,
}

/// Executes workflow plans step by step
pub struct StepRunner {
    dry_run: bool,
    timeout: Option<Duration>,
}

impl StepRunner {
    /// Create a new runner
    pub fn new(dry_run: bool, timeout: Option<Duration>) -> Self {
        Self { dry_run, timeout }
    }

    /// Execute the plan sequentially.
    ///
    /// Strict step failures abort the run and surface as an error; lenient
    /// failures are logged and counted. Background children are spawned,
    /// granted their startup delay, and killed best-effort when the plan
    /// finishes.
    pub async fn run(&self, plan: &WorkflowPlan) -> Result<PlanOutcome> {
        let run_id = Uuid::new_v4();
        info!("Starting workflow '{}' (run {})", plan.name, run_id);

        if self.dry_run {
            print!("{}", plan.render());
            return Ok(PlanOutcome::default());
        }

        let mut outcome = PlanOutcome::default();
        let mut background: Vec<Child> = Vec::new();

        for (index, step) in plan.steps.iter().enumerate() {
            println!(
                "{} [{}/{}] {}",
                "==>".green().bold(),
                index + 1,
                plan.steps.len(),
                step.description
            );
            debug!("Step command: {}", step.command_line());

            match &step.mode {
                StepMode::Background { startup_delay } => {
                    match self.spawn_background(step) {
                        Ok(child) => {
                            info!(
                                "Spawned '{}' in the background, waiting {}s before proceeding",
                                step.command_line(),
                                startup_delay.as_secs()
                            );
                            background.push(child);
                            tokio::time::sleep(*startup_delay).await;
                            outcome.completed += 1;
                        }
                        Err(e) => {
                            warn!("Failed to start background step: {}", e);
                            outcome.failed += 1;
                        }
                    }
                }
                StepMode::Strict => {
                    if let Err(e) = self.execute_step(step).await {
                        reap_children(&mut background).await;
                        return Err(e);
                    }
                    outcome.completed += 1;
                }
                StepMode::Lenient => match self.execute_step(step).await {
                    Ok(()) => outcome.completed += 1,
                    Err(e) => {
                        warn!("Step failed (continuing): {}", e);
                        outcome.failed += 1;
                    }
                },
            }
        }

        reap_children(&mut background).await;

        info!(
            "Workflow '{}' finished: {} completed, {} failed",
            plan.name, outcome.completed, outcome.failed
        );
        Ok(outcome)
    }

    /// Run one foreground step to completion
    async fn execute_step(&self, step: &Step) -> Result<()> {
        self.check_program(step)?;

        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(ref cwd) = step.cwd {
            cmd.current_dir(cwd);
        }

        let status_future = cmd.status();
        let status = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, status_future)
                .await
                .map_err(|_| {
                    DevflowError::timeout(format!(
                        "Step `{}` exceeded {}s",
                        step.command_line(),
                        limit.as_secs()
                    ))
                })?,
            None => status_future.await,
        }
        .map_err(|e| {
            DevflowError::process(step.command_line(), None, format!("failed to spawn: {}", e))
        })?;

        if !status.success() {
            return Err(DevflowError::process(
                step.command_line(),
                status.code(),
                String::new(),
            ));
        }

        debug!("Step completed: {}", step.command_line());
        Ok(())
    }

    /// Spawn a background step without waiting for it
    fn spawn_background(&self, step: &Step) -> Result<Child> {
        self.check_program(step)?;

        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        if let Some(ref cwd) = step.cwd {
            cmd.current_dir(cwd);
        }

        cmd.spawn().map_err(|e| {
            DevflowError::process(step.command_line(), None, format!("failed to spawn: {}", e))
        })
    }

    /// Verify the step's program can be found before executing it.
    ///
    /// Programs referenced by path (for example a venv interpreter created by
    /// an earlier step) are left to the spawn call to resolve.
    fn check_program(&self, step: &Step) -> Result<()> {
        if step.program.contains(std::path::MAIN_SEPARATOR) {
            return Ok(());
        }
        if !SystemUtils::command_exists(&step.program) {
            return Err(DevflowError::ToolMissing(step.program.clone()));
        }
        Ok(())
    }
}

/// Kill any still-running background children, best-effort
async fn reap_children(children: &mut Vec<Child>) {
    for child in children.iter_mut() {
        let _ = child.kill().await;
    }
    children.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::step::{Step, WorkflowPlan};

    fn plan_of(steps: Vec<Step>) -> WorkflowPlan {
        let mut plan = WorkflowPlan::new("test");
        for step in steps {
            plan.push(step);
        }
        plan
    }

    #[tokio::test]
    async fn test_strict_failure_aborts() {
        let runner = StepRunner::new(false, None);
        let plan = plan_of(vec![
            Step::strict("false", Vec::<String>::new(), "always fails"),
            Step::strict("true", Vec::<String>::new(), "never reached"),
        ]);

        let result = runner.run(&plan).await;
        assert!(result.is_err());
        match result.unwrap_err() {
            DevflowError::Process { exit_code, .. } => assert_eq!(exit_code, Some(1)),
            other => panic!("Expected Process error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lenient_failure_continues() {
        let runner = StepRunner::new(false, None);
        let plan = plan_of(vec![
            Step::lenient("false", Vec::<String>::new(), "always fails"),
            Step::lenient("true", Vec::<String>::new(), "still runs"),
        ]);

        let outcome = runner.run(&plan).await.unwrap();
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.completed, 1);
    }

    #[tokio::test]
    async fn test_missing_tool_is_strict_error() {
        let runner = StepRunner::new(false, None);
        let plan = plan_of(vec![Step::strict(
            "devflow-no-such-tool",
            Vec::<String>::new(),
            "missing",
        )]);

        let result = runner.run(&plan).await;
        assert!(matches!(result, Err(DevflowError::ToolMissing(_))));
    }

    #[tokio::test]
    async fn test_missing_tool_is_lenient_warning() {
        let runner = StepRunner::new(false, None);
        let plan = plan_of(vec![Step::lenient(
            "devflow-no-such-tool",
            Vec::<String>::new(),
            "missing",
        )]);

        let outcome = runner.run(&plan).await.unwrap();
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.completed, 0);
    }

    #[tokio::test]
    async fn test_background_child_is_reaped() {
        let runner = StepRunner::new(false, None);
        let plan = plan_of(vec![
            Step::background(
                "sleep",
                ["30"],
                "long-lived background process",
                Duration::from_millis(50),
            ),
            Step::lenient("true", Vec::<String>::new(), "benchmark stand-in"),
        ]);

        let start = std::time::Instant::now();
        let outcome = runner.run(&plan).await.unwrap();
        assert_eq!(outcome.completed, 2);
        // the 30s sleep must have been killed, not awaited
        assert!(start.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_dry_run_executes_nothing() {
        let runner = StepRunner::new(true, None);
        let plan = plan_of(vec![Step::strict(
            "false",
            Vec::<String>::new(),
            "would fail if executed",
        )]);

        let outcome = runner.run(&plan).await.unwrap();
        assert_eq!(outcome.completed, 0);
        assert_eq!(outcome.failed, 0);
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_timeout_error() {
        let runner = StepRunner::new(false, Some(Duration::from_millis(100)));
        let plan = plan_of(vec![Step::strict("sleep", ["5"], "too slow")]);

        let result = runner.run(&plan).await;
        assert!(matches!(result, Err(DevflowError::Timeout(_))));
    }
}
