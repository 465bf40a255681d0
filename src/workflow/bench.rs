// file: src/workflow/bench.rs
// version: 1.0.0
// guid: ad519ae6-834d-4ffe-2da7-5e793c2a56c8

//! Benchmark workflow: background server start, fixed delay, benchmark run
//!
//! The fixed startup delay is the source model's synchronization: there is no
//! readiness protocol. The runner reaps the background server when the plan
//! finishes.

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};
use std::time::Duration;

/// Compile the `-benchmark` workflow
pub fn plan(config: &WorkflowConfig) -> WorkflowPlan {
    let venv_python = config.venv_python();
    let mut plan = WorkflowPlan::new("benchmark");

    plan.push(Step::background(
        venv_python.as_str(),
        ["-m", config.server.module.as_str()],
        "start server in background",
        Duration::from_secs(config.server.startup_delay_secs),
    ));
    plan.push(Step::lenient(
        venv_python,
        ["-m", config.benchmark.module.as_str()],
        "run benchmark",
    ));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::StepMode;

    #[test]
    fn test_benchmark_plan_sequence() {
        let config = WorkflowConfig::default();
        let plan = plan(&config);

        assert_eq!(plan.steps.len(), 2);
        assert_eq!(
            plan.steps[0].mode,
            StepMode::Background {
                startup_delay: Duration::from_secs(3)
            }
        );
        assert_eq!(
            plan.steps[0].command_line(),
            ".venv/bin/python -m app.server"
        );
        assert_eq!(
            plan.steps[1].command_line(),
            ".venv/bin/python -m tests.benchmark"
        );
        assert_eq!(plan.steps[1].mode, StepMode::Lenient);
    }

    #[test]
    fn test_configured_delay_is_used() {
        let mut config = WorkflowConfig::default();
        config.server.startup_delay_secs = 10;

        let plan = plan(&config);
        assert_eq!(
            plan.steps[0].mode,
            StepMode::Background {
                startup_delay: Duration::from_secs(10)
            }
        );
    }
}
