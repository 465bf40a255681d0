// file: src/workflow/server.rs
// version: 1.0.0
// guid: be62abf7-945e-4aaf-3eb8-6f8a4d3b67d9

//! Server workflow: run the server process in the foreground
//!
//! Freeing the configured port happens before the plan runs, in the command
//! layer, so the plan itself is a single step.

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};

/// Compile the `-run-server` workflow
pub fn plan(config: &WorkflowConfig) -> WorkflowPlan {
    let mut plan = WorkflowPlan::new("run-server");

    plan.push(Step::lenient(
        config.venv_python(),
        ["-m", config.server.module.as_str()],
        "run server",
    ));

    plan
}
