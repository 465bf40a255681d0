// file: src/workflow/quality.rs
// version: 1.0.0
// guid: 8b3f7ec4-612b-4ddc-0be5-3c571a0834a6

//! Quality workflow: formatter check, linter, test suite (strict)

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};

/// Compile the `-test` workflow
pub fn plan(config: &WorkflowConfig) -> WorkflowPlan {
    let venv_python = config.venv_python();
    let mut plan = WorkflowPlan::new("test");

    plan.push(Step::strict(
        venv_python.as_str(),
        ["-m", config.tools.formatter.as_str(), "--check", "."],
        "check formatting",
    ));
    plan.push(Step::strict(
        venv_python.as_str(),
        ["-m", config.tools.linter.as_str(), "."],
        "lint sources",
    ));

    let mut test_args = vec!["-m".to_string(), config.tools.test_runner.clone()];
    test_args.extend(config.tools.test_args.iter().cloned());
    plan.push(Step::strict(venv_python, test_args, "run tests"));

    plan
}
