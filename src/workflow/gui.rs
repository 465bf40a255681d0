// file: src/workflow/gui.rs
// version: 1.0.0
// guid: cf73bc08-a56f-4bba-4fc9-70ab5e4c78ea

//! Desktop application workflow (lenient)

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};

/// Compile the `-run-gui` workflow
pub fn plan(config: &WorkflowConfig) -> WorkflowPlan {
    let mut plan = WorkflowPlan::new("run-gui");

    plan.push(Step::lenient(
        config.venv_python(),
        ["-m", config.gui.module.as_str()],
        "run desktop application",
    ));

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gui_plan_sequence() {
        let config = WorkflowConfig::default();
        let plan = plan(&config);

        assert_eq!(plan.steps.len(), 1);
        assert_eq!(plan.steps[0].command_line(), ".venv/bin/python -m app.gui");
        assert!(!plan.is_strict());
    }
}
