// file: src/workflow/local.rs
// version: 1.0.0
// guid: 7a2e6db3-501a-4ccb-fad4-2b460fe72395

//! Local environment workflow: venv build, requirements, format, lint, test
//!
//! Every step is strict: the first nonzero exit aborts the run.

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};

/// Compile the `-local` workflow
pub fn plan(config: &WorkflowConfig) -> WorkflowPlan {
    let venv_python = config.venv_python();
    let mut plan = WorkflowPlan::new("local");

    plan.push(Step::strict(
        config.python.interpreter.as_str(),
        ["-m", "venv", config.python.venv_dir.as_str()],
        "create virtual environment",
    ));
    plan.push(Step::strict(
        venv_python.as_str(),
        ["-m", "pip", "install", "--upgrade", "pip"],
        "upgrade pip",
    ));
    for requirements in &config.python.requirements {
        plan.push(Step::strict(
            venv_python.as_str(),
            ["-m", "pip", "install", "-r", requirements.as_str()],
            format!("install {}", requirements),
        ));
    }
    plan.push(Step::strict(
        venv_python.as_str(),
        ["-m", config.tools.formatter.as_str(), "."],
        "format sources",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec::StepMode;

    #[test]
    fn test_local_plan_sequence() {
        let config = WorkflowConfig::default();
        let plan = plan(&config);

        let commands: Vec<String> = plan.steps.iter().map(|s| s.command_line()).collect();
        assert_eq!(
            commands,
            vec![
                "python3 -m venv .venv",
                ".venv/bin/python -m pip install --upgrade pip",
                ".venv/bin/python -m pip install -r requirements.txt",
                ".venv/bin/python -m black .",
                ".venv/bin/python -m flake8 .",
                ".venv/bin/python -m pytest",
            ]
        );
        assert!(plan.steps.iter().all(|s| s.mode == StepMode::Strict));
    }

    #[test]
    fn test_extra_requirements_files_each_get_a_step() {
        let mut config = WorkflowConfig::default();
        config.python.requirements = vec![
            "requirements.txt".to_string(),
            "requirements-dev.txt".to_string(),
        ];

        let plan = plan(&config);
        let installs: Vec<&Step> = plan
            .steps
            .iter()
            .filter(|s| s.args.contains(&"-r".to_string()))
            .collect();
        assert_eq!(installs.len(), 2);
        assert!(installs[1].command_line().ends_with("requirements-dev.txt"));
    }

    #[test]
    fn test_test_args_are_appended() {
        let mut config = WorkflowConfig::default();
        config.tools.test_args = vec!["-x".to_string(), "tests/".to_string()];

        let plan = plan(&config);
        let last = plan.steps.last().unwrap();
        assert_eq!(last.command_line(), ".venv/bin/python -m pytest -x tests/");
    }
}
