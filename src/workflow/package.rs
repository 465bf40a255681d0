// file: src/workflow/package.rs
// version: 1.0.0
// guid: d084cd19-b670-4ccb-50da-81bc6f5d89fb

//! Packaging workflows: build the distributable, and test the installed
//! package in a throwaway environment
//!
//! The install step uses `--no-index --find-links <dist>` so only the just
//! built artifacts can satisfy the requirement.

use crate::config::WorkflowConfig;
use crate::exec::{Step, WorkflowPlan};
use std::path::PathBuf;

fn build_step(config: &WorkflowConfig) -> Step {
    Step::lenient(
        config.venv_python(),
        ["-m", "build", "--outdir", config.package.dist_dir.as_str()],
        "build sdist and wheel",
    )
}

/// Compile the `-setup` workflow
pub fn setup_plan(config: &WorkflowConfig) -> WorkflowPlan {
    let mut plan = WorkflowPlan::new("setup");
    plan.push(build_step(config));
    plan
}

/// Compile the `-test-package` workflow
pub fn test_package_plan(config: &WorkflowConfig) -> WorkflowPlan {
    let pkg_venv = config.package_venv_dir();
    let pkg_python = PathBuf::from(&pkg_venv)
        .join("bin")
        .join("python")
        .to_string_lossy()
        .into_owned();
    let mut plan = WorkflowPlan::new("test-package");

    plan.push(build_step(config));
    plan.push(Step::lenient(
        config.python.interpreter.as_str(),
        ["-m", "venv", pkg_venv.as_str()],
        "create packaging environment",
    ));
    plan.push(Step::lenient(
        pkg_python.as_str(),
        ["-m", "pip", "install", "--upgrade", "pip"],
        "upgrade pip",
    ));
    plan.push(Step::lenient(
        pkg_python.as_str(),
        [
            "-m",
            "pip",
            "install",
            "--no-index",
            "--find-links",
            config.package.dist_dir.as_str(),
            config.package.name.as_str(),
        ],
        "install built package",
    ));

    let mut test_args = vec!["-m".to_string(), config.tools.test_runner.clone()];
    test_args.extend(config.tools.test_args.iter().cloned());
    plan.push(Step::lenient(pkg_python, test_args, "test installed package"));

    plan
}
