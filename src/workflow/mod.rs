// file: src/workflow/mod.rs
// version: 1.0.0
// guid: 691d5ca2-4f09-4bba-e9c3-1a35f0d61284

//! Workflow branches and the literal dispatch table
//!
//! The historical CLI surface is a single positional literal (`-local`,
//! `-test`, ...). Each literal maps to exactly one workflow; anything else
//! falls through to the usage text.

pub mod bench;
pub mod docker;
pub mod gui;
pub mod local;
pub mod package;
pub mod quality;
pub mod server;

use crate::config::WorkflowConfig;
use crate::exec::WorkflowPlan;

/// One developer workflow, selected by its CLI literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    Local,
    Test,
    Docker,
    Benchmark,
    RunServer,
    Setup,
    RunGui,
    TestPackage,
}

impl Workflow {
    /// All workflows in the order the usage text lists them
    pub const ALL: [Workflow; 8] = [
        Workflow::Local,
        Workflow::Test,
        Workflow::Docker,
        Workflow::Benchmark,
        Workflow::RunServer,
        Workflow::Setup,
        Workflow::RunGui,
        Workflow::TestPackage,
    ];

    /// Match a CLI literal to its workflow, by exact string comparison
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "-local" => Some(Workflow::Local),
            "-test" => Some(Workflow::Test),
            "-docker" => Some(Workflow::Docker),
            "-benchmark" => Some(Workflow::Benchmark),
            "-run-server" => Some(Workflow::RunServer),
            "-setup" => Some(Workflow::Setup),
            "-run-gui" => Some(Workflow::RunGui),
            "-test-package" => Some(Workflow::TestPackage),
            _ => None,
        }
    }

    /// The CLI literal for this workflow
    pub fn as_arg(&self) -> &'static str {
        match self {
            Workflow::Local => "-local",
            Workflow::Test => "-test",
            Workflow::Docker => "-docker",
            Workflow::Benchmark => "-benchmark",
            Workflow::RunServer => "-run-server",
            Workflow::Setup => "-setup",
            Workflow::RunGui => "-run-gui",
            Workflow::TestPackage => "-test-package",
        }
    }

    /// One-line description used in the usage text
    pub fn describe(&self) -> &'static str {
        match self {
            Workflow::Local => {
                "build a local virtual environment, install requirements, format, lint and test"
            }
            Workflow::Test => "run the formatter check, linter and test suite",
            Workflow::Docker => "build the container image and run it",
            Workflow::Benchmark => "start the server in the background and run the benchmark suite",
            Workflow::RunServer => "free the configured port and run the server process",
            Workflow::Setup => "build the distributable packages (sdist and wheel)",
            Workflow::RunGui => "run the desktop application",
            Workflow::TestPackage => "build the distributable and test the installed package",
        }
    }

    /// Compile this workflow to its command plan
    pub fn plan(&self, config: &WorkflowConfig) -> WorkflowPlan {
        match self {
            Workflow::Local => local::plan(config),
            Workflow::Test => quality::plan(config),
            Workflow::Docker => docker::plan(config),
            Workflow::Benchmark => bench::plan(config),
            Workflow::RunServer => server::plan(config),
            Workflow::Setup => package::setup_plan(config),
            Workflow::RunGui => gui::plan(config),
            Workflow::TestPackage => package::test_package_plan(config),
        }
    }
}

/// The documented usage text, printed on no argument or an unknown one
pub fn usage_text() -> String {
    let mut out = String::from("Usage: devflow-agent [OPTIONS] <WORKFLOW>\n\nWorkflows:\n");
    for workflow in Workflow::ALL {
        out.push_str(&format!(
            "  {:<15} {}\n",
            workflow.as_arg(),
            workflow.describe()
        ));
    }
    out.push_str("\nOptions:\n");
    out.push_str("  -v, --verbose    enable debug logging\n");
    out.push_str("  -q, --quiet      only log errors\n");
    out.push_str("      --config     path to a devflow.yaml configuration file\n");
    out.push_str("      --dry-run    print the planned commands without executing them\n");
    out
}
