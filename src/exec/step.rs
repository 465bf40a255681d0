// file: src/exec/step.rs
// version: 1.0.0
// guid: 14c80d57-9ab4-4c65-f478-c5e0ab81cd3f

//! Workflow plans as data
//!
//! Each workflow branch compiles to a `WorkflowPlan`, an ordered list of
//! external tool invocations. Keeping plans as plain values lets the command
//! sequences be asserted on without spawning any processes.

use std::path::PathBuf;
use std::time::Duration;

/// Failure semantics of a single step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepMode {
    /// A nonzero exit aborts the whole workflow
    Strict,

    /// A nonzero exit is logged and the workflow continues
    Lenient,

    /// The child is spawned, the runner sleeps the startup delay, then
    /// proceeds. The child is reaped when the plan finishes.
    Background { startup_delay: Duration },
}

/// One external process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub mode: StepMode,
    pub description: String,
}

impl Step {
    /// Create a strict step
    pub fn strict(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: None,
            mode: StepMode::Strict,
            description: description.into(),
        }
    }

    /// Create a lenient step
    pub fn lenient(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            mode: StepMode::Lenient,
            ..Self::strict(program, args, description)
        }
    }

    /// Create a background step with the given startup delay
    pub fn background(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        description: impl Into<String>,
        startup_delay: Duration,
    ) -> Self {
        Self {
            mode: StepMode::Background { startup_delay },
            ..Self::strict(program, args, description)
        }
    }

    /// Render the step as a single command line for logging
    pub fn command_line(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Ordered sequence of steps making up one workflow branch
#[derive(Debug, Clone)]
pub struct WorkflowPlan {
    pub name: &'static str,
    pub steps: Vec<Step>,
}

impl WorkflowPlan {
    /// Create an empty plan
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a step to the plan
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Whether any step in this plan is strict
    pub fn is_strict(&self) -> bool {
        self.steps.iter().any(|s| s.mode == StepMode::Strict)
    }

    /// Render the plan for dry-run output
    pub fn render(&self) -> String {
        let mut out = format!("workflow: {}\n", self.name);
        for (i, step) in self.steps.iter().enumerate() {
            let tag = match step.mode {
                StepMode::Strict => "strict",
                StepMode::Lenient => "lenient",
                StepMode::Background { .. } => "background",
            };
            out.push_str(&format!("  {}. [{}] {}\n", i + 1, tag, step.command_line()));
        }
        out
    }
}
