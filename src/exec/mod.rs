// file: src/exec/mod.rs
// version: 1.0.0
// guid: 03b79c46-8fa3-4b54-e367-b4d9fa70bc2e

//! External process execution: workflow plans and the step runner

pub mod runner;
pub mod step;

pub use runner::{PlanOutcome, StepRunner};
pub use step::{Step, StepMode, WorkflowPlan};
