// file: src/lib.rs
// version: 1.0.0
// guid: a3f81c42-9d27-4b6e-8f05-2c91e64a7b13

//! # Devflow Agent
//!
//! Developer workflow dispatcher for Python projects. A single positional
//! literal selects one of a fixed set of workflows (local environment build,
//! quality checks, container build/run, benchmark, server, GUI, packaging),
//! each of which is a sequential plan of external tool invocations.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod logging;
pub mod utils;
pub mod workflow;

pub use error::{DevflowError, Result};

/// Version information for the agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
