// file: src/cli/mod.rs
// version: 1.0.0
// guid: e195de2a-c781-4ddc-61eb-92cd7a6e9a0c

//! Command line interface for the Devflow Agent

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
