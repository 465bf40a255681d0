// file: src/logging/mod.rs
// version: 1.0.0
// guid: c9d35e02-4b69-4d10-af23-7095bc36d8ea

//! Logging setup for the Devflow Agent

pub mod logger;
