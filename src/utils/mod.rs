// file: src/utils/mod.rs
// version: 1.0.0
// guid: 36ea2f79-1cd6-4e87-b690-e702cda3ef51

//! Utility modules for the Devflow Agent

pub mod ports;
pub mod system;
