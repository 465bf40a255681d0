// file: src/utils/system.rs
// version: 1.0.0
// guid: 580c4b91-3ef8-4aa9-d8b2-0924efc50173

//! System utility functions

use tracing::debug;

/// System utility functions
pub struct SystemUtils;

impl SystemUtils {
    /// Check if a command exists in PATH
    pub fn command_exists(command: &str) -> bool {
        which::which(command).is_ok()
    }

    /// Report which of the given commands are missing from PATH
    pub fn missing_commands(commands: &[&str]) -> Vec<String> {
        let mut missing = Vec::new();
        for command in commands {
            if Self::command_exists(command) {
                debug!("Found required command: {}", command);
            } else {
                missing.push((*command).to_string());
            }
        }
        missing
    }
}
