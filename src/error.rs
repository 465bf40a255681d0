// file: src/error.rs
// version: 1.0.0
// guid: b7e24d91-3a58-4c0f-9e12-6f84ab25c7d9

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, DevflowError>;

/// Error types for the Devflow Agent
#[derive(Error, Debug)]
pub enum DevflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Command `{command}` failed with exit code {exit_code:?}")]
    Process {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Required tool not found on PATH: {0}")]
    ToolMissing(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("System error: {0}")]
    System(String),
}

impl DevflowError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new process error
    pub fn process(command: impl Into<String>, exit_code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            stderr: stderr.into(),
        }
    }

    /// Create a new timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    /// Create a new system error
    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }
}
