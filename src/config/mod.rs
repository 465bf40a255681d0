// file: src/config/mod.rs
// version: 1.0.0
// guid: e1f57a24-6d81-4f32-c145-92b7de58fa0c

//! Configuration module for the Devflow Agent
//!
//! Handles loading and validation of the workflow configuration. Every field
//! has a default so the agent runs with no configuration file present.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level workflow configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub python: PythonConfig,

    #[serde(default)]
    pub tools: ToolingConfig,

    #[serde(default)]
    pub package: PackageConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    #[serde(default)]
    pub gui: GuiConfig,

    #[serde(default)]
    pub docker: DockerConfig,

    /// Optional per-step timeout for foreground steps, in seconds
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Interpreter and virtual-environment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PythonConfig {
    /// System interpreter used to create virtual environments
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Virtual environment directory
    #[serde(default = "default_venv_dir")]
    pub venv_dir: String,

    /// Requirements files installed into the environment, in order
    #[serde(default = "default_requirements")]
    pub requirements: Vec<String>,
}

/// Formatter, linter and test runner, each invoked as `python -m <tool>`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolingConfig {
    #[serde(default = "default_formatter")]
    pub formatter: String,

    #[serde(default = "default_linter")]
    pub linter: String,

    #[serde(default = "default_test_runner")]
    pub test_runner: String,

    /// Extra arguments appended to the test runner invocation
    #[serde(default)]
    pub test_args: Vec<String>,
}

/// Distributable package settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Import/distribution name of the project package
    #[serde(default = "default_package_name")]
    pub name: String,

    /// Output directory for built sdists and wheels
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

/// Server process settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Module run as `python -m <module>`
    #[serde(default = "default_server_module")]
    pub module: String,

    /// TCP port the server listens on
    #[serde(default = "default_server_port")]
    pub port: u16,

    /// Fixed delay granted to a background server start before proceeding
    #[serde(default = "default_startup_delay")]
    pub startup_delay_secs: u64,
}

/// Benchmark settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default = "default_benchmark_module")]
    pub module: String,
}

/// Desktop GUI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuiConfig {
    #[serde(default = "default_gui_module")]
    pub module: String,
}

/// Container build/run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    #[serde(default = "default_docker_engine")]
    pub engine: String,

    #[serde(default = "default_docker_image")]
    pub image: String,

    #[serde(default = "default_docker_tag")]
    pub tag: String,

    /// Build context directory
    #[serde(default = "default_docker_context")]
    pub context: String,

    /// Port published as host:container when running the image
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_venv_dir() -> String {
    ".venv".to_string()
}

fn default_requirements() -> Vec<String> {
    vec!["requirements.txt".to_string()]
}

fn default_formatter() -> String {
    "black".to_string()
}

fn default_linter() -> String {
    "flake8".to_string()
}

fn default_test_runner() -> String {
    "pytest".to_string()
}

fn default_package_name() -> String {
    "app".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

fn default_server_module() -> String {
    format!("{}.server", default_package_name())
}

fn default_server_port() -> u16 {
    8000
}

fn default_startup_delay() -> u64 {
    3
}

fn default_benchmark_module() -> String {
    "tests.benchmark".to_string()
}

fn default_gui_module() -> String {
    format!("{}.gui", default_package_name())
}

fn default_docker_engine() -> String {
    "docker".to_string()
}

fn default_docker_image() -> String {
    default_package_name()
}

fn default_docker_tag() -> String {
    "latest".to_string()
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            venv_dir: default_venv_dir(),
            requirements: default_requirements(),
        }
    }
}

impl Default for ToolingConfig {
    fn default() -> Self {
        Self {
            formatter: default_formatter(),
            linter: default_linter(),
            test_runner: default_test_runner(),
            test_args: Vec::new(),
        }
    }
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: default_package_name(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            module: default_server_module(),
            port: default_server_port(),
            startup_delay_secs: default_startup_delay(),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            module: default_benchmark_module(),
        }
    }
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            module: default_gui_module(),
        }
    }
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            engine: default_docker_engine(),
            image: default_docker_image(),
            tag: default_docker_tag(),
            context: default_docker_context(),
            port: default_server_port(),
        }
    }
}

fn default_docker_context() -> String {
    ".".to_string()
}

impl WorkflowConfig {
    /// Validate the configuration after deserialization
    pub fn validate(&self) -> crate::Result<()> {
        if self.python.interpreter.trim().is_empty() {
            return Err(crate::error::DevflowError::config(
                "python.interpreter must not be empty",
            ));
        }
        if self.python.venv_dir.trim().is_empty() {
            return Err(crate::error::DevflowError::config(
                "python.venv_dir must not be empty",
            ));
        }
        if self.package.name.trim().is_empty() {
            return Err(crate::error::DevflowError::config(
                "package.name must not be empty",
            ));
        }
        if self.server.port == 0 {
            return Err(crate::error::DevflowError::config(
                "server.port must be nonzero",
            ));
        }
        if self.docker.port == 0 {
            return Err(crate::error::DevflowError::config(
                "docker.port must be nonzero",
            ));
        }
        if self.server.startup_delay_secs > 300 {
            return Err(crate::error::DevflowError::config(format!(
                "server.startup_delay_secs too large: {}",
                self.server.startup_delay_secs
            )));
        }
        for tool in [
            &self.tools.formatter,
            &self.tools.linter,
            &self.tools.test_runner,
        ] {
            if tool.trim().is_empty() {
                return Err(crate::error::DevflowError::config(
                    "tools entries must not be empty",
                ));
            }
        }
        Ok(())
    }

    /// Interpreter inside the managed virtual environment
    pub fn venv_python(&self) -> String {
        PathBuf::from(&self.python.venv_dir)
            .join("bin")
            .join("python")
            .to_string_lossy()
            .into_owned()
    }

    /// Interpreter inside the throwaway packaging environment
    pub fn package_venv_dir(&self) -> String {
        format!("{}-pkg", self.python.venv_dir)
    }

    /// Full image reference for the container workflow
    pub fn docker_image_ref(&self) -> String {
        format!("{}:{}", self.docker.image, self.docker.tag)
    }
}
