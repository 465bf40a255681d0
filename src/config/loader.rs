// file: src/config/loader.rs
// version: 1.0.0
// guid: f2a68b35-7e92-4a43-d256-a3c8ef69ab1d

//! Configuration file loading and environment variable substitution

use super::WorkflowConfig;
use crate::Result;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Default configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "devflow.yaml";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Resolve the workflow configuration.
    ///
    /// An explicit path must exist. With no path, `devflow.yaml` in the
    /// working directory wins, then the user configuration directory
    /// (`<config dir>/devflow/devflow.yaml`), then defaults.
    pub fn resolve(&self, explicit_path: Option<&str>) -> Result<WorkflowConfig> {
        if let Some(path) = explicit_path {
            let expanded = shellexpand::tilde(path).into_owned();
            return self.load_file(&expanded);
        }

        if Path::new(DEFAULT_CONFIG_FILE).is_file() {
            return self.load_file(DEFAULT_CONFIG_FILE);
        }

        if let Some(user_path) = Self::user_config_path() {
            if user_path.is_file() {
                return self.load_file(&user_path);
            }
        }

        let config = WorkflowConfig::default();
        config.validate()?;
        Ok(config)
    }

    /// Location of the per-user configuration file, if a config dir exists
    pub fn user_config_path() -> Option<std::path::PathBuf> {
        dirs::config_dir().map(|dir| dir.join("devflow").join(DEFAULT_CONFIG_FILE))
    }

    /// Load workflow configuration from a YAML file
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<WorkflowConfig> {
        let content = fs::read_to_string(&path).map_err(|e| {
            crate::error::DevflowError::Config(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let expanded = self.expand_env_vars(&content)?;
        let config: WorkflowConfig = serde_yaml::from_str(&expanded)?;

        config.validate()?;

        Ok(config)
    }

    /// Expand `${VAR}` environment references in configuration content
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            crate::error::DevflowError::Config(format!("Invalid regex pattern: {}", e))
        })?;

        let mut result = content.to_string();
        let mut missing_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else {
                missing_vars.push(var_name.to_string());
            }
        }

        if !missing_vars.is_empty() {
            return Err(crate::error::DevflowError::Config(format!(
                "Missing environment variables in config: {}",
                missing_vars.join(", ")
            )));
        }

        Ok(result)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
