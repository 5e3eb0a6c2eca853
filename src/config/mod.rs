use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::constants::{config, program};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// External compiler settings
    #[serde(default)]
    pub compiler: CompilerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Compiler executable, either a bare name looked up on PATH or a path
    #[serde(default = "default_program")]
    pub program: PathBuf,

    /// Additional arguments passed after the build options
    #[serde(default)]
    pub args: Vec<String>,

    /// Additional environment variables for the compiler process
    #[serde(default)]
    pub env: HashMap<String, String>,
}

fn default_program() -> PathBuf {
    PathBuf::from(program::DEFAULT)
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: Vec::new(),
            env: HashMap::new(),
        }
    }
}

impl Config {
    /// Load the user config file, or defaults when there is none
    pub fn load() -> anyhow::Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join(config::DIR_NAME).join(config::FILE_NAME);
            if config_path.exists() {
                return Self::from_path(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
