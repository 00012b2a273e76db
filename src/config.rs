use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RepocheckError, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".repocheck.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub tools: ToolsConfig,
    pub exclude: ExcludeConfig,
    pub exec: ExecConfig,
}

/// External linter binaries and their fixed configuration files.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Candidate binary names for the Python linter, probed in order.
    pub pylint: Vec<String>,
    /// Configuration file passed to the Python linter via --rcfile.
    pub pylint_config: PathBuf,
    /// Candidate binary names for the JS linter, probed in order.
    pub jshint: Vec<String>,
    /// Configuration file passed to the JS linter via --config.
    pub jshint_config: PathBuf,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            pylint: vec!["pylint2".to_string(), "pylint".to_string()],
            pylint_config: PathBuf::from(".pylintrc"),
            jshint: vec!["jshint".to_string()],
            jshint_config: PathBuf::from(".jshintrc"),
        }
    }
}

/// Path exclusion patterns, evaluated against normalized root-relative paths.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExcludeConfig {
    /// Relative path prefixes to skip (e.g. the virtualenv directory).
    pub prefixes: Vec<String>,
    /// Literal substrings that mark vendored or generated files.
    pub substrings: Vec<String>,
}

impl Default for ExcludeConfig {
    fn default() -> Self {
        Self {
            prefixes: vec!["env/".to_string()],
            substrings: vec![
                "pyelliptic".to_string(),
                "vendors".to_string(),
                "bower_components".to_string(),
                ".min.js".to_string(),
            ],
        }
    }
}

/// File-name suffixes that must never carry an execute permission bit.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExecConfig {
    /// Matched case-insensitively against the end of the file name.
    pub non_executable_suffixes: Vec<String>,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            non_executable_suffixes: [
                "license",
                "readme",
                ".md",
                ".markdown",
                ".rst",
                ".txt",
                ".html",
                ".css",
                ".less",
                ".json",
                ".yml",
                ".yaml",
                ".cfg",
                ".ini",
                ".png",
                ".jpg",
                ".jpeg",
                ".gif",
                ".ico",
                ".svg",
                ".ttf",
                ".woff",
                ".eot",
                ".otf",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
        }
    }
}

impl Config {
    /// Load the effective configuration.
    ///
    /// An explicit `config_path` must exist and parse. Without one, the
    /// default file is used when present and built-in defaults otherwise.
    ///
    /// # Errors
    /// Returns an error if an explicitly given file is missing, unreadable,
    /// or not valid TOML.
    pub fn load(config_path: Option<&Path>, no_config: bool) -> Result<Self> {
        if no_config {
            return Ok(Self::default());
        }

        if let Some(path) = config_path {
            if !path.exists() {
                return Err(RepocheckError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_path(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load_from_path(default_path)
        } else {
            Ok(Self::default())
        }
    }

    fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
