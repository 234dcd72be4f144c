use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::ProjectUrl;
use crate::error::{Result, SvnVersionError};

/// Default name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "svnversion.toml";

/// Represents the complete configuration for svn-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub vcs: VcsConfig,
}

/// Version control settings.
///
/// `url` overrides the project url normally derived from `svn info`; it is
/// required for exported trees that carry no `.svn` metadata.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct VcsConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Settings for exported (non working copy) trees.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ExportConfig {
    /// File holding frozen `svn info` output, relative to the resolved directory.
    #[serde(default = "default_revfile")]
    pub revfile: String,
}

fn default_revfile() -> String {
    "REVISION".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            revfile: default_revfile(),
        }
    }
}

impl Config {
    /// Returns the configured project url, normalized, if any.
    pub fn project_url(&self) -> Option<ProjectUrl> {
        self.vcs
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .map(ProjectUrl::from_configured)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `svnversion.toml` in current directory
/// 3. `.svnversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses a TOML configuration document.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| SvnVersionError::config(e.to_string()))
}
