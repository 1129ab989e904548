// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration discovery and loading.

use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

use super::schema::RepoconvConfig;

/// Configuration file names to search for, in order of priority.
const CONFIG_FILES: &[&str] = &["repoconv.toml", ".repoconv.toml", ".config/repoconv.toml"];

/// Find the configuration file starting from a specific directory.
///
/// Walks up from `start_dir`, then falls back to the home directory and the
/// platform config directory.
pub fn find_config_file_from(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        for config_name in CONFIG_FILES {
            let config_path = current.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            break;
        }
    }

    if let Some(home) = dirs::home_dir() {
        for config_name in CONFIG_FILES {
            let config_path = home.join(config_name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("repoconv").join("config.toml");
        if config_path.is_file() {
            return Some(config_path);
        }
    }

    None
}

/// Load the configuration that applies to `root`, or defaults.
pub fn load_config_for(root: &Path) -> Result<RepoconvConfig> {
    match find_config_file_from(root) {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(RepoconvConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<RepoconvConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to read config file: {}", e),
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<RepoconvConfig> {
    let config: RepoconvConfig = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        message: format!("Failed to parse TOML: {}", e),
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &RepoconvConfig) -> Result<()> {
    if config.git.max_commits == 0 && config.git.enabled {
        return Err(ConfigError::InvalidValue {
            key: "git.max_commits".to_string(),
            message: "must be greater than zero while git is enabled".to_string(),
        }
        .into());
    }

    for pattern in &config.inventory.exclude {
        if let Err(e) = glob::Pattern::new(pattern) {
            return Err(ConfigError::InvalidValue {
                key: "inventory.exclude".to_string(),
                message: format!("{}: {}", pattern, e),
            }
            .into());
        }
    }

    Ok(())
}
