//! Configuration module for the joost CLI.
//!
//! Settings live in `joost.toml`, one table per subcommand. Every field has
//! a default, so a partial file (or none at all) is fine.

use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{JoostError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "joost.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Grammar conversion settings.
    #[serde(default)]
    pub cfg: CfgConfig,

    /// Fixture materialization settings.
    #[serde(default)]
    pub fixtures: FixturesConfig,

    /// Batch check settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// `[cfg]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CfgConfig {
    /// Start symbol written to the `.cfg` output.
    #[serde(default = "default_start_symbol")]
    pub start_symbol: String,
}

/// `[fixtures]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixturesConfig {
    /// Directory for programs the language supports.
    #[serde(default = "default_valid_dir")]
    pub valid_dir: String,

    /// Directory for programs it rejects.
    #[serde(default = "default_bad_dir")]
    pub bad_dir: String,

    /// Extension of written fixture files.
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// `[check]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Worker threads.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: usize,

    /// Extension of files picked up from directories.
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_start_symbol() -> String {
    "Goal".to_string()
}

fn default_valid_dir() -> String {
    "valid".to_string()
}

fn default_bad_dir() -> String {
    "bad".to_string()
}

fn default_extension() -> String {
    "java".to_string()
}

/// One job per available CPU.
fn default_parallel_jobs() -> usize {
    get_num_cpus()
}

impl Default for CfgConfig {
    fn default() -> Self {
        Self {
            start_symbol: default_start_symbol(),
        }
    }
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            valid_dir: default_valid_dir(),
            bad_dir: default_bad_dir(),
            extension: default_extension(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            extension: default_extension(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/joost/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JoostError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| JoostError::file(path, e))?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            JoostError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("joost").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("joost").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            cfg: CfgConfig {
                start_symbol: "CompilationUnit".to_string(),
            },
            fixtures: FixturesConfig {
                valid_dir: "pass".to_string(),
                bad_dir: "fail".to_string(),
                extension: "joos".to_string(),
            },
            check: CheckConfig {
                jobs: 2,
                extension: "joos".to_string(),
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.cfg.start_symbol, "Goal");
        assert_eq!(config.fixtures.valid_dir, "valid");
        assert_eq!(config.fixtures.bad_dir, "bad");
        assert_eq!(config.fixtures.extension, "java");
        assert_eq!(config.check.extension, "java");
        assert!(config.check.jobs >= 1);
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);

        let original_config = create_test_config();
        let content = toml::to_string_pretty(&original_config).unwrap();
        std::fs::write(&config_path, content).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[check]\njobs = 3\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.check.jobs, 3);
        assert_eq!(config.check.extension, "java");
        assert_eq!(config.cfg, CfgConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[check]\njobs = \"many\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, JoostError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/joost.toml"));
        assert!(result.is_err());
    }
}
