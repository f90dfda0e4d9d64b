//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Groundwork has a single configuration scope: the user config file. It
//! holds the GitHub token (unless `GITHUB_TOKEN` is set) and defaults for
//! init parameters.
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$GROUNDWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/groundwork/config.toml`
//! 3. `~/.config/groundwork/config.toml` (canonical write location)
//!
//! A missing config file is not an error; defaults apply.
//!
//! # Example
//!
//! ```no_run
//! use groundwork::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("default visibility: {}", config.user.default_visibility());
//! ```

pub mod schema;

pub use schema::{Defaults, UserConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "GROUNDWORK_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration plus where it came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// The parsed user configuration.
    pub user: UserConfig,
    /// Path the config was loaded from, if a file existed.
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        for path in Self::search_paths()? {
            if path.exists() {
                let user = Self::read_config(&path)?;
                user.validate()?;
                return Ok(Config {
                    user,
                    path: Some(path),
                });
            }
        }
        Ok(Config::default())
    }

    /// Path the config was loaded from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The canonical location for writing the config file.
    ///
    /// If a config file was already loaded, writes go back to it; otherwise
    /// the first search location that can be determined is used.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        Self::search_paths()?
            .into_iter()
            .next()
            .ok_or(ConfigError::NoHomeDir)
    }

    /// Persist the configuration to its canonical location.
    ///
    /// The file is created with mode 0600 on Unix because it may hold the
    /// access token.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = self.write_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(&self.user).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                message: e.to_string(),
            })?;

        fs::write(&path, contents).map_err(|e| ConfigError::WriteError {
            path: path.clone(),
            source: e,
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, perms).map_err(|e| ConfigError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        }

        Ok(path)
    }

    /// Candidate config locations in precedence order.
    fn search_paths() -> Result<Vec<PathBuf>, ConfigError> {
        let mut paths = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(path));
            // An explicit override is authoritative; do not fall through.
            return Ok(paths);
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_home).join("groundwork/config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config/groundwork/config.toml"));
        }

        if paths.is_empty() {
            return Err(ConfigError::NoHomeDir);
        }
        Ok(paths)
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<UserConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Serializes tests that mutate CONFIG_PATH_ENV.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn with_config_env<T>(path: &Path, f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var(CONFIG_PATH_ENV, path);
        let result = f();
        std::env::remove_var(CONFIG_PATH_ENV);
        result
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let config = with_config_env(&path, || Config::load().unwrap());
        assert!(config.path().is_none());
        assert!(config.user.token.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        with_config_env(&path, || {
            let mut config = Config::load().unwrap();
            config.user.token = Some("ghp_test".to_string());
            let written = config.save().unwrap();
            assert_eq!(written, path);

            let reloaded = Config::load().unwrap();
            assert_eq!(reloaded.user.token.as_deref(), Some("ghp_test"));
            assert_eq!(reloaded.path(), Some(path.as_path()));
        });
    }

    #[cfg(unix)]
    #[test]
    fn saved_config_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        with_config_env(&path, || {
            let mut config = Config::load().unwrap();
            config.user.token = Some("ghp_test".to_string());
            config.save().unwrap();
        });

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn parse_error_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "not = [valid").unwrap();

        let err = with_config_env(&path, || Config::load().unwrap_err());
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
