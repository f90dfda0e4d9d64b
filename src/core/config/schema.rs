//! core::config::schema
//!
//! Configuration schema types.
//!
//! # User Config
//!
//! Located at (in order of precedence):
//! 1. `$GROUNDWORK_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/groundwork/config.toml`
//! 3. `~/.config/groundwork/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing so a typo in the config file
//! surfaces at load time rather than as a confusing prompt default.

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::{RemotePreference, Visibility};

/// User configuration.
///
/// # Example
///
/// ```toml
/// token = "ghp_xxxx"
///
/// [defaults]
/// visibility = "private"
/// stack = "express"
/// remote = "ssh"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    /// GitHub access token. `GITHUB_TOKEN` in the environment takes
    /// precedence over this value.
    pub token: Option<String>,

    /// Defaults applied when a value is neither given as a flag nor
    /// prompted for (non-interactive mode).
    pub defaults: Option<Defaults>,
}

impl UserConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(token) = &self.token {
            if token.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "token is empty; remove the key or run 'gw auth'".to_string(),
                ));
            }
        }
        if let Some(defaults) = &self.defaults {
            defaults.validate()?;
        }
        Ok(())
    }

    /// Default visibility, falling back to public.
    pub fn default_visibility(&self) -> Visibility {
        self.defaults
            .as_ref()
            .and_then(|d| d.visibility)
            .unwrap_or_default()
    }

    /// Default remote preference, falling back to ssh.
    pub fn default_remote(&self) -> RemotePreference {
        self.defaults
            .as_ref()
            .and_then(|d| d.remote)
            .unwrap_or_default()
    }

    /// Default stack name, if configured.
    pub fn default_stack(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.stack.as_deref())
    }
}

/// Default values for init parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Default repository visibility.
    pub visibility: Option<Visibility>,

    /// Default stack name (must name a registered stack).
    pub stack: Option<String>,

    /// Default clone URL scheme.
    pub remote: Option<RemotePreference>,
}

impl Defaults {
    /// Validate the default values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(stack) = &self.stack {
            if crate::scaffold::Stack::parse(stack).is_none() {
                return Err(ConfigError::InvalidValue(format!(
                    "unknown stack '{}', must be one of: {}",
                    stack,
                    crate::scaffold::Stack::names().join(", ")
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(UserConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
            token = "ghp_abc123"

            [defaults]
            visibility = "private"
            stack = "express"
            remote = "https"
        "#;
        let config: UserConfig = toml::from_str(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.token.as_deref(), Some("ghp_abc123"));
        assert_eq!(config.default_visibility(), Visibility::Private);
        assert_eq!(config.default_remote(), RemotePreference::Https);
        assert_eq!(config.default_stack(), Some("express"));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(toml::from_str::<UserConfig>("tokn = \"oops\"").is_err());
    }

    #[test]
    fn rejects_unknown_stack_default() {
        let config: UserConfig = toml::from_str("[defaults]\nstack = \"rails\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_token() {
        let config: UserConfig = toml::from_str("token = \"  \"").unwrap();
        assert!(config.validate().is_err());
    }
}
