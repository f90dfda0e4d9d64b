//! forge::factory
//!
//! Forge configuration and construction.
//!
//! # Design
//!
//! This module is the architecture boundary for credentials: token discovery
//! (environment, then config file) happens here and nowhere else. The
//! resolver and commands receive a constructed `dyn Forge` and never touch
//! ambient process state, which keeps them testable with [`MockForge`].
//!
//! [`MockForge`]: crate::forge::mock::MockForge

use super::github::{GitHubForge, DEFAULT_API_BASE};
use super::traits::{Forge, ForgeError};
use crate::core::config::Config;

/// Environment variable holding the GitHub access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Explicit configuration for constructing a forge.
///
/// Built once at command start; nothing downstream reads the environment.
#[derive(Clone)]
pub struct ForgeConfig {
    /// Bearer token for the hosting provider.
    pub token: String,
    /// API base URL.
    pub api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for ForgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForgeConfig")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl ForgeConfig {
    /// Build a forge configuration from the environment and user config.
    ///
    /// Token lookup order: `GITHUB_TOKEN`, then the config file's `token`
    /// key. This is the pre-flight credential check: it runs before any
    /// network call.
    ///
    /// # Errors
    ///
    /// Returns `ForgeError::AuthRequired` when no token can be found.
    pub fn discover(config: &Config) -> Result<Self, ForgeError> {
        let token = std::env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .or_else(|| config.user.token.clone())
            .ok_or(ForgeError::AuthRequired)?;

        Ok(Self {
            token,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }
}

/// Construct the forge for a configuration.
///
/// v1 always returns a [`GitHubForge`]; commands go through this function
/// instead of importing the implementation directly.
pub fn create_forge(config: &ForgeConfig) -> Box<dyn Forge> {
    Box::new(GitHubForge::with_api_base(
        &config.token,
        &config.api_base,
    ))
}
