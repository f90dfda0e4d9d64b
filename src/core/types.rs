//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoName`] - Validated repository name
//! - [`Visibility`] - Repository visibility (public/private)
//! - [`RemotePreference`] - Preferred clone URL scheme (ssh/https)
//! - [`RepoSpec`] - Everything needed to create a repository remotely
//!
//! # Validation
//!
//! [`RepoName`] enforces validity at construction time. Invalid values
//! cannot be represented, so downstream code never re-checks the name.
//!
//! # Examples
//!
//! ```
//! use groundwork::core::types::{RepoName, Visibility};
//!
//! let name = RepoName::new("demo-app").unwrap();
//! assert_eq!(name.as_str(), "demo-app");
//!
//! // Invalid constructions fail at creation time
//! assert!(RepoName::new("").is_err());
//! assert!(RepoName::new(".hidden").is_err());
//! assert!(RepoName::new("has space").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository name: {0}")]
    InvalidRepoName(String),

    #[error("unknown visibility '{0}' (expected 'public' or 'private')")]
    InvalidVisibility(String),

    #[error("unknown remote preference '{0}' (expected 'ssh' or 'https')")]
    InvalidRemotePreference(String),
}

/// Maximum length GitHub accepts for a repository name.
const MAX_REPO_NAME_LEN: usize = 100;

/// A validated repository name.
///
/// Repository names must be provider-legal identifiers:
/// - Cannot be empty or longer than 100 characters
/// - May contain ASCII letters, digits, `-`, `_`, and `.`
/// - Cannot start with `.` or `-`
/// - Cannot be exactly `.` or `..`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName(String);

impl RepoName {
    /// Create a new validated repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name is empty, too long,
    /// or contains characters the provider rejects.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();

        if name.is_empty() {
            return Err(TypeError::InvalidRepoName("name is empty".to_string()));
        }
        if name.len() > MAX_REPO_NAME_LEN {
            return Err(TypeError::InvalidRepoName(format!(
                "'{}' exceeds {} characters",
                name, MAX_REPO_NAME_LEN
            )));
        }
        if name == "." || name == ".." {
            return Err(TypeError::InvalidRepoName(format!(
                "'{}' is a reserved name",
                name
            )));
        }
        if name.starts_with('.') || name.starts_with('-') {
            return Err(TypeError::InvalidRepoName(format!(
                "'{}' starts with '{}'",
                name,
                &name[..1]
            )));
        }
        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(TypeError::InvalidRepoName(format!(
                "'{}' contains '{}'",
                name, bad
            )));
        }

        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for RepoName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoName> for String {
    fn from(name: RepoName) -> Self {
        name.0
    }
}

impl FromStr for RepoName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Repository visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Anyone can see the repository.
    #[default]
    Public,
    /// Only the owner and collaborators can see the repository.
    Private,
}

impl Visibility {
    /// Whether this maps to the API's `private: true`.
    pub fn is_private(&self) -> bool {
        matches!(self, Visibility::Private)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

impl FromStr for Visibility {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Visibility::Public),
            "private" => Ok(Visibility::Private),
            other => Err(TypeError::InvalidVisibility(other.to_string())),
        }
    }
}

/// Which clone URL to prefer when materializing a repository locally.
///
/// SSH is the default; it falls back to HTTPS when the forge does not
/// supply an SSH-style URL for the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePreference {
    /// Prefer the `git@host:owner/repo.git` URL.
    #[default]
    Ssh,
    /// Always use the `https://host/owner/repo.git` URL.
    Https,
}

impl fmt::Display for RemotePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemotePreference::Ssh => write!(f, "ssh"),
            RemotePreference::Https => write!(f, "https"),
        }
    }
}

impl FromStr for RemotePreference {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ssh" => Ok(RemotePreference::Ssh),
            "https" => Ok(RemotePreference::Https),
            other => Err(TypeError::InvalidRemotePreference(other.to_string())),
        }
    }
}

/// Everything needed to create a repository remotely.
///
/// Built once from operator input (flags or prompts) and consumed by the
/// resolver; not retained after the run.
#[derive(Debug, Clone)]
pub struct RepoSpec {
    /// Validated repository name.
    pub name: RepoName,
    /// Requested visibility.
    pub visibility: Visibility,
    /// Optional free-text description for the remote repository.
    pub description: Option<String>,
}

impl RepoSpec {
    /// Create a spec with no description.
    pub fn new(name: RepoName, visibility: Visibility) -> Self {
        Self {
            name,
            visibility,
            description: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_repo_names() {
        for name in ["demo-app", "a", "my_repo", "v1.2.3", "Repo-Name_0"] {
            assert!(RepoName::new(name).is_ok(), "{} should be valid", name);
        }
    }

    #[test]
    fn invalid_repo_names() {
        for name in ["", ".", "..", ".hidden", "-leading", "has space", "a/b", "emoji🌮"] {
            assert!(RepoName::new(name).is_err(), "{} should be invalid", name);
        }
    }

    #[test]
    fn repo_name_length_limit() {
        let ok = "a".repeat(100);
        assert!(RepoName::new(ok).is_ok());
        let too_long = "a".repeat(101);
        assert!(RepoName::new(too_long).is_err());
    }

    #[test]
    fn visibility_parse_and_display() {
        assert_eq!("public".parse::<Visibility>().unwrap(), Visibility::Public);
        assert_eq!(
            "Private".parse::<Visibility>().unwrap(),
            Visibility::Private
        );
        assert!("internal".parse::<Visibility>().is_err());
        assert_eq!(format!("{}", Visibility::Private), "private");
        assert!(Visibility::Private.is_private());
        assert!(!Visibility::Public.is_private());
    }

    #[test]
    fn remote_preference_parse() {
        assert_eq!(
            "ssh".parse::<RemotePreference>().unwrap(),
            RemotePreference::Ssh
        );
        assert_eq!(
            "HTTPS".parse::<RemotePreference>().unwrap(),
            RemotePreference::Https
        );
        assert!("ftp".parse::<RemotePreference>().is_err());
    }

    #[test]
    fn repo_name_serde_round_trip() {
        let name = RepoName::new("demo-app").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"demo-app\"");
        let back: RepoName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);

        // Deserialization enforces validation too
        assert!(serde_json::from_str::<RepoName>("\"bad name\"").is_err());
    }
}
