//! forge::traits
//!
//! Forge trait definition for interacting with remote hosting services.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` to handle API errors gracefully.
//!
//! Lookup returns a tagged [`RepoLookup`] rather than folding "not found"
//! into the error channel. Only a true not-found may trigger repository
//! creation downstream; auth failures, rate limits, and network errors must
//! abort the run instead of silently creating a duplicate repository.
//!
//! # Example
//!
//! ```ignore
//! use groundwork::forge::{Forge, RepoLookup};
//! use groundwork::core::types::RepoName;
//!
//! async fn show(forge: &dyn Forge, name: &RepoName) -> Result<(), ForgeError> {
//!     match forge.get_repo(name).await? {
//!         RepoLookup::Found(repo) => println!("{}", repo.clone_url),
//!         RepoLookup::NotFound => println!("no such repository"),
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::core::types::{RemotePreference, RepoName, RepoSpec};

/// Errors from forge operations.
///
/// These error types map to common failure modes when interacting
/// with remote hosting services like GitHub.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication is required but not available.
    #[error("authentication required")]
    AuthRequired,

    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    ///
    /// Note: repository lookup reports absence via [`RepoLookup::NotFound`],
    /// not this variant. This variant covers unexpected 404s (e.g. a bad
    /// API base).
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited")]
    RateLimited,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Repository information returned from the forge.
///
/// This is the in-memory handle for a remote repository. It is returned by
/// value and never retained beyond a single run.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Repository name (without owner)
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    /// Web URL for viewing
    pub html_url: String,
    /// HTTPS clone URL; the forge always supplies this
    pub clone_url: String,
    /// SSH clone URL, when the forge supplies one
    #[serde(default)]
    pub ssh_url: Option<String>,
    /// Whether the repository is private
    #[serde(default)]
    pub private: bool,
}

impl Repository {
    /// The clone URL to use for the given preference.
    ///
    /// SSH preference falls back to HTTPS when no SSH URL is available.
    pub fn remote_url(&self, prefer: RemotePreference) -> &str {
        match prefer {
            RemotePreference::Ssh => self.ssh_url.as_deref().unwrap_or(&self.clone_url),
            RemotePreference::Https => &self.clone_url,
        }
    }
}

/// Tagged result of a repository lookup.
///
/// Distinguishing "the repository does not exist" from every other failure
/// is what makes find-or-create safe: only `NotFound` may trigger creation.
#[derive(Debug, Clone)]
pub enum RepoLookup {
    /// The repository exists and is visible to the authenticated user.
    Found(Repository),
    /// No repository with that name under the authenticated user.
    NotFound,
}

/// The Forge trait for interacting with remote hosting services.
///
/// v1 implements GitHub only. All operations act on repositories owned by
/// the authenticated identity.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Look up a repository by name under the authenticated user.
    ///
    /// # Returns
    ///
    /// `RepoLookup::Found` with the handle, or `RepoLookup::NotFound` when
    /// the forge reports the repository does not exist.
    ///
    /// # Errors
    ///
    /// - `AuthRequired` / `AuthFailed` for credential problems
    /// - `RateLimited` when the API limit is hit
    /// - `NetworkError` / `ApiError` for everything else
    async fn get_repo(&self, name: &RepoName) -> Result<RepoLookup, ForgeError>;

    /// Create a repository under the authenticated user.
    ///
    /// # Returns
    ///
    /// The created repository handle; `clone_url` is always populated.
    ///
    /// # Errors
    ///
    /// - `ApiError` with status 422 if the name is taken or rejected
    /// - `AuthFailed` if the token lacks the repo scope
    async fn create_repo(&self, spec: &RepoSpec) -> Result<Repository, ForgeError>;
}
