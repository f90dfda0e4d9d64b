//! forge::github
//!
//! GitHub forge implementation using the REST API.
//!
//! # Design
//!
//! This module implements the `Forge` trait for GitHub:
//! - `GET /user` resolves the authenticated login (fetched once, cached)
//! - `GET /repos/{login}/{name}` looks up a repository; a 404 here is the
//!   one place that maps to `RepoLookup::NotFound`
//! - `POST /user/repos` creates a repository under the authenticated user
//!
//! # Authentication
//!
//! A bearer token is injected at construction via [`ForgeConfig`]; this
//! module never reads the process environment.
//!
//! # Rate Limiting
//!
//! GitHub has rate limits. This implementation returns
//! `ForgeError::RateLimited` when limits are hit and does not retry
//! (the whole run aborts, per the error-handling design).
//!
//! [`ForgeConfig`]: crate::forge::factory::ForgeConfig

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use super::traits::{Forge, ForgeError, RepoLookup, Repository};
use crate::core::types::{RepoName, RepoSpec};

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "groundwork-cli";

/// GitHub forge implementation.
///
/// Implements the `Forge` trait for GitHub using the REST API. The API base
/// is configurable for GitHub Enterprise and for tests.
pub struct GitHubForge {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token
    token: String,
    /// API base URL (configurable for GitHub Enterprise)
    api_base: String,
    /// Authenticated login, fetched lazily and cached for the run
    login: OnceCell<String>,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("api_base", &self.api_base)
            .field("login", &self.login.get())
            .finish()
    }
}

impl GitHubForge {
    /// Create a new GitHub forge with a bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Create a new GitHub forge against a non-default API base.
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self {
            client: Client::new(),
            token: token.into(),
            api_base,
            login: OnceCell::new(),
        }
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))
                .map_err(|_| ForgeError::AuthFailed("token contains invalid characters".into()))?,
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Resolve the authenticated user's login, fetching it on first use.
    async fn login(&self) -> Result<&str, ForgeError> {
        self.login
            .get_or_try_init(|| async {
                let url = format!("{}/user", self.api_base);
                let response = self
                    .client
                    .get(&url)
                    .headers(self.headers()?)
                    .send()
                    .await
                    .map_err(|e| ForgeError::NetworkError(e.to_string()))?;
                let user: GitHubUser = self.handle_response(response).await?;
                Ok(user.login)
            })
            .await
            .map(String::as_str)
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            self.handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        &self,
        response: Response,
        status: StatusCode,
    ) -> Result<T, ForgeError> {
        // Extract scope headers before consuming the response body.
        let required_scopes = response
            .headers()
            .get("X-Accepted-OAuth-Scopes")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        // Try to get error message from body
        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        Err(match status {
            StatusCode::UNAUTHORIZED => ForgeError::AuthFailed("Invalid or expired token".into()),
            StatusCode::FORBIDDEN => {
                let mut err_msg = format!("Permission denied: {}", message);
                if let Some(scopes) = required_scopes {
                    if !scopes.is_empty() {
                        err_msg.push_str(&format!(" [required scopes: {}]", scopes));
                    }
                }
                ForgeError::AuthFailed(err_msg)
            }
            StatusCode::NOT_FOUND => ForgeError::NotFound(message),
            StatusCode::UNPROCESSABLE_ENTITY => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited,
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn get_repo(&self, name: &RepoName) -> Result<RepoLookup, ForgeError> {
        let login = self.login().await?;
        let url = format!("{}/repos/{}/{}", self.api_base, login, name);

        let response = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        // 404 on this endpoint is the one true not-found; everything else
        // goes through the shared error mapping and propagates.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(RepoLookup::NotFound);
        }

        let repo: Repository = self.handle_response(response).await?;
        Ok(RepoLookup::Found(repo))
    }

    async fn create_repo(&self, spec: &RepoSpec) -> Result<Repository, ForgeError> {
        let url = format!("{}/user/repos", self.api_base);

        let body = CreateRepoBody {
            name: spec.name.as_str(),
            private: spec.visibility.is_private(),
            description: spec.description.as_deref(),
        };

        let response = self
            .client
            .post(&url)
            .headers(self.headers()?)
            .json(&body)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }
}

// --------------------------------------------------------------------------
// API Request/Response Types
// --------------------------------------------------------------------------

/// Request body for creating a repository.
#[derive(Serialize)]
struct CreateRepoBody<'a> {
    name: &'a str,
    private: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

/// Authenticated-user response format (subset).
#[derive(Deserialize)]
struct GitHubUser {
    login: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_trailing_slash_is_stripped() {
        let forge = GitHubForge::with_api_base("t", "https://ghe.example.com/api/v3/");
        assert_eq!(forge.api_base, "https://ghe.example.com/api/v3");
    }

    #[test]
    fn debug_does_not_leak_token() {
        let forge = GitHubForge::new("ghp_supersecret");
        let rendered = format!("{:?}", forge);
        assert!(!rendered.contains("ghp_supersecret"));
    }

    #[test]
    fn create_repo_body_omits_empty_description() {
        let body = CreateRepoBody {
            name: "demo-app",
            private: true,
            description: None,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"name":"demo-app","private":true}"#);
    }
}
