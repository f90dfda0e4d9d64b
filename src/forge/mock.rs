//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge provides a deterministic implementation of the `Forge`
//! trait for use in tests. It stores repositories in memory, allows
//! configuring failure scenarios, and records every operation so tests can
//! assert call counts (e.g. "no create call when the repository exists").
//!
//! # Example
//!
//! ```
//! use groundwork::forge::mock::MockForge;
//! use groundwork::forge::{Forge, RepoLookup};
//! use groundwork::core::types::{RepoName, RepoSpec, Visibility};
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::new();
//! let name = RepoName::new("demo-app").unwrap();
//!
//! assert!(matches!(
//!     forge.get_repo(&name).await.unwrap(),
//!     RepoLookup::NotFound
//! ));
//!
//! let spec = RepoSpec::new(name.clone(), Visibility::Private);
//! let repo = forge.create_repo(&spec).await.unwrap();
//! assert!(repo.private);
//!
//! assert!(matches!(
//!     forge.get_repo(&name).await.unwrap(),
//!     RepoLookup::Found(_)
//! ));
//! # });
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{Forge, ForgeError, RepoLookup, Repository};
use crate::core::types::{RepoName, RepoSpec, Visibility};

/// Owner login used for all mock repositories.
const MOCK_OWNER: &str = "mock-user";

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone, Default)]
pub struct MockForge {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockForgeInner>>,
}

/// Internal mutable state.
#[derive(Debug, Default)]
struct MockForgeInner {
    /// Stored repositories by name.
    repos: HashMap<String, Repository>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail get_repo with the given error.
    GetRepo(ForgeError),
    /// Fail create_repo with the given error.
    CreateRepo(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone)]
pub enum MockOperation {
    GetRepo { name: String },
    CreateRepo { name: String, private: bool },
}

impl MockForge {
    /// Create an empty mock forge.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the forge with an existing repository.
    pub fn with_repo(self, name: &str, visibility: Visibility) -> Self {
        {
            let mut inner = self.inner.lock().unwrap();
            inner
                .repos
                .insert(name.to_string(), make_repo(name, visibility.is_private()));
        }
        self
    }

    /// Configure an operation to fail.
    pub fn with_failure(self, fail_on: FailOn) -> Self {
        self.inner.lock().unwrap().fail_on = Some(fail_on);
        self
    }

    /// Get the recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.inner.lock().unwrap().operations.clone()
    }
}

/// Build a mock repository handle with both clone URLs populated.
fn make_repo(name: &str, private: bool) -> Repository {
    Repository {
        name: name.to_string(),
        full_name: format!("{}/{}", MOCK_OWNER, name),
        html_url: format!("https://github.com/{}/{}", MOCK_OWNER, name),
        clone_url: format!("https://github.com/{}/{}.git", MOCK_OWNER, name),
        ssh_url: Some(format!("git@github.com:{}/{}.git", MOCK_OWNER, name)),
        private,
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get_repo(&self, name: &RepoName) -> Result<RepoLookup, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::GetRepo {
            name: name.as_str().to_string(),
        });

        if let Some(FailOn::GetRepo(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        match inner.repos.get(name.as_str()) {
            Some(repo) => Ok(RepoLookup::Found(repo.clone())),
            None => Ok(RepoLookup::NotFound),
        }
    }

    async fn create_repo(&self, spec: &RepoSpec) -> Result<Repository, ForgeError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(MockOperation::CreateRepo {
            name: spec.name.as_str().to_string(),
            private: spec.visibility.is_private(),
        });

        if let Some(FailOn::CreateRepo(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        if inner.repos.contains_key(spec.name.as_str()) {
            return Err(ForgeError::ApiError {
                status: 422,
                message: "name already exists on this account".to_string(),
            });
        }

        let repo = make_repo(spec.name.as_str(), spec.visibility.is_private());
        inner
            .repos
            .insert(spec.name.as_str().to_string(), repo.clone());
        Ok(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_then_get_round_trips() {
        tokio_test::block_on(async {
            let forge = MockForge::new();
            let name = RepoName::new("demo-app").unwrap();
            let spec = RepoSpec::new(name.clone(), Visibility::Public);

            forge.create_repo(&spec).await.unwrap();
            match forge.get_repo(&name).await.unwrap() {
                RepoLookup::Found(repo) => {
                    assert_eq!(repo.full_name, "mock-user/demo-app");
                    assert!(!repo.private);
                }
                RepoLookup::NotFound => panic!("expected repo to exist"),
            }
        });
    }

    #[test]
    fn duplicate_create_fails_like_github() {
        tokio_test::block_on(async {
            let forge = MockForge::new().with_repo("demo-app", Visibility::Public);
            let spec = RepoSpec::new(RepoName::new("demo-app").unwrap(), Visibility::Public);
            let err = forge.create_repo(&spec).await.unwrap_err();
            assert!(matches!(err, ForgeError::ApiError { status: 422, .. }));
        });
    }

    #[test]
    fn operations_are_recorded_in_order() {
        tokio_test::block_on(async {
            let forge = MockForge::new();
            let name = RepoName::new("demo-app").unwrap();
            let _ = forge.get_repo(&name).await;
            let _ = forge
                .create_repo(&RepoSpec::new(name, Visibility::Private))
                .await;

            let ops = forge.operations();
            assert_eq!(ops.len(), 2);
            assert!(matches!(ops[0], MockOperation::GetRepo { .. }));
            assert!(matches!(ops[1], MockOperation::CreateRepo { .. }));
        });
    }
}
