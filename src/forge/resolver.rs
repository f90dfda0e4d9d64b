//! forge::resolver
//!
//! Find-or-create resolution of a remote repository.
//!
//! # Design
//!
//! `resolve` is the only place that decides between reusing an existing
//! repository and creating a new one. The decision is driven by the tagged
//! [`RepoLookup`] result: only a true not-found triggers creation. An auth
//! failure, rate limit, or network error during lookup aborts the run
//! instead of racing a create call against an unknown remote state.

use super::traits::{Forge, ForgeError, RepoLookup, Repository};
use crate::core::types::RepoSpec;

/// Outcome of resolving a repository spec against the forge.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// The remote repository handle.
    pub repo: Repository,
    /// Whether the repository was created by this run.
    pub created: bool,
}

/// Find a repository named by `spec`, creating it when absent.
///
/// # Side effects
///
/// One lookup round trip; a second, creation round trip only when the
/// lookup reports not-found.
///
/// # Errors
///
/// Any lookup or creation failure other than not-found propagates
/// unmodified.
pub async fn resolve(forge: &dyn Forge, spec: &RepoSpec) -> Result<Resolved, ForgeError> {
    match forge.get_repo(&spec.name).await? {
        RepoLookup::Found(repo) => Ok(Resolved {
            repo,
            created: false,
        }),
        RepoLookup::NotFound => {
            let repo = forge.create_repo(spec).await?;
            Ok(Resolved {
                repo,
                created: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{RepoName, Visibility};
    use crate::forge::mock::{FailOn, MockForge, MockOperation};

    fn spec(name: &str, visibility: Visibility) -> RepoSpec {
        RepoSpec::new(RepoName::new(name).unwrap(), visibility)
    }

    #[test]
    fn creates_when_absent() {
        tokio_test::block_on(async {
            let forge = MockForge::new();
            let resolved = resolve(&forge, &spec("demo-app", Visibility::Private))
                .await
                .unwrap();

            assert!(resolved.created);
            assert!(resolved.repo.private);
            assert!(!resolved.repo.clone_url.is_empty());

            let ops = forge.operations();
            assert_eq!(ops.len(), 2);
            assert!(matches!(ops[0], MockOperation::GetRepo { .. }));
            assert!(matches!(
                ops[1],
                MockOperation::CreateRepo { private: true, .. }
            ));
        });
    }

    #[test]
    fn reuses_when_present() {
        tokio_test::block_on(async {
            let forge = MockForge::new().with_repo("demo-app", Visibility::Public);
            let resolved = resolve(&forge, &spec("demo-app", Visibility::Private))
                .await
                .unwrap();

            assert!(!resolved.created);
            assert!(!resolved.repo.clone_url.is_empty());

            // No creation call was made
            let creates = forge
                .operations()
                .iter()
                .filter(|op| matches!(op, MockOperation::CreateRepo { .. }))
                .count();
            assert_eq!(creates, 0);
        });
    }

    #[test]
    fn lookup_failures_do_not_create() {
        for err in [
            ForgeError::RateLimited,
            ForgeError::AuthFailed("expired".into()),
            ForgeError::NetworkError("connection refused".into()),
        ] {
            tokio_test::block_on(async {
                let forge = MockForge::new().with_failure(FailOn::GetRepo(err.clone()));
                let result = resolve(&forge, &spec("demo-app", Visibility::Public)).await;

                assert!(result.is_err());
                let creates = forge
                    .operations()
                    .iter()
                    .filter(|op| matches!(op, MockOperation::CreateRepo { .. }))
                    .count();
                assert_eq!(creates, 0, "no create after {:?}", err);
            });
        }
    }

    #[test]
    fn creation_failure_propagates() {
        tokio_test::block_on(async {
            let forge = MockForge::new().with_failure(FailOn::CreateRepo(ForgeError::ApiError {
                status: 422,
                message: "name already exists on this account".into(),
            }));
            let err = resolve(&forge, &spec("demo-app", Visibility::Public))
                .await
                .unwrap_err();
            assert!(matches!(err, ForgeError::ApiError { status: 422, .. }));
        });
    }
}
