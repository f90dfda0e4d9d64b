//! workspace
//!
//! Ensures a local clone of a resolved repository exists.
//!
//! # Design
//!
//! The clone target is the deterministic sibling path from
//! [`core::paths::clone_target`]. If that directory already exists it is
//! trusted as the clone and no subprocess runs; its contents and remote are
//! not verified. Otherwise `git clone <url> <path>` runs exactly once
//! through the [`ProcessRunner`].
//!
//! A failed clone may leave a partial directory behind; it is not cleaned
//! up, matching the no-rollback error policy. Re-running after fixing the
//! cause is safe only if the partial directory is removed first, which the
//! error message tells the operator to do.
//!
//! [`core::paths::clone_target`]: crate::core::paths::clone_target
//! [`ProcessRunner`]: crate::runner::ProcessRunner

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::paths;
use crate::core::types::{RemotePreference, RepoName};
use crate::forge::Repository;
use crate::runner::{ProcessRunner, RunRequest, RunnerError};

/// Errors from materializing a clone.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("git clone failed (a partial clone may remain at {path}; remove it and re-run): {source}")]
    CloneFailed {
        path: PathBuf,
        #[source]
        source: RunnerError,
    },
}

/// Outcome of materializing a repository locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Path to the local clone.
    pub path: PathBuf,
    /// Whether this run performed the clone (false: directory already existed).
    pub cloned: bool,
}

/// Ensure a local clone of `repo` exists as a sibling of `cwd`.
///
/// # Errors
///
/// Returns `WorkspaceError::CloneFailed` when the clone subprocess fails.
/// An existing directory is never an error.
pub fn materialize(
    runner: &dyn ProcessRunner,
    repo: &Repository,
    name: &RepoName,
    prefer: RemotePreference,
    cwd: &Path,
) -> Result<Materialized, WorkspaceError> {
    let target = paths::clone_target(cwd, name);

    if target.exists() {
        return Ok(Materialized {
            path: target,
            cloned: false,
        });
    }

    let url = repo.remote_url(prefer);
    let request = RunRequest::new("git", &["clone", url, &target.to_string_lossy()]);
    runner
        .run(&request)
        .map_err(|source| WorkspaceError::CloneFailed {
            path: target.clone(),
            source,
        })?;

    Ok(Materialized {
        path: target,
        cloned: true,
    })
}
