//! core::paths
//!
//! Deterministic path derivation for clone targets and scaffold scripts.
//!
//! # Clone target
//!
//! A project is materialized as a *sibling* of the directory the tool is run
//! from: `<parent-of-cwd>/<repo-name>`. Running `gw init` from
//! `~/work/tools` with name `demo-app` yields `~/work/demo-app`.
//!
//! **Hard rule:** no code outside this module computes the clone target; the
//! derivation lives in exactly one place so the "skip clone if the directory
//! exists" check and the clone invocation can never disagree about the path.
//!
//! # Scaffold scripts
//!
//! Scaffold scripts ship alongside the installed binary in a `scripts/`
//! directory. `GROUNDWORK_SCRIPTS_DIR` overrides the location for tests and
//! for packagers that install scripts elsewhere.

use std::path::{Path, PathBuf};

use crate::core::types::RepoName;

/// Environment variable overriding the scaffold-script directory.
pub const SCRIPTS_DIR_ENV: &str = "GROUNDWORK_SCRIPTS_DIR";

/// Serializes tests across modules that mutate [`SCRIPTS_DIR_ENV`].
#[cfg(test)]
pub(crate) static SCRIPTS_ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Compute the clone target for a repository: `<parent-of-cwd>/<name>`.
///
/// When `cwd` has no parent (filesystem root), the clone lands directly
/// under `cwd` instead.
///
/// # Example
///
/// ```
/// use groundwork::core::paths::clone_target;
/// use groundwork::core::types::RepoName;
/// use std::path::Path;
///
/// let name = RepoName::new("demo-app").unwrap();
/// let target = clone_target(Path::new("/home/me/work/tools"), &name);
/// assert_eq!(target, Path::new("/home/me/work/demo-app"));
/// ```
pub fn clone_target(cwd: &Path, name: &RepoName) -> PathBuf {
    cwd.parent().unwrap_or(cwd).join(name.as_str())
}

/// Locate the directory containing the scaffold scripts.
///
/// Resolution order:
/// 1. `$GROUNDWORK_SCRIPTS_DIR` if set
/// 2. `scripts/` next to the running executable
///
/// The returned path is not verified to exist; callers check for the
/// specific script file they need and report a descriptive error.
pub fn scripts_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(SCRIPTS_DIR_ENV) {
        return PathBuf::from(dir);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join("scripts")))
        .unwrap_or_else(|| PathBuf::from("scripts"))
}
