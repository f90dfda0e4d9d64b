//! scaffold
//!
//! Stack registry and scaffold-script execution.
//!
//! # Design
//!
//! Each stack is backed by an external shell script shipped with the tool
//! (see [`core::paths::scripts_dir`]). Scaffolding a clone means running
//! that script through `bash` with the clone as its working directory and
//! surfacing the script's exit status unchanged.
//!
//! Stacks advertised in the registry but not yet backed by a script are
//! *unavailable*: selecting one is an explicit error listing what is
//! available, never a silent no-op.
//!
//! [`core::paths::scripts_dir`]: crate::core::paths::scripts_dir

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

use crate::core::paths;
use crate::runner::{self, ProcessRunner, RunRequest, RunnerError};

/// Errors from scaffold operations.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("unknown stack '{name}'. available: {known}", name = .0, known = Stack::names().join(", "))]
    Unknown(String),

    #[error("stack '{stack}' is not implemented yet. available: {known}", stack = .0, known = available_names().join(", "))]
    Unsupported(Stack),

    #[error("scaffold script not found: {0}")]
    MissingScript(PathBuf),

    #[error("scaffold script failed: {0}")]
    ScriptFailed(#[from] RunnerError),
}

/// A technology stack the tool can scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stack {
    /// Express + TypeScript backend.
    Express,
    /// Next.js frontend. Registered but not yet implemented.
    NextJs,
}

impl Stack {
    /// All registered stacks, available or not.
    pub fn all() -> &'static [Stack] {
        &[Stack::Express, Stack::NextJs]
    }

    /// Registry names, for error messages and prompt choices.
    pub fn names() -> Vec<&'static str> {
        Stack::all().iter().map(|s| s.name()).collect()
    }

    /// The registry name of this stack.
    pub fn name(&self) -> &'static str {
        match self {
            Stack::Express => "express",
            Stack::NextJs => "nextjs",
        }
    }

    /// Parse a registry name, case-insensitively.
    pub fn parse(name: &str) -> Option<Stack> {
        Stack::all()
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Whether a scaffold script backs this stack.
    pub fn is_available(&self) -> bool {
        match self {
            Stack::Express => true,
            Stack::NextJs => false,
        }
    }

    /// The script filename for this stack, relative to the scripts dir.
    fn script_name(&self) -> String {
        format!("init_{}.sh", self.name())
    }
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Stack {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stack::parse(s).ok_or_else(|| ScaffoldError::Unknown(s.to_string()))
    }
}

/// Names of stacks that can actually be scaffolded.
pub fn available_names() -> Vec<&'static str> {
    Stack::all()
        .iter()
        .filter(|s| s.is_available())
        .map(|s| s.name())
        .collect()
}

/// Resolve the script path for a stack.
///
/// # Errors
///
/// - `ScaffoldError::Unsupported` for a registered-but-unbacked stack
/// - `ScaffoldError::MissingScript` when the script file does not exist
///   (checked before execution so the error names the path)
pub fn script_path(stack: Stack) -> Result<PathBuf, ScaffoldError> {
    if !stack.is_available() {
        return Err(ScaffoldError::Unsupported(stack));
    }

    let path = paths::scripts_dir().join(stack.script_name());
    if !path.is_file() {
        return Err(ScaffoldError::MissingScript(path));
    }
    Ok(path)
}

/// Run a stack's scaffold script inside the clone.
///
/// The script runs through `bash` (PATH lookup, `/bin/bash` fallback) with
/// `project_root` as its working directory.
///
/// # Errors
///
/// Any [`ScaffoldError`]; a nonzero script exit surfaces as `ScriptFailed`
/// carrying the child's status.
pub fn run(
    runner: &dyn ProcessRunner,
    stack: Stack,
    project_root: &Path,
) -> Result<(), ScaffoldError> {
    let script = script_path(stack)?;
    let shell = runner::find_shell();

    let request = RunRequest::new(
        shell.to_string_lossy(),
        &[&script.to_string_lossy()],
    )
    .in_dir(project_root);

    runner.run(&request)?;
    Ok(())
}
