//! runner
//!
//! Single interface for all subprocess execution.
//!
//! # Design
//!
//! Everything groundwork shells out to - `git clone` and the scaffold
//! scripts - goes through the [`ProcessRunner`] trait. The system
//! implementation wraps `std::process::Command`; tests substitute
//! [`MockRunner`] to assert exactly which subprocesses a flow would spawn
//! without spawning any.
//!
//! Output is captured, not streamed. A nonzero exit becomes
//! [`RunnerError::Failed`] carrying the child's status and stderr, so the
//! operator sees what the child printed and `main` can propagate the exact
//! exit code.

use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, Mutex};

use thiserror::Error;

/// Well-known shell location used when PATH lookup fails.
const FALLBACK_SHELL: &str = "/bin/bash";

/// Errors from subprocess execution.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The child could not be spawned at all.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    /// The child ran and exited nonzero.
    #[error("{program} exited with status {status}:\n{stderr}")]
    Failed {
        program: String,
        status: i32,
        stderr: String,
    },
}

impl RunnerError {
    /// The child's exit status, when one exists.
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            RunnerError::Failed { status, .. } => Some(*status),
            RunnerError::Spawn { .. } => None,
        }
    }
}

/// A subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Executable to run (name resolved via PATH, or an absolute path).
    pub program: String,
    /// Arguments, unsplit and unescaped.
    pub args: Vec<String>,
    /// Working directory override, if any.
    pub cwd: Option<PathBuf>,
}

impl RunRequest {
    /// Build a request from a program and its arguments.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: None,
        }
    }

    /// Set the working directory.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

/// Captured output of a completed subprocess.
#[derive(Debug, Clone, Default)]
pub struct RunOutput {
    /// Exit status (0 for success).
    pub status: i32,
    /// Captured stdout.
    pub stdout: String,
    /// Captured stderr.
    pub stderr: String,
}

/// The subprocess execution capability.
///
/// Implementations must be `Send + Sync`; the system implementation is
/// stateless and the mock guards its state with a mutex.
pub trait ProcessRunner: Send + Sync {
    /// Run a subprocess to completion, capturing its output.
    ///
    /// # Errors
    ///
    /// - `RunnerError::Spawn` when the executable cannot be started
    /// - `RunnerError::Failed` when it exits nonzero
    fn run(&self, request: &RunRequest) -> Result<RunOutput, RunnerError>;
}

/// Real subprocess execution via `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, request: &RunRequest) -> Result<RunOutput, RunnerError> {
        let mut command = Command::new(&request.program);
        command.args(&request.args);
        if let Some(cwd) = &request.cwd {
            command.current_dir(cwd);
        }

        let output = command.output().map_err(|e| RunnerError::Spawn {
            program: request.program.clone(),
            source: e,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        // A signal-terminated child has no code; report it as 1.
        let status = output.status.code().unwrap_or(1);

        if !output.status.success() {
            return Err(RunnerError::Failed {
                program: request.program.clone(),
                status,
                stderr,
            });
        }

        Ok(RunOutput {
            status,
            stdout,
            stderr,
        })
    }
}

/// Locate `bash`: first on PATH, then the well-known fixed location.
///
/// The returned path is not guaranteed to exist when neither source yields
/// one; execution will then fail with a spawn error naming the shell.
pub fn find_shell() -> PathBuf {
    if let Some(paths) = std::env::var_os("PATH") {
        for dir in std::env::split_paths(&paths) {
            let candidate = dir.join("bash");
            if candidate.is_file() {
                return candidate;
            }
        }
    }
    PathBuf::from(FALLBACK_SHELL)
}

/// Mock runner for testing.
///
/// Records every request and returns scripted results. By default every
/// invocation succeeds with empty output.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    inner: Arc<Mutex<MockRunnerInner>>,
}

#[derive(Debug, Default)]
struct MockRunnerInner {
    /// Recorded requests in invocation order.
    requests: Vec<RunRequest>,
    /// Program name that should fail, with the status to fail with.
    fail_program: Option<(String, i32)>,
}

impl MockRunner {
    /// Create a mock runner where every invocation succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make invocations of `program` fail with the given exit status.
    pub fn failing(self, program: &str, status: i32) -> Self {
        self.inner.lock().unwrap().fail_program = Some((program.to_string(), status));
        self
    }

    /// Get the recorded requests.
    pub fn requests(&self) -> Vec<RunRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// Recorded requests for one program.
    pub fn requests_for(&self, program: &str) -> Vec<RunRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.program == program)
            .collect()
    }
}

impl ProcessRunner for MockRunner {
    fn run(&self, request: &RunRequest) -> Result<RunOutput, RunnerError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());

        if let Some((program, status)) = &inner.fail_program {
            if *program == request.program {
                return Err(RunnerError::Failed {
                    program: program.clone(),
                    status: *status,
                    stderr: "mock failure".to_string(),
                });
            }
        }

        Ok(RunOutput::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_runner_captures_stdout() {
        let runner = SystemRunner;
        let output = runner
            .run(&RunRequest::new("echo", &["hello"]))
            .expect("echo should succeed");
        assert_eq!(output.status, 0);
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[test]
    fn system_runner_reports_nonzero_exit() {
        let runner = SystemRunner;
        let err = runner
            .run(&RunRequest::new("false", &[]))
            .expect_err("false should fail");
        assert_eq!(err.exit_status(), Some(1));
    }

    #[test]
    fn system_runner_spawn_error_for_missing_program() {
        let runner = SystemRunner;
        let err = runner
            .run(&RunRequest::new("definitely-not-a-real-program-xyz", &[]))
            .expect_err("missing program should fail to spawn");
        assert!(matches!(err, RunnerError::Spawn { .. }));
        assert_eq!(err.exit_status(), None);
    }

    #[test]
    fn system_runner_honors_cwd() {
        let dir = tempfile::TempDir::new().unwrap();
        let runner = SystemRunner;
        let output = runner
            .run(&RunRequest::new("pwd", &[]).in_dir(dir.path()))
            .unwrap();
        // macOS tempdirs may be behind a symlink; compare canonical forms.
        let reported = std::fs::canonicalize(output.stdout.trim()).unwrap();
        let expected = std::fs::canonicalize(dir.path()).unwrap();
        assert_eq!(reported, expected);
    }

    #[test]
    fn mock_runner_records_and_fails_on_request() {
        let runner = MockRunner::new().failing("git", 128);

        assert!(runner.run(&RunRequest::new("bash", &["script.sh"])).is_ok());
        let err = runner
            .run(&RunRequest::new("git", &["clone", "url", "path"]))
            .unwrap_err();
        assert_eq!(err.exit_status(), Some(128));

        assert_eq!(runner.requests().len(), 2);
        assert_eq!(runner.requests_for("git").len(), 1);
    }

    #[test]
    fn find_shell_returns_some_path() {
        let shell = find_shell();
        assert!(shell.to_string_lossy().contains("bash"));
    }
}
