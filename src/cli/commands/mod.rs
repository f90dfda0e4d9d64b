//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments (prompting where allowed)
//! 2. Drives the forge / workspace / scaffold modules
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! The init command is async internally because the forge involves network
//! I/O. Its sync wrapper creates a tokio runtime and uses `block_on`, so
//! the CLI itself stays synchronous.

mod auth;
mod completion;
mod init;
mod stacks_cmd;

// Re-export command functions for testing and direct invocation
pub use auth::auth;
pub use completion::completion;
pub use init::{init, run_init, InitArgs, InitParams};
pub use stacks_cmd::stacks;

use std::path::PathBuf;

use crate::cli::args::{visibility_flag, Command};
use anyhow::Result;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command
/// behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            cwd: None,
            debug: false,
            quiet: false,
            interactive: true,
        }
    }
}

impl Context {
    /// The effective working directory: the override, else the process cwd.
    pub fn cwd(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init {
            name,
            private,
            public,
            description,
            stack,
            remote,
        } => init::init(
            ctx,
            InitArgs {
                name,
                visibility: visibility_flag(private, public),
                description,
                stack,
                remote,
            },
        ),
        Command::Stacks => stacks_cmd::stacks(ctx),
        Command::Auth {
            token,
            status,
            logout,
        } => auth::auth(ctx, token.as_deref(), status, logout),
        Command::Completion { shell } => completion::completion(shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_context_is_interactive() {
        let ctx = Context::default();
        assert!(ctx.interactive);
        assert!(!ctx.quiet);
        assert!(ctx.cwd.is_none());
    }

    #[test]
    fn cwd_override_wins() {
        let ctx = Context {
            cwd: Some(PathBuf::from("/somewhere")),
            ..Context::default()
        };
        assert_eq!(ctx.cwd().unwrap(), PathBuf::from("/somewhere"));
    }
}
