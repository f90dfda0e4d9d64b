//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::core::types::{RemotePreference, RepoName, Visibility};
use crate::scaffold::Stack;

/// Groundwork - a CLI for bootstrapping project repositories
#[derive(Parser, Debug)]
#[command(name = "groundwork")]
#[command(bin_name = "gw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if groundwork was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable interactive prompts
    #[arg(long = "interactive", global = true, conflicts_with = "no_interactive")]
    pub interactive_flag: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Returns true if:
    /// - `--interactive` was explicitly set, OR
    /// - Neither `--no-interactive` nor `--quiet` was set AND stdin is a TTY
    pub fn interactive(&self) -> bool {
        if self.interactive_flag {
            true
        } else if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create (or reuse) a repository, clone it, and scaffold a stack
    #[command(
        name = "init",
        long_about = "Create or reuse a remote repository, clone it locally, and run a \
            stack scaffold inside the clone.\n\n\
            The repository is looked up under the authenticated GitHub user first; it is \
            created only when it does not exist. The clone lands next to the current \
            directory (<parent-of-cwd>/<name>) and is skipped when that directory already \
            exists. Finally the chosen stack's scaffold script runs with the clone as its \
            working directory.\n\n\
            Every parameter can be given as a flag; anything missing is prompted for in \
            interactive mode. Authentication comes from $GITHUB_TOKEN or 'gw auth'.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Fully interactive (prompts for name, visibility, stack)
    gw init

    # Fully scripted
    gw init demo-app --private --stack express --no-interactive

    # Reuse an existing repository, clone over HTTPS
    gw init demo-app --remote https --stack express

GETTING STARTED:
    1. export GITHUB_TOKEN=...   # or: gw auth
    2. cd the directory your projects live next to
    3. gw init"
    )]
    Init {
        /// Repository name (prompted for when omitted)
        name: Option<RepoName>,

        /// Create the repository as private
        #[arg(long, conflicts_with = "public")]
        private: bool,

        /// Create the repository as public
        #[arg(long)]
        public: bool,

        /// Repository description
        #[arg(long)]
        description: Option<String>,

        /// Stack to scaffold (prompted for when omitted)
        #[arg(long)]
        stack: Option<Stack>,

        /// Clone URL scheme
        #[arg(long, value_name = "ssh|https")]
        remote: Option<RemotePreference>,
    },

    /// List known stacks and their availability
    #[command(
        name = "stacks",
        long_about = "List the stacks the scaffold registry knows about.\n\n\
            A stack marked unavailable is advertised for a future release; selecting it \
            with 'gw init --stack' fails with an explicit error."
    )]
    Stacks,

    /// Store or inspect the GitHub token
    #[command(
        name = "auth",
        long_about = "Store a GitHub token in the groundwork config file.\n\n\
            $GITHUB_TOKEN in the environment always takes precedence over the stored \
            token. The config file is written with owner-only permissions and the token \
            is never echoed back.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Prompt for the token (input is masked)
    gw auth

    # Non-interactive
    gw auth --token ghp_xxxx

    # Check whether a token is configured
    gw auth --status

    # Remove the stored token
    gw auth --logout"
    )]
    Auth {
        /// Token value (prompted for when omitted)
        #[arg(long)]
        token: Option<String>,

        /// Show current authentication status
        #[arg(long)]
        status: bool,

        /// Remove stored authentication
        #[arg(long)]
        logout: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion."
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Resolve the visibility flags into an explicit choice, when one was made.
pub fn visibility_flag(private: bool, public: bool) -> Option<Visibility> {
    match (private, public) {
        (true, _) => Some(Visibility::Private),
        (_, true) => Some(Visibility::Public),
        _ => None,
    }
}
