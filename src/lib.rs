//! Groundwork - a CLI for bootstrapping project repositories
//!
//! Groundwork is a single-binary tool that takes a project from nothing to a
//! working checkout: it finds or creates a repository on GitHub, ensures a
//! local clone exists next to the current directory, and runs a scaffold
//! script for the chosen technology stack inside the clone.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to modules)
//! - [`core`] - Domain types, path derivation, and configuration
//! - [`forge`] - Abstraction for remote forges (GitHub v1)
//! - [`runner`] - Single interface for all subprocess execution
//! - [`workspace`] - Ensures a local clone of a resolved repository
//! - [`scaffold`] - Stack registry and scaffold-script execution
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Groundwork maintains the following invariants:
//!
//! 1. A repository is created remotely only when lookup reports a true
//!    not-found; every other lookup failure aborts the run
//! 2. An existing clone directory is never re-cloned or modified
//! 3. Scaffold scripts run with the clone as their working directory, and
//!    their exit status is surfaced unchanged

pub mod cli;
pub mod core;
pub mod forge;
pub mod runner;
pub mod scaffold;
pub mod ui;
pub mod workspace;
