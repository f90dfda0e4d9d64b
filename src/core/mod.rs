//! core
//!
//! Domain types, path derivation, and configuration.
//!
//! # Modules
//!
//! - [`types`] - Strong types for core domain concepts
//! - [`paths`] - Deterministic path derivation (clone target, script dir)
//! - [`config`] - User configuration schema and loading

pub mod config;
pub mod paths;
pub mod types;
