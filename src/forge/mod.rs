//! forge
//!
//! Abstraction for remote forges (GitHub v1).
//!
//! # Architecture
//!
//! The `Forge` trait defines the interface for interacting with remote
//! hosting services. Commands use the [`create_forge`] factory function
//! rather than importing specific forge implementations directly, and the
//! [`resolver`] is the only place that decides between reusing and creating
//! a repository.
//!
//! # Modules
//!
//! - `traits`: Core `Forge` trait, repository handle, and error taxonomy
//! - [`github`]: GitHub implementation using the REST API
//! - [`resolver`]: Find-or-create resolution
//! - [`mock`]: Mock implementation for deterministic testing
//! - `factory`: Forge configuration and construction
//!
//! # Example
//!
//! ```ignore
//! use groundwork::forge::{create_forge, resolver, ForgeConfig};
//!
//! let forge_config = ForgeConfig::discover(&config)?;
//! let forge = create_forge(&forge_config);
//!
//! let resolved = resolver::resolve(forge.as_ref(), &spec).await?;
//! println!("{} ({})", resolved.repo.html_url,
//!          if resolved.created { "created" } else { "existing" });
//! ```

mod factory;
pub mod github;
pub mod mock;
pub mod resolver;
mod traits;

pub use factory::{create_forge, ForgeConfig, TOKEN_ENV};
pub use traits::*;
