//! cli::commands::auth
//!
//! Authentication command for storing the GitHub token.
//!
//! # Design
//!
//! The token is stored in the user config file (written with owner-only
//! permissions). `GITHUB_TOKEN` in the environment always takes precedence
//! at runtime. This command NEVER prints the token value; it only confirms
//! success or failure.

use anyhow::{bail, Context as _, Result};

use crate::cli::commands::Context;
use crate::core::config::Config;
use crate::forge::TOKEN_ENV;
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;

/// Run the auth command.
///
/// # Arguments
///
/// * `ctx` - Context with interactive flag
/// * `token` - Optional token provided via --token flag
/// * `status` - If true, show authentication status instead of storing
/// * `logout` - If true, remove stored authentication
pub fn auth(ctx: &Context, token: Option<&str>, status: bool, logout: bool) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    if status {
        return show_status(&config, ctx.quiet);
    }

    if logout {
        return do_logout(&mut config, ctx.quiet);
    }

    if config.user.token.is_some() && token.is_none() && ctx.interactive {
        let overwrite = prompts::confirm("A token is already stored. Replace it?", false, true)?;
        if !overwrite {
            println!("Keeping existing token.");
            return Ok(());
        }
    }

    let token_value = get_token(ctx, token)?;
    validate_token(&token_value)?;

    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);
    if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.trim().is_empty()) {
        output::warn(
            format!("${} is set and takes precedence over the stored token", TOKEN_ENV),
            verbosity,
        );
    }

    config.user.token = Some(token_value);
    let path = config.save().context("Failed to store token")?;

    if !ctx.quiet {
        println!("Token stored in {}.", path.display());
    }

    Ok(())
}

/// Show authentication status.
fn show_status(config: &Config, quiet: bool) -> Result<()> {
    let env_set = std::env::var(TOKEN_ENV)
        .map(|t| !t.trim().is_empty())
        .unwrap_or(false);
    let stored = config.user.token.is_some();

    if quiet {
        // Machine-readable output
        if env_set || stored {
            println!("authenticated");
        } else {
            println!("not_authenticated");
        }
    } else if env_set {
        println!("Authenticated via ${}.", TOKEN_ENV);
        // Note: we intentionally do NOT print the token or any part of it
    } else if stored {
        println!("Authenticated via stored token.");
    } else {
        println!("Not authenticated.");
        println!("Run 'gw auth' or set {}.", TOKEN_ENV);
    }

    Ok(())
}

/// Remove stored authentication.
fn do_logout(config: &mut Config, quiet: bool) -> Result<()> {
    if config.user.token.take().is_none() {
        if !quiet {
            println!("No stored token to remove.");
        }
        return Ok(());
    }

    config.save().context("Failed to remove token")?;
    if !quiet {
        println!("Stored token removed.");
    }
    Ok(())
}

/// Get the token value from the flag or an interactive masked prompt.
fn get_token(ctx: &Context, token: Option<&str>) -> Result<String> {
    if let Some(t) = token {
        return Ok(t.to_string());
    }

    if !ctx.interactive {
        bail!("--token required in non-interactive mode");
    }

    eprint!("GitHub token (input hidden): ");
    let token = rpassword::read_password().context("Failed to read token")?;
    Ok(token.trim().to_string())
}

/// Basic sanity checks on the token value.
fn validate_token(token: &str) -> Result<()> {
    if token.is_empty() {
        bail!("Token is empty");
    }
    if token.chars().any(|c| c.is_whitespace()) {
        bail!("Token contains whitespace");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_token_rejects_bad_values() {
        assert!(validate_token("").is_err());
        assert!(validate_token("ghp abc").is_err());
        assert!(validate_token("ghp_abc123").is_ok());
    }

    #[test]
    fn get_token_requires_flag_when_non_interactive() {
        let ctx = Context {
            interactive: false,
            ..Context::default()
        };
        assert!(get_token(&ctx, None).is_err());
        assert_eq!(get_token(&ctx, Some("ghp_x")).unwrap(), "ghp_x");
    }
}
