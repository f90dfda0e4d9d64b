//! cli::commands::init
//!
//! The init command: find-or-create a remote repository, ensure a local
//! clone, and scaffold the chosen stack inside it.
//!
//! # Flow
//!
//! 1. Pre-flight: discover the GitHub token (env, then config file); no
//!    network call happens without one
//! 2. Gather parameters from flags, prompting for anything missing in
//!    interactive mode
//! 3. Resolve the repository against the forge (create only on not-found)
//! 4. Materialize the clone next to the current directory
//! 5. Run the stack's scaffold script with the clone as working directory
//!
//! Steps 3-5 live in [`run_init`], which takes the forge and process runner
//! as trait objects so integration tests drive the whole flow with mocks.

use anyhow::{bail, Context as _, Result};

use crate::cli::commands::Context;
use crate::core::config::Config;
use crate::core::types::{RemotePreference, RepoName, RepoSpec, Visibility};
use crate::forge::{create_forge, resolver, Forge, ForgeConfig};
use crate::runner::{ProcessRunner, SystemRunner};
use crate::scaffold::{self, Stack};
use crate::ui::output::{self, Verbosity};
use crate::ui::prompts;
use crate::workspace;

/// Raw init arguments from the CLI.
#[derive(Debug, Default)]
pub struct InitArgs {
    /// Repository name, when given as a positional argument.
    pub name: Option<RepoName>,
    /// Visibility, when chosen via `--private`/`--public`.
    pub visibility: Option<Visibility>,
    /// Description, when given via `--description`.
    pub description: Option<String>,
    /// Stack, when given via `--stack`.
    pub stack: Option<Stack>,
    /// Clone URL scheme, when given via `--remote`.
    pub remote: Option<RemotePreference>,
}

/// Fully-gathered init parameters.
#[derive(Debug, Clone)]
pub struct InitParams {
    /// What to create (or find) remotely.
    pub spec: RepoSpec,
    /// Stack to scaffold.
    pub stack: Stack,
    /// Clone URL scheme.
    pub remote: RemotePreference,
}

/// Run the init command.
pub fn init(ctx: &Context, args: InitArgs) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(init_async(ctx, args))
}

async fn init_async(ctx: &Context, args: InitArgs) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    // Pre-flight credential check, before prompting and before any network
    // call.
    let forge_config = ForgeConfig::discover(&config)
        .context("No GitHub token found. Set GITHUB_TOKEN or run 'gw auth'")?;

    let params = gather(ctx, args, &config)?;

    let forge = create_forge(&forge_config);
    let runner = SystemRunner;
    run_init(ctx, forge.as_ref(), &runner, params).await
}

/// Resolve, materialize, and scaffold.
///
/// Public so tests can exercise the full flow with a mock forge and a mock
/// process runner.
pub async fn run_init(
    ctx: &Context,
    forge: &dyn Forge,
    runner: &dyn ProcessRunner,
    params: InitParams,
) -> Result<()> {
    let verbosity = Verbosity::from_flags(ctx.quiet, ctx.debug);

    let resolved = resolver::resolve(forge, &params.spec)
        .await
        .with_context(|| format!("Failed to resolve repository '{}'", params.spec.name))?;

    if resolved.created {
        output::print(
            format!(
                "Created repository '{}': {}",
                params.spec.name, resolved.repo.html_url
            ),
            verbosity,
        );
    } else {
        output::print(
            format!(
                "Repository '{}' already exists: {}",
                params.spec.name, resolved.repo.html_url
            ),
            verbosity,
        );
    }

    let cwd = ctx.cwd()?;
    let materialized = workspace::materialize(
        runner,
        &resolved.repo,
        &params.spec.name,
        params.remote,
        &cwd,
    )?;

    if materialized.cloned {
        output::print(
            format!("Cloned into {}", materialized.path.display()),
            verbosity,
        );
    } else {
        output::debug(
            format!(
                "clone target {} already exists, skipping clone",
                materialized.path.display()
            ),
            verbosity,
        );
        output::print(
            format!("Using existing clone at {}", materialized.path.display()),
            verbosity,
        );
    }

    scaffold::run(runner, params.stack, &materialized.path)?;
    output::print(
        format!(
            "Initialized {} project in {}",
            params.stack,
            materialized.path.display()
        ),
        verbosity,
    );

    Ok(())
}

/// Gather parameters from flags, config defaults, and prompts.
///
/// Each prompt is skipped when the corresponding flag was given. In
/// non-interactive mode a missing name is an error and the remaining values
/// fall back to config defaults.
fn gather(ctx: &Context, args: InitArgs, config: &Config) -> Result<InitParams> {
    let name = match args.name {
        Some(name) => name,
        None if ctx.interactive => prompt_name()?,
        None => bail!("repository name required in non-interactive mode"),
    };

    let visibility = match args.visibility {
        Some(v) => v,
        None if ctx.interactive => {
            let default = config.user.default_visibility();
            let choices = ["Public", "Private"];
            let default_index = if default.is_private() { 1 } else { 0 };
            let index = prompts::select(
                "Choose repository visibility:",
                &choices,
                Some(default_index),
                true,
            )?;
            choices[index].parse::<Visibility>()?
        }
        None => config.user.default_visibility(),
    };

    let description = match args.description {
        Some(d) => Some(d).filter(|d| !d.is_empty()),
        None if ctx.interactive => {
            // Optional field; empty input means no description.
            Some(prompts::input("Repository description (optional)", Some(""), true)?)
                .filter(|d| !d.is_empty())
        }
        None => None,
    };

    let stack = match args.stack {
        Some(stack) => stack,
        None if ctx.interactive => {
            let choices = Stack::names();
            let default_index = config
                .user
                .default_stack()
                .and_then(|name| choices.iter().position(|c| *c == name));
            let index = prompts::select(
                "Which stack do you want to scaffold?",
                &choices,
                default_index.or(Some(0)),
                true,
            )?;
            Stack::parse(choices[index]).expect("registry names parse")
        }
        None => match config.user.default_stack() {
            Some(name) => Stack::parse(name)
                .with_context(|| format!("config names unknown default stack '{}'", name))?,
            None => Stack::Express,
        },
    };

    // Fail before any network call rather than after creating the repo.
    if !stack.is_available() {
        return Err(scaffold::ScaffoldError::Unsupported(stack).into());
    }

    let remote = args.remote.unwrap_or_else(|| config.user.default_remote());

    let mut spec = RepoSpec::new(name, visibility);
    spec.description = description;

    Ok(InitParams {
        spec,
        stack,
        remote,
    })
}

/// Prompt for the repository name until a valid one is entered.
fn prompt_name() -> Result<RepoName> {
    loop {
        let raw = prompts::input("Repository name", None, true)?;
        match RepoName::new(raw) {
            Ok(name) => return Ok(name),
            Err(err) => output::error(err),
        }
    }
}
