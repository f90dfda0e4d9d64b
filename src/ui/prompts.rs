//! ui::prompts
//!
//! Interactive prompts and confirmations.
//!
//! # Design
//!
//! Prompts are only shown in interactive mode. In non-interactive mode,
//! operations requiring user input must either have defaults or fail
//! with a clear error message - a prompt never blocks a scripted run.
//!
//! Selection prompts are numbered lists read from stdin; there is no
//! cursor-driven menu, which keeps the prompts usable over dumb terminals
//! and in CI transcripts.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Errors from prompts.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("prompt cancelled by user")]
    Cancelled,

    #[error("not in interactive mode")]
    NotInteractive,

    #[error("IO error: {0}")]
    IoError(String),
}

impl From<io::Error> for PromptError {
    fn from(err: io::Error) -> Self {
        PromptError::IoError(err.to_string())
    }
}

/// Read one line from stdin, treating EOF as cancellation.
fn read_line() -> Result<String, PromptError> {
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Err(PromptError::Cancelled);
    }
    Ok(line.trim().to_string())
}

/// Prompt for text input.
///
/// Re-prompts on empty input unless a default is supplied. Returns
/// `Err(PromptError::NotInteractive)` if not in interactive mode.
pub fn input(
    message: &str,
    default: Option<&str>,
    interactive: bool,
) -> Result<String, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    loop {
        match default {
            Some(d) => print!("{} [{}]: ", message, d),
            None => print!("{}: ", message),
        }
        io::stdout().flush()?;

        let line = read_line()?;
        if !line.is_empty() {
            return Ok(line);
        }
        if let Some(d) = default {
            return Ok(d.to_string());
        }
    }
}

/// Prompt to select from a list of options.
///
/// Options are displayed as a numbered list; the operator types a number.
/// Returns the index of the selected option. An empty answer picks the
/// default when one is given.
pub fn select<T: AsRef<str>>(
    message: &str,
    options: &[T],
    default: Option<usize>,
    interactive: bool,
) -> Result<usize, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }
    if options.is_empty() {
        return Err(PromptError::IoError("no options to select from".to_string()));
    }

    println!("{}", message);
    for (i, option) in options.iter().enumerate() {
        println!("  {}) {}", i + 1, option.as_ref());
    }

    loop {
        match default {
            Some(d) => print!("choice [{}]: ", d + 1),
            None => print!("choice: "),
        }
        io::stdout().flush()?;

        let line = read_line()?;
        if line.is_empty() {
            if let Some(d) = default {
                return Ok(d);
            }
            continue;
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => println!("enter a number between 1 and {}", options.len()),
        }
    }
}

/// Prompt for confirmation (yes/no).
///
/// Returns `Ok(true)` if the user confirms, `Ok(false)` if they decline.
/// An empty answer picks the default.
pub fn confirm(message: &str, default: bool, interactive: bool) -> Result<bool, PromptError> {
    if !interactive {
        return Err(PromptError::NotInteractive);
    }

    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        print!("{} [{}]: ", message, hint);
        io::stdout().flush()?;

        match read_line()?.to_ascii_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("answer 'y' or 'n'"),
        }
    }
}
