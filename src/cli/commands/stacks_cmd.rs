//! stacks command - list registry stacks and their availability

use anyhow::Result;

use crate::cli::commands::Context;
use crate::scaffold::Stack;

/// List known stacks.
///
/// In quiet mode prints one available stack name per line (for scripting);
/// otherwise prints the full registry with availability markers.
pub fn stacks(ctx: &Context) -> Result<()> {
    if ctx.quiet {
        for stack in Stack::all().iter().filter(|s| s.is_available()) {
            println!("{}", stack);
        }
        return Ok(());
    }

    println!("Known stacks:");
    for stack in Stack::all() {
        if stack.is_available() {
            println!("  {}", stack);
        } else {
            println!("  {} (not implemented yet)", stack);
        }
    }
    Ok(())
}
