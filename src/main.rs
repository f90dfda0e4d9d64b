//! Groundwork binary entry point.
//!
//! Runs the CLI and maps failures to the process exit status. When the
//! failure bottoms out in a subprocess (git clone or a scaffold script),
//! that child's exit code is propagated; everything else exits 1.

use groundwork::runner::RunnerError;
use groundwork::ui::output;

fn main() {
    if let Err(err) = groundwork::cli::run() {
        output::error(format!("{:#}", err));

        let code = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<RunnerError>())
            .and_then(RunnerError::exit_status)
            .unwrap_or(1);
        std::process::exit(code);
    }
}
