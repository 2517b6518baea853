pub mod commands;
pub mod logging;

pub use commands::{InitArgs, PackageArgs};
pub use logging::LogArgs;

use console::style;
use std::process::ExitCode;

/// Prints the error the way both tools report failures and maps the result
/// to the process exit status.
pub fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
