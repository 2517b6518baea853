use clap::Parser;
use skillkit_cli::{LogArgs, PackageArgs, commands, finish, logging};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "package-skill", version)]
#[command(about = "Package an AI agent skill into a .skill file.", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: PackageArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log);
    finish(commands::run_package(&cli.args))
}
