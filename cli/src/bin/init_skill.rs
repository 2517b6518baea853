use clap::Parser;
use skillkit_cli::{InitArgs, LogArgs, commands, finish, logging};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "init-skill", version)]
#[command(about = "Initialize a new AI agent skill.", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: InitArgs,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log);
    finish(commands::run_init(&cli.args))
}
