use clap::{Parser, Subcommand};
use skillkit_cli::{InitArgs, LogArgs, PackageArgs, commands, finish, logging};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "skillkit", version)]
#[command(about = "skillkit - scaffold and package agent skills", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    log: LogArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new skill directory from the template
    Init(InitArgs),
    /// Zip a skill directory into a .skill archive
    Package(PackageArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log);

    let result = match &cli.command {
        Commands::Init(args) => commands::run_init(args),
        Commands::Package(args) => commands::run_package(args),
    };

    finish(result)
}
