//! cmake-skeleton CLI - CMakeLists.txt generator for Makefile-based trees

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands, GenerateArgs};
use cmake_skeleton::util::Shell;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging; --quiet keeps stderr to errors only
    let filter = if cli.quiet {
        EnvFilter::new("cmake_skeleton=error")
    } else if cli.verbose {
        EnvFilter::new("cmake_skeleton=debug")
    } else {
        EnvFilter::new("cmake_skeleton=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let shell = Shell::from_flags(cli.quiet, cli.verbose, cli.color);

    // Execute command; bare invocation generates in the current directory
    match cli.command.unwrap_or(Commands::Generate(GenerateArgs::default())) {
        Commands::Generate(args) => commands::generate::execute(args, &shell),
        Commands::JoinSuffix => commands::join_suffix::execute(),
    }
}
