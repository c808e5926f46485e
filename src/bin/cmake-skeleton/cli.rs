//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use cmake_skeleton::util::shell::ColorChoice;

/// Regenerate CMakeLists.txt files from a Makefile-based source tree
#[derive(Parser)]
#[command(name = "cmake-skeleton")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate CMakeLists.txt for every module directory (default)
    Generate(GenerateArgs),

    /// Reattach split `'s`-style suffixes in transcript lines (stdin to stdout)
    JoinSuffix,
}

#[derive(Args, Default)]
pub struct GenerateArgs {
    /// Source tree root (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Generator config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
