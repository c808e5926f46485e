//! `cmake-skeleton join-suffix` command

use std::io;

use anyhow::{Context, Result};

use cmake_skeleton::ops::join_suffix;

pub fn execute() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    join_suffix(stdin.lock(), stdout.lock()).context("failed to filter transcript")
}
