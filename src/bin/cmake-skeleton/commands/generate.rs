//! `cmake-skeleton generate` command

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::GenerateArgs;
use cmake_skeleton::ops::{generate, GenerateOptions};
use cmake_skeleton::util::shell::{format_duration, Status};
use cmake_skeleton::util::{GeneratorConfig, Shell};
use cmake_skeleton::OverrideTable;

pub fn execute(args: GenerateArgs, shell: &Shell) -> Result<()> {
    let config = GeneratorConfig::load_or_default(args.config.as_deref())?;
    let overrides = OverrideTable::builtin();

    let options = GenerateOptions {
        root: args.root.unwrap_or_else(|| PathBuf::from(".")),
        dry_run: args.dry_run,
    };

    let report = generate(&config, &overrides, &options)?;

    for file in &report.generated {
        if file.written {
            shell.status(Status::Generated, file.path.display());
        } else {
            shell.status(Status::Info, format!("would generate {}", file.path.display()));
        }
    }
    for module in &report.skipped {
        shell.verbose_status(
            Status::Skipped,
            format!("{} (no {})", module, config.legacy_manifest),
        );
    }
    for warning in &report.warnings {
        shell.diagnostic(warning);
    }
    for failure in &report.failures {
        shell.diagnostic(&failure.to_diagnostic());
    }

    if !report.is_success() {
        bail!(
            "{} of {} module directories failed",
            report.failures.len(),
            report.failures.len() + report.generated.len()
        );
    }

    shell.status(
        Status::Finished,
        format!(
            "{} build files in {}",
            report.generated.len(),
            format_duration(report.duration)
        ),
    );
    Ok(())
}
