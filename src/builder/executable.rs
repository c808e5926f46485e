//! Executable targets for binary module directories.
//!
//! Every plain source directly inside a binary directory is one tool:
//! `gmmbin/gmm-copy.cc` becomes `gmm-copy`, linked against `kaldi-gmm`
//! plus whatever the override table adds for `gmm-copy`.

use crate::builder::library::override_targets;
use crate::core::module_dir::ModuleDirectory;
use crate::core::source::{SourceFile, SourceRole};
use crate::core::target::ExecutableTarget;
use crate::deps::overrides::DependencyLookup;
use crate::util::GeneratorConfig;

/// Build the executable for `file`, or `None` if it is not a plain source.
pub fn build_executable(
    config: &GeneratorConfig,
    overrides: &dyn DependencyLookup,
    dir: &ModuleDirectory,
    file: &SourceFile,
) -> Option<ExecutableTarget> {
    if file.role != SourceRole::PlainSource {
        return None;
    }

    let mut exe = ExecutableTarget::new(file.stem(), file.name.as_str());
    if let Some(module) = dir.owning_library(&config.binary_suffix) {
        exe.dependencies.push(config.library_target(module));
    }
    exe.dependencies
        .extend(override_targets(config, overrides, &exe.exe_name));
    Some(exe)
}
