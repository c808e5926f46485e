//! Library target assembly for non-binary module directories.

use crate::core::source::{SourceFile, SourceRole};
use crate::core::target::{ExecutableTarget, LibraryTarget};
use crate::deps::overrides::DependencyLookup;
use crate::util::GeneratorConfig;

/// Incrementally fills a [`LibraryTarget`] while a directory is scanned.
pub struct LibraryBuilder<'a> {
    config: &'a GeneratorConfig,
    overrides: &'a dyn DependencyLookup,
    target: LibraryTarget,
}

impl<'a> LibraryBuilder<'a> {
    /// Start a library for `module_name` with the dependencies recovered from
    /// its legacy Makefile.
    pub fn new(
        config: &'a GeneratorConfig,
        overrides: &'a dyn DependencyLookup,
        module_name: &str,
        legacy_dependencies: Vec<String>,
    ) -> Self {
        let mut target = LibraryTarget::new(&config.library_prefix, module_name);
        target.dependencies = legacy_dependencies;
        LibraryBuilder {
            config,
            overrides,
            target,
        }
    }

    /// Route a classified file into the matching source list. Returns false
    /// for files the library does not use.
    pub fn add_file(&mut self, file: &SourceFile) -> bool {
        let list = match file.role {
            SourceRole::PlainSource => &mut self.target.sources,
            SourceRole::AcceleratorSource => &mut self.target.accelerator_sources,
            SourceRole::TestSource => &mut self.target.test_sources,
            SourceRole::Header | SourceRole::Other => return false,
        };
        list.push(file.name.clone());
        true
    }

    /// Append override dependencies and derive the test executables.
    pub fn finish(mut self) -> LibraryTarget {
        let extra = override_targets(self.config, self.overrides, &self.target.target_name);
        self.target.dependencies.extend(extra);

        let tests = self
            .target
            .test_sources
            .iter()
            .map(|source| self.test_executable(source))
            .collect();
        self.target.tests = tests;
        self.target
    }

    fn test_executable(&self, source: &str) -> ExecutableTarget {
        let stem = SourceFile::new(source).stem().to_string();
        let name = test_exe_name(&self.target.module_name, &stem, &self.config.test_rename_prefix);

        let mut exe = ExecutableTarget::new(name, source);
        exe.dependencies.push(self.target.target_name.clone());
        exe.dependencies
            .extend(override_targets(self.config, self.overrides, &exe.exe_name));
        exe.dependencies.retain(|d| !d.is_empty());
        exe
    }
}

/// Name of the test executable built from `stem`.
///
/// Only the `family` modules (e.g. `nnet`, `nnet2`, `nnet3`) share test file
/// names across directories, so there the executable takes the module name
/// plus everything after the first `-` of the stem. Anything else keeps the
/// stem.
pub fn test_exe_name(module: &str, stem: &str, family: &str) -> String {
    if !family.is_empty() && module.starts_with(family) && stem.starts_with(family) {
        if let Some((_, rest)) = stem.split_once('-') {
            return format!("{}-{}", module, rest);
        }
    }
    stem.to_string()
}

/// Override entries for `name`, mapped to library target names.
pub(crate) fn override_targets(
    config: &GeneratorConfig,
    overrides: &dyn DependencyLookup,
    name: &str,
) -> Vec<String> {
    overrides
        .lookup(name)
        .iter()
        .map(|module| config.library_target(module))
        .collect()
}
