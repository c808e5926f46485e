//! Generator configuration.
//!
//! Every setting defaults to the Kaldi source-tree conventions, so a config
//! file is only needed to point the generator at a tree that names things
//! differently. Files are TOML:
//!
//! ```toml
//! library_prefix = "kaldi-"
//! install_include_dir = "include/kaldi"
//!
//! [macros]
//! executable = "add_kaldi_executable"
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Naming and layout conventions of the tree being converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prepended to a module name to form its library target
    pub library_prefix: String,

    /// Directory-name suffix marking a directory of standalone programs
    pub binary_suffix: String,

    /// Legacy build file whose presence makes a directory a library module
    pub legacy_manifest: String,

    /// Makefile variable introducing the dependency block
    pub dependency_marker: String,

    /// Name of the generated file in each module directory
    pub output_file: String,

    /// Include directory exported to installed consumers
    pub install_include_dir: String,

    /// CMake option guarding test executables
    pub test_option: String,

    /// Module family whose test executables are renamed after the module
    /// (`nnet2/nnet-component-test.cc` -> `nnet2-component-test`)
    pub test_rename_prefix: String,

    /// CMake helper macros called by the generated files
    pub macros: MacroConfig,
}

/// Names of the project-provided CMake helper functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MacroConfig {
    /// Declares one tool executable
    pub executable: String,

    /// Declares one unit test executable
    pub test_executable: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            library_prefix: "kaldi-".to_string(),
            binary_suffix: "bin".to_string(),
            legacy_manifest: "Makefile".to_string(),
            dependency_marker: "ADDLIBS".to_string(),
            output_file: "CMakeLists.txt".to_string(),
            install_include_dir: "include/kaldi".to_string(),
            test_option: "KALDI_BUILD_TEST".to_string(),
            test_rename_prefix: "nnet".to_string(),
            macros: MacroConfig::default(),
        }
    }
}

impl Default for MacroConfig {
    fn default() -> Self {
        MacroConfig {
            executable: "add_kaldi_executable".to_string(),
            test_executable: "add_kaldi_test_executable".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Library target name for a module (`hmm` -> `kaldi-hmm`).
    pub fn library_target(&self, module: &str) -> String {
        crate::core::target::library_target_name(&self.library_prefix, module)
    }
}
