//! Target definitions - what the generated build file declares.
//!
//! Targets are plain data. They are filled in by the builders in
//! [`crate::builder`] and turned into CMake text by [`crate::builder::render`].

/// Map a module directory name to its library target name (`hmm` -> `kaldi-hmm`).
pub fn library_target_name(prefix: &str, module: &str) -> String {
    format!("{}{}", prefix, module)
}

/// Library built from a non-binary module directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryTarget {
    /// Target name, `prefix + module_name`
    pub target_name: String,

    /// Directory the library is built from
    pub module_name: String,

    /// Plain `.cc` sources
    pub sources: Vec<String>,

    /// `.cu` sources compiled separately into `${CUDA_OBJS}`
    pub accelerator_sources: Vec<String>,

    /// `*-test.cc` sources, one test executable each
    pub test_sources: Vec<String>,

    /// Link dependencies: legacy-extracted first
    pub dependencies: Vec<String>,

    /// Test executables derived from `test_sources`, filled in when the
    /// target is finished
    pub tests: Vec<ExecutableTarget>,
}

impl LibraryTarget {
    pub fn new(prefix: &str, module_name: impl Into<String>) -> Self {
        let module_name = module_name.into();
        LibraryTarget {
            target_name: library_target_name(prefix, &module_name),
            module_name,
            ..Default::default()
        }
    }

    pub fn has_accelerator_sources(&self) -> bool {
        !self.accelerator_sources.is_empty()
    }

    /// A library with nothing to compile is declared `INTERFACE`.
    pub fn is_interface(&self) -> bool {
        self.sources.is_empty() && self.accelerator_sources.is_empty()
    }
}

/// A standalone program: either a tool in a binary directory or a unit
/// test inside a library directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableTarget {
    pub exe_name: String,
    pub source_file: String,
    pub dependencies: Vec<String>,
}

impl ExecutableTarget {
    pub fn new(exe_name: impl Into<String>, source_file: impl Into<String>) -> Self {
        ExecutableTarget {
            exe_name: exe_name.into(),
            source_file: source_file.into(),
            dependencies: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_naming() {
        let lib = LibraryTarget::new("kaldi-", "hmm");
        assert_eq!(lib.target_name, "kaldi-hmm");
        assert_eq!(lib.module_name, "hmm");
        assert!(lib.is_interface());
        assert!(!lib.has_accelerator_sources());
    }

    #[test]
    fn test_cuda_only_library_is_not_interface() {
        let mut lib = LibraryTarget::new("kaldi-", "cudamatrix");
        lib.accelerator_sources.push("cu-kernels.cu".into());
        assert!(!lib.is_interface());
    }
}
