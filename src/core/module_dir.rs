//! Module directories - the top-level units of a source tree.

use std::path::{Path, PathBuf};

/// Whether a module directory holds a library or a set of standalone programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    /// Sources compiled into one library target
    Library,

    /// Every source is its own executable
    Binary,
}

impl ModuleKind {
    /// Classify a directory name. Binary directories carry the given suffix
    /// (`gmmbin`, `featbin`, `gmm-bin`).
    pub fn classify(dir_name: &str, binary_suffix: &str) -> Self {
        if dir_name.ends_with(binary_suffix) {
            ModuleKind::Binary
        } else {
            ModuleKind::Library
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleKind::Library => "library",
            ModuleKind::Binary => "binary",
        }
    }
}

/// One immediate subdirectory of the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDirectory {
    name: String,
    kind: ModuleKind,
    path: PathBuf,
}

impl ModuleDirectory {
    /// Create a module directory, deriving its kind from the name.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>, binary_suffix: &str) -> Self {
        let name = name.into();
        let kind = ModuleKind::classify(&name, binary_suffix);
        ModuleDirectory {
            name,
            kind,
            path: path.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_binary(&self) -> bool {
        self.kind == ModuleKind::Binary
    }

    /// The library module a binary directory links against: the directory
    /// name with the binary suffix removed (`gmmbin` -> `gmm`).
    ///
    /// A trailing `-` left over from names like `gmm-bin` is dropped as well.
    pub fn owning_library(&self, binary_suffix: &str) -> Option<&str> {
        let stem = self.name.strip_suffix(binary_suffix)?;
        let stem = stem.strip_suffix('-').unwrap_or(stem);
        if stem.is_empty() {
            None
        } else {
            Some(stem)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_suffix() {
        assert_eq!(ModuleKind::classify("gmmbin", "bin"), ModuleKind::Binary);
        assert_eq!(ModuleKind::classify("gmm-bin", "bin"), ModuleKind::Binary);
        assert_eq!(ModuleKind::classify("gmm", "bin"), ModuleKind::Library);
        assert_eq!(ModuleKind::classify("binary", "bin"), ModuleKind::Library);
    }

    #[test]
    fn test_owning_library() {
        let dir = ModuleDirectory::new("/src/gmmbin", "gmmbin", "bin");
        assert!(dir.is_binary());
        assert_eq!(dir.owning_library("bin"), Some("gmm"));

        let dir = ModuleDirectory::new("/src/gmm-bin", "gmm-bin", "bin");
        assert_eq!(dir.owning_library("bin"), Some("gmm"));

        let dir = ModuleDirectory::new("/src/bin", "bin", "bin");
        assert_eq!(dir.owning_library("bin"), None);
    }
}
