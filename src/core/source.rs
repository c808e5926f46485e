//! Source file classification.
//!
//! Roles are decided by filename suffix alone; nothing is read from disk.

use std::path::Path;

/// Extension of ordinary compiled sources.
pub const SOURCE_EXT: &str = ".cc";

/// Extension of CUDA kernel sources.
pub const CUDA_EXT: &str = ".cu";

/// Extension of headers.
pub const HEADER_EXT: &str = ".h";

/// Suffix (before the extension) marking a unit test source.
pub const TEST_SUFFIX: &str = "-test";

/// What a file in a module directory contributes to the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceRole {
    /// `.h`
    Header,
    /// `.cu`, compiled through the CUDA toolchain
    AcceleratorSource,
    /// `*-test.cc`
    TestSource,
    /// Any other `.cc`
    PlainSource,
    /// Anything else; callers drop these.
    Other,
}

impl SourceRole {
    /// Classify a bare filename.
    pub fn classify(file_name: &str) -> Self {
        if file_name.ends_with(CUDA_EXT) {
            SourceRole::AcceleratorSource
        } else if is_test_source(file_name) {
            SourceRole::TestSource
        } else if file_name.ends_with(SOURCE_EXT) {
            SourceRole::PlainSource
        } else if file_name.ends_with(HEADER_EXT) {
            SourceRole::Header
        } else {
            SourceRole::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceRole::Header => "header",
            SourceRole::AcceleratorSource => "cuda",
            SourceRole::TestSource => "test",
            SourceRole::PlainSource => "source",
            SourceRole::Other => "other",
        }
    }
}

fn is_test_source(file_name: &str) -> bool {
    file_name
        .strip_suffix(SOURCE_EXT)
        .is_some_and(|stem| stem.ends_with(TEST_SUFFIX))
}

/// A classified file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub role: SourceRole,
}

impl SourceFile {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let role = SourceRole::classify(&name);
        SourceFile { name, role }
    }

    /// Filename without its final extension (`gmm-copy.cc` -> `gmm-copy`).
    pub fn stem(&self) -> &str {
        file_stem(&self.name)
    }
}

/// Final path component minus its last extension.
///
/// `../util/kaldi-util.a` -> `kaldi-util`, `foo` -> `foo`.
pub fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
}
