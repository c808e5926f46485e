//! cmake-skeleton - CMake build files for a Makefile-based C++ source tree
//!
//! This crate regenerates one `CMakeLists.txt` per module directory from the
//! tree layout and the dependency blocks of the legacy Makefiles, patched by
//! a compiled-in override table.

pub mod builder;
pub mod core;
pub mod deps;
pub mod ops;
pub mod util;

pub use crate::core::{
    ExecutableTarget, LibraryTarget, ModuleDirectory, ModuleKind, SourceFile, SourceRole,
};
pub use deps::{DependencyLookup, OverrideTable};
pub use ops::{generate, GenerateError, GenerateOptions, GenerateReport};
pub use util::GeneratorConfig;
