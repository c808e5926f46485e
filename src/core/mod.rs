//! Core data structures.
//!
//! - Module directories and their kind (library or binary)
//! - Source file roles
//! - Library and executable targets

pub mod module_dir;
pub mod source;
pub mod target;

pub use module_dir::{ModuleDirectory, ModuleKind};
pub use source::{SourceFile, SourceRole};
pub use target::{ExecutableTarget, LibraryTarget};
