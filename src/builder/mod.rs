//! Target assembly and CMake rendering.
//!
//! Builders turn classified directory entries into targets; [`render`]
//! turns targets into CMake text; [`BuildFile`] writes the result.

pub mod executable;
pub mod file;
pub mod library;
pub mod render;

pub use executable::build_executable;
pub use file::BuildFile;
pub use library::LibraryBuilder;
pub use render::{render_executable, render_library};
