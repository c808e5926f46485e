//! High-level operations.
//!
//! This module contains the implementation of the CLI commands.

pub mod error;
pub mod generate;
pub mod join_suffix;

pub use error::GenerateError;
pub use generate::{generate, GenerateOptions, GenerateReport, GeneratedFile};
pub use join_suffix::{join_suffix, join_suffix_line};
