//! Command implementations

pub mod generate;
pub mod join_suffix;
