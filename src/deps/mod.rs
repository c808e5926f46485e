//! Where link dependencies come from.
//!
//! Two sources are merged for every target: the archives a legacy Makefile
//! declares ([`makefile`]) and the compiled-in [`overrides`] table.

pub mod makefile;
pub mod overrides;

pub use makefile::{load_dependencies, parse_dependencies, LegacyDependencies};
pub use overrides::{DependencyLookup, OverrideTable};
