//! Compiled-in dependency overrides.
//!
//! The legacy Makefiles under-declare what some executables link against.
//! Entries here list extra *module* names; callers map them to library
//! target names. Families of tools sharing a name prefix (`gmm-*`) get a
//! wildcard entry that applies only when no exact entry exists.

use std::collections::BTreeMap;

/// Marker appended to a family prefix to form a wildcard key.
pub const WILDCARD: &str = "-*";

/// Two-stage lookup of extra dependencies for an executable name.
pub trait DependencyLookup {
    /// Entry registered for exactly this name.
    fn exact_lookup(&self, name: &str) -> Option<&[String]>;

    /// Entry registered for a family prefix (`gmm` for `gmm-*`).
    fn wildcard_lookup(&self, family: &str) -> Option<&[String]>;

    /// Exact match first, then the family of `name` (its text before the
    /// first `-`), otherwise nothing.
    fn lookup(&self, name: &str) -> &[String] {
        if let Some(extra) = self.exact_lookup(name) {
            return extra;
        }
        self.wildcard_lookup(family_of(name)).unwrap_or(&[])
    }
}

/// The family prefix of a name: everything before the first `-`.
pub fn family_of(name: &str) -> &str {
    name.split_once('-').map_or(name, |(family, _)| family)
}

/// Immutable override table.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    exact: BTreeMap<String, Vec<String>>,
    families: BTreeMap<String, Vec<String>>,
}

impl OverrideTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, modules)` pairs. Keys ending in `-*` are
    /// family wildcards.
    pub fn from_entries<'a, I, M>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, M)>,
        M: IntoIterator<Item = &'a str>,
    {
        let mut table = OverrideTable::new();
        for (key, modules) in entries {
            let modules: Vec<String> = modules.into_iter().map(str::to_string).collect();
            match key.strip_suffix(WILDCARD) {
                Some(family) => table.families.insert(family.to_string(), modules),
                None => table.exact.insert(key.to_string(), modules),
            };
        }
        table
    }

    /// The overrides known to be needed by the Kaldi source tree.
    pub fn builtin() -> Self {
        Self::from_entries([
            ("transform-feats", vec!["transform"]),
            ("interpolate-pitch", vec!["transform"]),
            ("post-to-feats", vec!["hmm"]),
            ("append-post-to-feats", vec!["hmm"]),
            ("gmm-est-fmllr-gpost", vec!["sgmm2", "hmm"]),
            ("gmm-est-fmllr", vec!["hmm", "transform"]),
            ("gmm-latgen-faster", vec!["decoder"]),
            ("gmm-transform-means", vec!["hmm"]),
            ("gmm-post-to-gpost", vec!["hmm"]),
            ("gmm-init-lvtln", vec!["transform"]),
            ("gmm-rescore-lattice", vec!["hmm", "lat"]),
            ("gmm-est-fmllr-global", vec!["transform"]),
            ("gmm-copy", vec!["hmm"]),
            ("gmm-train-lvtln-special", vec!["transform", "hmm"]),
            ("gmm-est-map", vec!["hmm"]),
            ("gmm-acc-stats2", vec!["hmm"]),
            ("gmm-decode-faster-regtree-mllr", vec!["decoder"]),
            ("gmm-global-est-fmllr", vec!["transform"]),
            ("gmm-est-basis-fmllr", vec!["hmm", "transform"]),
            ("gmm-init-model", vec!["hmm"]),
            ("gmm-est-weights-ebw", vec!["hmm"]),
            ("gmm-init-biphone", vec!["hmm"]),
            ("gmm-compute-likes", vec!["hmm"]),
            ("gmm-est-fmllr-raw-gpost", vec!["hmm", "transform"]),
            ("gmm-*", vec!["hmm", "transform", "lat", "decoder"]),
        ])
    }
}

impl DependencyLookup for OverrideTable {
    fn exact_lookup(&self, name: &str) -> Option<&[String]> {
        self.exact.get(name).map(Vec::as_slice)
    }

    fn wildcard_lookup(&self, family: &str) -> Option<&[String]> {
        self.families.get(family).map(Vec::as_slice)
    }
}
