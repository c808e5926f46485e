//! Recover link dependencies from a legacy module Makefile.
//!
//! Kaldi Makefiles declare the archives a module links against as
//!
//! ```text
//! ADDLIBS = ../transform/kaldi-transform.a ../util/kaldi-util.a \
//!           ../base/kaldi-base.a
//!
//! include ../makefiles/default_rules.mk
//! ```
//!
//! The block runs from the marker to the first blank line. Each archive path
//! is reduced to its bare name (`kaldi-transform`).

use std::path::Path;

use anyhow::Result;

use crate::core::source::file_stem;
use crate::util::fs::read_to_string;

/// Characters left over from `+=`, `:=`, `?=` and `!=` once `=` is treated
/// as a separator.
const OPERATOR_RESIDUE: &[char] = &['+', ':', '?', '!'];

/// Dependencies extracted from one legacy Makefile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyDependencies {
    /// Bare library names in encounter order, duplicates kept
    pub libraries: Vec<String>,

    /// False when the Makefile has no dependency marker at all
    pub marker_found: bool,
}

/// Read and parse the Makefile at `path`.
pub fn load_dependencies(path: &Path, marker: &str) -> Result<LegacyDependencies> {
    let contents = read_to_string(path)?;
    let deps = parse_dependencies(&contents, marker);
    tracing::debug!(
        "{}: {} legacy dependencies {:?}",
        path.display(),
        deps.libraries.len(),
        deps.libraries
    );
    Ok(deps)
}

/// Parse Makefile text. A missing marker is not an error; the result just
/// records that it was absent.
pub fn parse_dependencies(contents: &str, marker: &str) -> LegacyDependencies {
    let Some(block) = dependency_block(contents, marker) else {
        return LegacyDependencies::default();
    };

    let libraries = block
        .iter()
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == '\\' || c == '='))
        .filter(|token| !token.is_empty())
        .filter(|token| !token.chars().all(|c| OPERATOR_RESIDUE.contains(&c)))
        .map(|token| file_stem(token).to_string())
        .collect();

    LegacyDependencies {
        libraries,
        marker_found: true,
    }
}

/// Lines of the last marker block: the remainder of the marker line, then
/// following lines up to the first blank one.
fn dependency_block<'a>(contents: &'a str, marker: &str) -> Option<Vec<&'a str>> {
    let lines: Vec<&str> = contents.lines().collect();
    let start = lines
        .iter()
        .rposition(|line| line.trim_start().starts_with(marker))?;

    let first = &lines[start].trim_start()[marker.len()..];
    let mut block = vec![first];
    block.extend(
        lines[start + 1..]
            .iter()
            .take_while(|line| !line.trim().is_empty()),
    );
    Some(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_single_line() {
        let deps = parse_dependencies(
            "ADDLIBS += ../transform/kaldi-transform.a ../util/kaldi-util.a\n\n",
            "ADDLIBS",
        );
        assert!(deps.marker_found);
        assert_eq!(deps.libraries, ["kaldi-transform", "kaldi-util"]);
    }

    #[test]
    fn test_parse_continued_block() {
        let makefile = "\
all:

include ../kaldi.mk

TESTFILES = hmm-utils-test

OBJFILES = hmm-topology.o transition-model.o

LIBNAME = kaldi-hmm

ADDLIBS = ../tree/kaldi-tree.a ../util/kaldi-util.a \\
          ../matrix/kaldi-matrix.a ../base/kaldi-base.a
include ../makefiles/default_rules.mk
";
        let deps = parse_dependencies(makefile, "ADDLIBS");
        assert_eq!(
            deps.libraries,
            [
                "kaldi-tree",
                "kaldi-util",
                "kaldi-matrix",
                "kaldi-base",
                // no blank line before the include, so it is part of the block
                "include",
                "default_rules",
            ]
        );
    }

    #[test]
    fn test_block_stops_at_blank_line() {
        let makefile = "ADDLIBS = ../a/kaldi-a.a \\\r\n  ../b/kaldi-b.a\r\n\r\ninclude ../x.mk\r\n";
        let deps = parse_dependencies(makefile, "ADDLIBS");
        assert_eq!(deps.libraries, ["kaldi-a", "kaldi-b"]);
    }

    #[test]
    fn test_empty_block() {
        let deps = parse_dependencies("ADDLIBS\n\nOBJFILES = a.o\n", "ADDLIBS");
        assert!(deps.marker_found);
        assert!(deps.libraries.is_empty());

        let deps = parse_dependencies("ADDLIBS =\n\n", "ADDLIBS");
        assert!(deps.marker_found);
        assert!(deps.libraries.is_empty());
    }

    #[test]
    fn test_missing_marker() {
        let deps = parse_dependencies("OBJFILES = a.o\n\nLIBNAME = kaldi-x\n", "ADDLIBS");
        assert!(!deps.marker_found);
        assert!(deps.libraries.is_empty());
    }

    #[test]
    fn test_last_marker_wins_and_duplicates_kept() {
        let makefile = "ADDLIBS = ../old/kaldi-old.a\n\nADDLIBS = ../u/kaldi-u.a ../u/kaldi-u.a\n";
        let deps = parse_dependencies(makefile, "ADDLIBS");
        assert_eq!(deps.libraries, ["kaldi-u", "kaldi-u"]);
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("Makefile");
        fs::write(&path, "ADDLIBS = ../base/kaldi-base.a\n").unwrap();

        let deps = load_dependencies(&path, "ADDLIBS").unwrap();
        assert_eq!(deps.libraries, ["kaldi-base"]);

        assert!(load_dependencies(&tmp.path().join("missing"), "ADDLIBS").is_err());
    }
}
