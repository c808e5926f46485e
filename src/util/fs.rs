//! Filesystem utilities.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Write a string to a file in one call, replacing any existing file.
pub fn write_string(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write file: {}", path.display()))
}

/// Immediate subdirectories of `dir` as `(path, name)`, sorted by name.
///
/// Entries whose names are not valid UTF-8 are skipped.
pub fn subdirectories(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    immediate_entries(dir, |entry| entry.file_type().is_dir())
}

/// Regular files directly inside `dir` as `(path, name)`, sorted by name.
pub fn files(dir: &Path) -> Result<Vec<(PathBuf, String)>> {
    immediate_entries(dir, |entry| entry.file_type().is_file())
}

fn immediate_entries(
    dir: &Path,
    keep: impl Fn(&walkdir::DirEntry) -> bool,
) -> Result<Vec<(PathBuf, String)>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // a dangling symlink or unreadable entry only loses that entry
            Err(e) if e.depth() > 0 => {
                tracing::warn!("skipping entry in {}: {}", dir.display(), e);
                continue;
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read directory: {}", dir.display()))
            }
        };
        if !keep(&entry) {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => entries.push((entry.path().to_path_buf(), name.to_string())),
            None => tracing::debug!("skipping non-UTF-8 entry {}", entry.path().display()),
        }
    }

    Ok(entries)
}

/// Canonicalize a path, but don't fail if it doesn't exist yet.
/// A missing path is made absolute against the working directory instead.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize()
        .or_else(|_| std::path::absolute(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
