//! The generated build file for one module directory.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::util::fs::{normalize_path, write_string};

/// Rendered sections destined for one `CMakeLists.txt`.
#[derive(Debug, Clone)]
pub struct BuildFile {
    path: PathBuf,
    sections: Vec<String>,
}

impl BuildFile {
    /// A build file named `file_name` inside `dir`.
    pub fn new(dir: &Path, file_name: &str) -> Self {
        BuildFile {
            path: dir.join(file_name),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: String) {
        self.sections.push(section);
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of the file, resolved through its directory so it
    /// works before the file exists.
    pub fn absolute_path(&self) -> PathBuf {
        match (self.path.parent(), self.path.file_name()) {
            (Some(dir), Some(name)) if !dir.as_os_str().is_empty() => {
                normalize_path(dir).join(name)
            }
            _ => normalize_path(&self.path),
        }
    }

    /// Sections separated by blank lines, newline-terminated. No sections
    /// gives an empty file.
    pub fn contents(&self) -> String {
        if self.sections.is_empty() {
            return String::new();
        }
        let mut contents = self.sections.join("\n\n");
        contents.push('\n');
        contents
    }

    /// Write the whole file in one call, replacing any previous version.
    /// Returns the absolute path written.
    pub fn write(&self) -> Result<PathBuf> {
        write_string(&self.path, &self.contents())?;
        Ok(self.absolute_path())
    }
}
