//! Generation error types and diagnostics.

use std::error::Error as StdError;
use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

use crate::util::diagnostic::Diagnostic;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Failure while generating build files.
#[derive(Debug, Error, MietteDiagnostic)]
pub enum GenerateError {
    /// The project root could not be listed; nothing can be generated.
    #[error("failed to list module directories in `{}`", .path.display())]
    #[diagnostic(
        code(cmake_skeleton::generate::scan_root),
        help("Run the generator from the source tree root, e.g. `kaldi/src`")
    )]
    ScanRoot {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// One module directory failed; the others are unaffected.
    #[error("failed to generate `{module}`")]
    #[diagnostic(code(cmake_skeleton::generate::directory))]
    Directory {
        module: String,
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl GenerateError {
    pub(crate) fn scan_root(path: impl Into<PathBuf>, err: anyhow::Error) -> Self {
        GenerateError::ScanRoot {
            path: path.into(),
            source: err.into(),
        }
    }

    pub(crate) fn directory(
        module: impl Into<String>,
        path: impl Into<PathBuf>,
        err: anyhow::Error,
    ) -> Self {
        GenerateError::Directory {
            module: module.into(),
            path: path.into(),
            source: err.into(),
        }
    }

    /// Convert to a user-friendly diagnostic, one context line per cause.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let location = match self {
            GenerateError::ScanRoot { path, .. } | GenerateError::Directory { path, .. } => path,
        };
        let mut diag = Diagnostic::error(self.to_string()).with_location(location);

        let mut cause = self.source();
        while let Some(err) = cause {
            diag = diag.with_context(err.to_string());
            cause = err.source();
        }
        diag
    }
}
