//! Generate `CMakeLists.txt` for every module directory of a source tree.
//!
//! The walk covers the immediate subdirectories of the root, in name order:
//!
//! - `*bin` directories get one executable per plain source.
//! - Other directories with a legacy `Makefile` get one library target plus
//!   its tests. Directories without a `Makefile` are not build modules and
//!   are skipped.
//!
//! A failure inside one directory is recorded in the report and the walk
//! moves on. Only failing to list the root itself stops the run.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::builder::{
    build_executable, render_executable, render_library, BuildFile, LibraryBuilder,
};
use crate::core::module_dir::{ModuleDirectory, ModuleKind};
use crate::core::source::SourceFile;
use crate::deps::makefile::load_dependencies;
use crate::deps::overrides::DependencyLookup;
use crate::ops::error::GenerateError;
use crate::util::diagnostic::{suggestions, Diagnostic};
use crate::util::fs::{files, subdirectories};
use crate::util::GeneratorConfig;

/// Options for a generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory whose immediate subdirectories are the modules
    pub root: PathBuf,

    /// Render everything but write nothing
    pub dry_run: bool,
}

impl GenerateOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            root: root.into(),
            dry_run: false,
        }
    }
}

/// One build file produced by the run.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Module directory name
    pub module: String,

    /// Library or binary directory
    pub kind: ModuleKind,

    /// Absolute path of the build file
    pub path: PathBuf,

    /// Number of top-level targets declared (tests not counted)
    pub targets: usize,

    /// False in dry-run mode
    pub written: bool,
}

/// Outcome of a whole run.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub generated: Vec<GeneratedFile>,

    /// Library directories without a legacy Makefile
    pub skipped: Vec<String>,

    /// Non-fatal problems, e.g. a Makefile without a dependency block
    pub warnings: Vec<Diagnostic>,

    /// Directories that failed; the rest of the walk still ran
    pub failures: Vec<GenerateError>,

    pub duration: Duration,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Walk `opts.root` and generate a build file per module directory.
pub fn generate(
    config: &GeneratorConfig,
    overrides: &dyn DependencyLookup,
    opts: &GenerateOptions,
) -> Result<GenerateReport, GenerateError> {
    let start = Instant::now();
    let mut report = GenerateReport::default();

    let subdirs =
        subdirectories(&opts.root).map_err(|e| GenerateError::scan_root(&opts.root, e))?;

    for (path, name) in subdirs {
        let dir = ModuleDirectory::new(path, name, &config.binary_suffix);
        tracing::debug!("visiting {} ({})", dir.name(), dir.kind().as_str());

        match process_directory(config, overrides, &dir, &mut report.warnings) {
            Ok(Some((file, targets))) => match finish_file(&file, opts.dry_run) {
                Ok((path, written)) => {
                    tracing::info!("generated {} with {} targets", path.display(), targets);
                    report.generated.push(GeneratedFile {
                        module: dir.name().to_string(),
                        kind: dir.kind(),
                        path,
                        targets,
                        written,
                    });
                }
                Err(e) => report.failures.push(fail(&dir, e)),
            },
            Ok(None) => {
                tracing::debug!("{}: no {}, skipping", dir.name(), config.legacy_manifest);
                report.skipped.push(dir.name().to_string());
            }
            Err(e) => report.failures.push(fail(&dir, e)),
        }
    }

    report.duration = start.elapsed();
    Ok(report)
}

fn fail(dir: &ModuleDirectory, err: anyhow::Error) -> GenerateError {
    tracing::warn!("{}: {:#}", dir.name(), err);
    GenerateError::directory(dir.name(), dir.path(), err)
}

fn finish_file(file: &BuildFile, dry_run: bool) -> Result<(PathBuf, bool)> {
    if dry_run {
        Ok((file.absolute_path(), false))
    } else {
        Ok((file.write()?, true))
    }
}

/// Build the file for one directory. `None` means the directory is not a
/// build module.
fn process_directory(
    config: &GeneratorConfig,
    overrides: &dyn DependencyLookup,
    dir: &ModuleDirectory,
    warnings: &mut Vec<Diagnostic>,
) -> Result<Option<(BuildFile, usize)>> {
    match dir.kind() {
        ModuleKind::Binary => binary_directory(config, overrides, dir, warnings).map(Some),
        ModuleKind::Library => library_directory(config, overrides, dir, warnings),
    }
}

fn binary_directory(
    config: &GeneratorConfig,
    overrides: &dyn DependencyLookup,
    dir: &ModuleDirectory,
    warnings: &mut Vec<Diagnostic>,
) -> Result<(BuildFile, usize)> {
    if dir.owning_library(&config.binary_suffix).is_none() {
        warnings.push(
            Diagnostic::warning(format!(
                "binary directory `{}` has no library module name",
                dir.name()
            ))
            .with_location(dir.path())
            .with_context("its executables only link override dependencies")
            .with_suggestion(suggestions::BINARY_WITHOUT_LIBRARY),
        );
    }

    let mut file = BuildFile::new(dir.path(), &config.output_file);
    let mut targets = 0;
    for (_, name) in files(dir.path())? {
        let source = SourceFile::new(name);
        if let Some(exe) = build_executable(config, overrides, dir, &source) {
            tracing::debug!(
                "{}: executable {} {:?}",
                dir.name(),
                exe.exe_name,
                exe.dependencies
            );
            file.add_section(render_executable(&exe, config));
            targets += 1;
        }
    }
    Ok((file, targets))
}

fn library_directory(
    config: &GeneratorConfig,
    overrides: &dyn DependencyLookup,
    dir: &ModuleDirectory,
    warnings: &mut Vec<Diagnostic>,
) -> Result<Option<(BuildFile, usize)>> {
    let makefile = dir.path().join(&config.legacy_manifest);
    if !makefile.is_file() {
        return Ok(None);
    }

    let legacy = load_dependencies(&makefile, &config.dependency_marker)?;
    if !legacy.marker_found {
        tracing::warn!(
            "non-standard {}: no {} block",
            makefile.display(),
            config.dependency_marker
        );
        warnings.push(missing_marker(config, dir, &makefile));
    }

    let mut builder = LibraryBuilder::new(config, overrides, dir.name(), legacy.libraries);
    for (_, name) in files(dir.path())? {
        let source = SourceFile::new(name);
        if builder.add_file(&source) {
            tracing::debug!("{}: {} {}", dir.name(), source.role.as_str(), source.name);
        }
    }
    let library = builder.finish();

    let mut file = BuildFile::new(dir.path(), &config.output_file);
    file.add_section(render_library(&library, config));
    Ok(Some((file, 1)))
}

fn missing_marker(
    config: &GeneratorConfig,
    dir: &ModuleDirectory,
    makefile: &Path,
) -> Diagnostic {
    Diagnostic::warning(format!("non-standard {}", config.legacy_manifest))
        .with_location(makefile)
        .with_context(format!(
            "no `{}` block found; `{}` gets no legacy dependencies",
            config.dependency_marker,
            config.library_target(dir.name())
        ))
        .with_suggestion(suggestions::ADD_DEPENDENCY_BLOCK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deps::overrides::OverrideTable;
    use std::fs;
    use tempfile::TempDir;

    fn run(root: &Path) -> GenerateReport {
        generate(
            &GeneratorConfig::default(),
            &OverrideTable::builtin(),
            &GenerateOptions::new(root),
        )
        .unwrap()
    }

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_library_directory() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "hmm/a.cc", "");
        write(tmp.path(), "hmm/a-test.cc", "");
        write(tmp.path(), "hmm/b.cu", "");
        write(tmp.path(), "hmm/a.h", "");
        write(
            tmp.path(),
            "hmm/Makefile",
            "ADDLIBS += ../transform/kaldi-transform.a ../util/kaldi-util.a\n\n",
        );

        let report = run(tmp.path());
        assert!(report.is_success());
        assert!(report.warnings.is_empty());
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.generated[0].module, "hmm");
        assert_eq!(report.generated[0].kind, ModuleKind::Library);
        assert!(report.generated[0].written);

        let text = fs::read_to_string(tmp.path().join("hmm/CMakeLists.txt")).unwrap();
        assert!(text.contains("cuda_compile(CUDA_OBJS\n    b.cu\n)"));
        assert!(text.contains("add_library(kaldi-hmm\n    a.cc\n    ${CUDA_OBJS}\n)"));
        assert!(text.contains(
            "target_link_libraries(kaldi-hmm PUBLIC\n    kaldi-transform\n    kaldi-util\n)"
        ));
        assert!(text.contains(
            "add_kaldi_test_executable(NAME a-test SOURCES a-test.cc DEPENDS kaldi-hmm)"
        ));
        assert!(!text.contains("a.h"));
    }

    #[test]
    fn test_binary_directory() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "gmm-bin/gmm-copy.cc", "");
        write(tmp.path(), "gmm-bin/gmm-copy-test.cc", "");
        write(tmp.path(), "gmm-bin/Makefile", "ADDLIBS = ../gmm/kaldi-gmm.a\n");

        let report = run(tmp.path());
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.generated[0].kind, ModuleKind::Binary);
        assert_eq!(report.generated[0].targets, 1);

        let text = fs::read_to_string(tmp.path().join("gmm-bin/CMakeLists.txt")).unwrap();
        assert_eq!(
            text,
            "add_kaldi_executable(NAME gmm-copy SOURCES gmm-copy.cc DEPENDS kaldi-gmm kaldi-hmm)\n"
        );
    }

    #[test]
    fn test_directory_without_makefile_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "doc/a.cc", "");

        let report = run(tmp.path());
        assert!(report.generated.is_empty());
        assert_eq!(report.skipped, ["doc"]);
        assert!(!tmp.path().join("doc/CMakeLists.txt").exists());
    }

    #[test]
    fn test_missing_marker_warns_but_generates() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "base/io-funcs.cc", "");
        write(tmp.path(), "base/Makefile", "OBJFILES = io-funcs.o\n");

        let report = run(tmp.path());
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(
            report.warnings[0].location.as_deref(),
            Some(tmp.path().join("base/Makefile").as_path())
        );

        let text = fs::read_to_string(tmp.path().join("base/CMakeLists.txt")).unwrap();
        assert!(text.starts_with("add_library(kaldi-base\n"));
        assert!(!text.contains("target_link_libraries"));
    }

    #[test]
    fn test_failure_in_one_directory_does_not_stop_the_walk() {
        let tmp = TempDir::new().unwrap();
        // a directory named like the output file cannot be overwritten
        write(tmp.path(), "aaa/Makefile", "ADDLIBS =\n\n");
        fs::create_dir_all(tmp.path().join("aaa/CMakeLists.txt")).unwrap();
        write(tmp.path(), "util/Makefile", "ADDLIBS = ../base/kaldi-base.a\n\n");
        write(tmp.path(), "util/text-utils.cc", "");

        let report = run(tmp.path());
        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert!(matches!(
            &report.failures[0],
            GenerateError::Directory { module, .. } if module == "aaa"
        ));
        assert_eq!(report.generated.len(), 1);
        assert!(tmp.path().join("util/CMakeLists.txt").is_file());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "featbin/compute-mfcc-feats.cc", "");

        let mut opts = GenerateOptions::new(tmp.path());
        opts.dry_run = true;
        let report =
            generate(&GeneratorConfig::default(), &OverrideTable::builtin(), &opts).unwrap();

        assert_eq!(report.generated.len(), 1);
        assert!(!report.generated[0].written);
        assert!(!tmp.path().join("featbin/CMakeLists.txt").exists());
    }

    #[test]
    fn test_dry_run_reports_absolute_path_for_relative_root() {
        // created under the working directory so the root can stay relative
        let tmp = tempfile::Builder::new().tempdir_in(".").unwrap();
        assert!(tmp.path().is_relative());
        write(tmp.path(), "featbin/x.cc", "");

        let mut opts = GenerateOptions::new(tmp.path());
        opts.dry_run = true;
        let report =
            generate(&GeneratorConfig::default(), &OverrideTable::builtin(), &opts).unwrap();

        let path = &report.generated[0].path;
        assert!(path.is_absolute(), "{}", path.display());
        assert!(path.ends_with("featbin/CMakeLists.txt"));
        assert!(!path.exists());
    }

    #[test]
    fn test_directory_named_only_bin() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "bin/gmm-copy.cc", "");
        write(tmp.path(), "bin/compute-wer.cc", "");

        let report = run(tmp.path());
        assert!(report.is_success());
        assert_eq!(report.generated.len(), 1);
        assert_eq!(report.generated[0].kind, ModuleKind::Binary);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].message.contains("`bin` has no library module name"));

        // only override dependencies are linked; no `kaldi-` target for the directory
        let text = fs::read_to_string(tmp.path().join("bin/CMakeLists.txt")).unwrap();
        assert_eq!(
            text,
            "add_kaldi_executable(NAME compute-wer SOURCES compute-wer.cc)\n\
             \n\
             add_kaldi_executable(NAME gmm-copy SOURCES gmm-copy.cc DEPENDS kaldi-hmm)\n"
        );
    }

    #[test]
    fn test_generation_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "lat/Makefile",
            "ADDLIBS = ../hmm/kaldi-hmm.a \\\n  ../util/kaldi-util.a\n\n",
        );
        write(tmp.path(), "lat/kaldi-lattice.cc", "");
        write(tmp.path(), "lat/lattice-functions.cc", "");
        write(tmp.path(), "lat/kaldi-lattice-test.cc", "");
        write(tmp.path(), "latbin/lattice-copy.cc", "");

        run(tmp.path());
        let first = fs::read_to_string(tmp.path().join("lat/CMakeLists.txt")).unwrap();
        let first_bin = fs::read_to_string(tmp.path().join("latbin/CMakeLists.txt")).unwrap();
        run(tmp.path());
        let second = fs::read_to_string(tmp.path().join("lat/CMakeLists.txt")).unwrap();
        let second_bin = fs::read_to_string(tmp.path().join("latbin/CMakeLists.txt")).unwrap();

        assert_eq!(first, second);
        assert_eq!(first_bin, second_bin);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = generate(
            &GeneratorConfig::default(),
            &OverrideTable::builtin(),
            &GenerateOptions::new(tmp.path().join("missing")),
        )
        .unwrap_err();
        assert!(matches!(err, GenerateError::ScanRoot { .. }));
    }
}
