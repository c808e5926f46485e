//! CMake text for targets.
//!
//! Each target renders to a section of blank-line separated blocks with no
//! trailing newline; [`crate::builder::file::BuildFile`] joins sections.
//! Empty lists drop their clause, so every section is valid CMake.

use crate::core::target::{ExecutableTarget, LibraryTarget};
use crate::util::GeneratorConfig;

/// Object list produced by `cuda_compile` and fed into `add_library`.
pub const CUDA_OBJS: &str = "CUDA_OBJS";

const INDENT: &str = "    ";

/// Render a library with its optional CUDA step and test executables.
pub fn render_library(lib: &LibraryTarget, config: &GeneratorConfig) -> String {
    let mut blocks = Vec::new();
    let name = &lib.target_name;
    let scope = if lib.is_interface() {
        "INTERFACE"
    } else {
        "PUBLIC"
    };

    let mut sources = lib.sources.clone();
    if lib.has_accelerator_sources() {
        sources.push(format!("${{{}}}", CUDA_OBJS));
        let mut block = vec![
            "cuda_include_directories(${CMAKE_CURRENT_SOURCE_DIR}/..)".to_string(),
            format!("cuda_compile({}", CUDA_OBJS),
        ];
        block.extend(indented(&lib.accelerator_sources));
        block.push(")".to_string());
        blocks.push(block.join("\n"));
    }

    if lib.is_interface() {
        blocks.push(format!("add_library({} INTERFACE)", name));
    } else {
        blocks.push(list_call("add_library", name, &sources));
    }

    blocks.push(
        [
            format!("target_include_directories({} {}", name, scope),
            format!("{INDENT} $<BUILD_INTERFACE:${{CMAKE_CURRENT_SOURCE_DIR}}/..>"),
            format!("{INDENT} $<INSTALL_INTERFACE:{}>", config.install_include_dir),
            ")".to_string(),
        ]
        .join("\n"),
    );

    if !lib.dependencies.is_empty() {
        let head = format!("{} {}", name, scope);
        blocks.push(list_call("target_link_libraries", &head, &lib.dependencies));
    }

    if !lib.tests.is_empty() {
        let mut block = vec![format!("if({})", config.test_option)];
        for test in &lib.tests {
            block.push(format!(
                "{}{}",
                INDENT,
                executable_call(&config.macros.test_executable, test)
            ));
        }
        block.push("endif()".to_string());
        blocks.push(block.join("\n"));
    }

    blocks.join("\n\n")
}

/// Render one tool executable.
pub fn render_executable(exe: &ExecutableTarget, config: &GeneratorConfig) -> String {
    executable_call(&config.macros.executable, exe)
}

/// `macro(NAME n SOURCES f DEPENDS d...)`, without `DEPENDS` when there are none.
fn executable_call(macro_name: &str, exe: &ExecutableTarget) -> String {
    let mut call = format!(
        "{}(NAME {} SOURCES {}",
        macro_name, exe.exe_name, exe.source_file
    );
    let depends = exe
        .dependencies
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .collect::<Vec<_>>();
    if !depends.is_empty() {
        call.push_str(" DEPENDS ");
        call.push_str(&depends.join(" "));
    }
    call.push(')');
    call
}

fn list_call(command: &str, head: &str, items: &[String]) -> String {
    let mut lines = vec![format!("{}({}", command, head)];
    lines.extend(indented(items));
    lines.push(")".to_string());
    lines.join("\n")
}

fn indented(items: &[String]) -> impl Iterator<Item = String> + '_ {
    items.iter().map(|item| format!("{}{}", INDENT, item))
}
