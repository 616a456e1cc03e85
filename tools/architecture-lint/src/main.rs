//! CLI entry point: lints `backend/src` of the enclosing workspace.
//!
//! An explicit service directory may be passed as the first argument, which
//! is handy when linting a checkout from outside the workspace.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let service_dir = match std::env::args_os().nth(1) {
        Some(dir) => Ok(PathBuf::from(dir)),
        None => workspace_root().map(|root| root.join("backend")),
    };

    let outcome = service_dir
        .map_err(|err| err.to_string())
        .and_then(|dir| {
            architecture_lint::lint_service_sources(&dir).map_err(|err| err.to_string())
        });

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            let _ = writeln!(io::stderr().lock(), "{message}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct WorkspaceRootError;

impl fmt::Display for WorkspaceRootError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unable to locate workspace root (directory containing a workspace Cargo.toml)")
    }
}

impl std::error::Error for WorkspaceRootError {}

fn workspace_root() -> Result<PathBuf, WorkspaceRootError> {
    let candidates = [
        std::env::var_os("CARGO_WORKSPACE_DIR").map(PathBuf::from),
        std::env::current_dir().ok(),
        Some(PathBuf::from(env!("CARGO_MANIFEST_DIR"))),
    ];

    candidates
        .iter()
        .flatten()
        .find_map(|start| find_workspace_root(start))
        .ok_or(WorkspaceRootError)
}

fn find_workspace_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| declares_workspace(&dir.join("Cargo.toml")))
        .map(Path::to_path_buf)
}

fn declares_workspace(manifest: &Path) -> bool {
    fs::read_to_string(manifest).is_ok_and(|contents| contents.contains("[workspace]"))
}
