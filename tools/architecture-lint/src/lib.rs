//! Layer boundary lint for the user directory service.
//!
//! `backend/src` is split into `domain` (entity, ports, service), `inbound`
//! (HTTP router) and `outbound` (Diesel data access). Every `.rs` file under
//! those directories is parsed with `syn`; each `use` item and path is
//! reduced to the module or crate it starts from and checked against the
//! layer's [`Boundary`].
//!
//! Run it with `cargo run -p architecture-lint` from anywhere in the
//! workspace.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use syn::visit::{self, Visit};

/// Library crate name of the service, as it appears in absolute paths.
const SERVICE_CRATE: &str = "user_directory";

const WEB: &[&str] = &["actix_http", "actix_web", "utoipa", "utoipa_swagger_ui"];
const DATABASE: &[&str] = &[
    "diesel",
    "diesel_async",
    "diesel_migrations",
    "pg_embedded_setup_unpriv",
    "postgres",
];

/// What one layer may not import.
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    /// Directory under `backend/src` holding the layer.
    pub layer: &'static str,
    /// Sibling layers the layer must not reach into.
    pub sibling_layers: &'static [&'static str],
    /// Crate groups the layer must not use.
    pub crate_groups: &'static [&'static [&'static str]],
}

/// The three layers and their rules.
pub const BOUNDARIES: [Boundary; 3] = [
    Boundary {
        layer: "domain",
        sibling_layers: &["inbound", "outbound"],
        crate_groups: &[WEB, DATABASE],
    },
    Boundary {
        layer: "inbound",
        sibling_layers: &["outbound"],
        crate_groups: &[DATABASE],
    },
    Boundary {
        layer: "outbound",
        sibling_layers: &["inbound"],
        crate_groups: &[WEB],
    },
];

impl Boundary {
    fn for_file(file: &Path) -> Option<Self> {
        let top = file.components().next()?.as_os_str().to_str()?;
        BOUNDARIES.into_iter().find(|boundary| boundary.layer == top)
    }

    fn forbids(&self, dependency: &Dependency) -> bool {
        match dependency {
            Dependency::Module(name) => self.sibling_layers.contains(&name.as_str()),
            Dependency::Crate(name) => self
                .crate_groups
                .iter()
                .any(|group| group.contains(&name.as_str())),
        }
    }
}

/// Where a `use` item or path starts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Dependency {
    /// Top-level module of the service crate, e.g. `crate::outbound`.
    Module(String),
    /// External crate, e.g. `diesel`.
    Crate(String),
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Module(name) => write!(f, "crate::{name}"),
            Self::Crate(name) => write!(f, "external crate `{name}`"),
        }
    }
}

/// A forbidden dependency found in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: PathBuf,
    /// Layer the file belongs to.
    pub layer: &'static str,
    /// The dependency that crosses the boundary.
    pub dependency: Dependency,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} must not depend on {}",
            self.file.display(),
            self.layer,
            self.dependency
        )
    }
}

/// Why a lint run failed.
#[derive(Debug)]
pub enum LintError {
    /// A directory or file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A file is not valid Rust or lies outside the three layers.
    Parse { file: PathBuf, message: String },
    /// The sources cross layer boundaries.
    Violations(Vec<Violation>),
}

impl fmt::Display for LintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Parse { file, message } => write!(f, "cannot lint {}: {message}", file.display()),
            Self::Violations(found) => {
                write!(f, "{} layer boundary violation(s)", found.len())?;
                found.iter().try_for_each(|v| write!(f, "\n  {v}"))
            }
        }
    }
}

impl std::error::Error for LintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { .. } | Self::Violations(_) => None,
        }
    }
}

/// A Rust file to lint, with its path relative to `backend/src`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    pub file: PathBuf,
    pub contents: String,
}

/// Lint every layer file under `service_dir/src`.
///
/// `service_dir` is the `backend/` directory at the repository root.
pub fn lint_service_sources(service_dir: &Path) -> Result<(), LintError> {
    lint_sources(&read_layer_sources(&service_dir.join("src"))?)
}

/// Lint in-memory sources.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), LintError> {
    let mut found = Vec::new();
    for source in sources {
        let parse_error = |message: String| LintError::Parse {
            file: source.file.clone(),
            message,
        };
        let boundary = Boundary::for_file(&source.file)
            .ok_or_else(|| parse_error("not inside domain, inbound or outbound".to_owned()))?;
        let ast = syn::parse_file(&source.contents).map_err(|err| parse_error(err.to_string()))?;

        let mut deps = DependencyRoots::default();
        deps.visit_file(&ast);
        found.extend(
            deps.0
                .into_iter()
                .filter(|dep| boundary.forbids(dep))
                .map(|dependency| Violation {
                    file: source.file.clone(),
                    layer: boundary.layer,
                    dependency,
                }),
        );
    }

    if found.is_empty() {
        Ok(())
    } else {
        Err(LintError::Violations(found))
    }
}

/// Classify a path by its leading segments.
///
/// `crate::`, `self::`, `super::` and `user_directory::` prefixes resolve to
/// the first module after them; a bare layer name counts as a module too.
fn classify<'a>(mut segments: impl Iterator<Item = &'a str>) -> Option<Dependency> {
    let first = segments.next()?;
    match first {
        "crate" | "self" | "super" => segments
            .find(|seg| !matches!(*seg, "self" | "super"))
            .map(|seg| Dependency::Module(seg.to_owned())),
        SERVICE_CRATE => segments.next().map(|seg| Dependency::Module(seg.to_owned())),
        _ if BOUNDARIES.iter().any(|b| b.layer == first) => {
            Some(Dependency::Module(first.to_owned()))
        }
        _ => Some(Dependency::Crate(first.to_owned())),
    }
}

#[derive(Default)]
struct DependencyRoots(BTreeSet<Dependency>);

impl DependencyRoots {
    /// Expand a use tree into each leading segment chain it imports.
    fn use_tree(&mut self, tree: &syn::UseTree, prefix: &mut Vec<String>) {
        match tree {
            syn::UseTree::Path(p) => {
                prefix.push(p.ident.to_string());
                self.use_tree(&p.tree, prefix);
                prefix.pop();
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.use_tree(item, prefix);
                }
            }
            syn::UseTree::Name(syn::UseName { ident })
            | syn::UseTree::Rename(syn::UseRename { ident, .. }) => {
                prefix.push(ident.to_string());
                self.record(prefix.iter().map(String::as_str));
                prefix.pop();
            }
            syn::UseTree::Glob(_) => self.record(prefix.iter().map(String::as_str)),
        }
    }

    fn record<'a>(&mut self, segments: impl Iterator<Item = &'a str>) {
        self.0.extend(classify(segments));
    }
}

impl<'ast> Visit<'ast> for DependencyRoots {
    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.use_tree(&node.tree, &mut Vec::new());
    }

    fn visit_path(&mut self, node: &'ast syn::Path) {
        let idents: Vec<String> = node.segments.iter().map(|s| s.ident.to_string()).collect();
        // Single identifiers are local names, not crate roots.
        if idents.len() > 1 {
            self.record(idents.iter().map(String::as_str));
        }
        visit::visit_path(self, node);
    }
}

fn read_layer_sources(src_dir: &Path) -> Result<Vec<LintSource>, LintError> {
    let io_error = |path: &Path| {
        let path = path.to_path_buf();
        move |source| LintError::Io { path, source }
    };

    let mut pending: Vec<PathBuf> = BOUNDARIES
        .iter()
        .map(|boundary| src_dir.join(boundary.layer))
        .filter(|dir| dir.is_dir())
        .collect();
    let mut sources = Vec::new();

    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).map_err(io_error(&dir))? {
            let path = entry.map_err(io_error(&dir))?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                let contents = fs::read_to_string(&path).map_err(io_error(&path))?;
                let file = path.strip_prefix(src_dir).unwrap_or(&path).to_path_buf();
                sources.push(LintSource { file, contents });
            }
        }
    }

    sources.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(sources)
}
