//! Package loading
//!
//! Turns either a package directory or an explicit list of `.go` files into a [`Package`]: every
//! participating file lexed and parsed, plus the package [`SymbolTable`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use enumgen::frontend::loader::{load_package, PackageSource};
//!
//! let package = load_package(&PackageSource::Directory("./colors".into()), &[])?;
//! println!("{} files in package {}", package.files.len(), package.name);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::frontend::ast::SourceFile;
use crate::frontend::constraints::{BuildContext, ConstraintError};
use crate::frontend::diagnostics::CompileError;
use crate::frontend::symbols::SymbolTable;
use crate::frontend::{diagnostics, lexer, parser};

/// One parsed source file
#[derive(Debug)]
pub struct SourceUnit {
    pub path: PathBuf,
    /// Original source code
    pub source: String,
    /// Parsed AST
    pub ast: SourceFile,
}

/// A loaded Go package
#[derive(Debug)]
pub struct Package {
    /// Package name from the `package` clause
    pub name: String,
    /// Directory the package lives in (default output location)
    pub dir: PathBuf,
    /// Participating files in lexicographic path order
    pub files: Vec<SourceUnit>,
    pub symbols: SymbolTable,
}

/// Where to load a package from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageSource {
    /// Every buildable `.go` file in the directory
    Directory(PathBuf),
    /// Exactly these files, build constraints not applied
    Files(Vec<PathBuf>),
}

/// Error while loading a package
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum LoadError {
    #[error("error reading '{}': {source}", .path.display())]
    #[diagnostic(code(enumgen::load::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{report}")]
    #[diagnostic(code(enumgen::load::syntax))]
    Syntax { path: PathBuf, report: String },

    #[error("expected one package in {}, found {}", .dir.display(), .names.join(", "))]
    #[diagnostic(code(enumgen::load::multiple_packages))]
    MultiplePackages { dir: PathBuf, names: Vec<String> },

    #[error("no buildable Go source files in {}", .dir.display())]
    #[diagnostic(
        code(enumgen::load::no_files),
        help("check the directory, and the --tags passed for files behind //go:build lines")
    )]
    NoGoFiles { dir: PathBuf },

    #[error("{}: {source}", .path.display())]
    #[diagnostic(code(enumgen::load::constraint))]
    Constraint {
        path: PathBuf,
        #[source]
        source: ConstraintError,
    },

    #[error("{} is not a .go file", .path.display())]
    #[diagnostic(code(enumgen::load::not_go_file))]
    NotGoFile { path: PathBuf },
}

impl LoadError {
    fn syntax(path: &Path, source: &str, errors: &[CompileError]) -> Self {
        let file = path.display().to_string();
        let mut msg = String::new();
        for err in errors {
            msg.push_str(&diagnostics::format_error(&file, source, err));
            msg.push('\n');
        }
        LoadError::Syntax {
            path: path.to_path_buf(),
            report: msg.trim_end().to_string(),
        }
    }
}

/// Load a package.
///
/// Directories skip `_test.go` files, files whose name starts with `_` or `.`, and files excluded
/// by build constraints evaluated against `tags`. Explicitly listed files are always loaded.
///
/// ## Errors
/// Returns a [`LoadError`] if a file cannot be read or parsed, if the files declare more than one
/// package, or if no file takes part in the build.
#[tracing::instrument(skip_all, fields(tags = ?tags))]
pub fn load_package(source: &PackageSource, tags: &[String]) -> Result<Package, LoadError> {
    match source {
        PackageSource::Directory(dir) => {
            let context = BuildContext::new(tags);
            let mut units = Vec::new();
            for path in list_go_files(dir)? {
                let text = read_source(&path)?;
                let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                let included = context.includes(&file_name, &text).map_err(|source| LoadError::Constraint {
                    path: path.clone(),
                    source,
                })?;
                if included {
                    units.push((path, text));
                } else {
                    tracing::debug!(file = %path.display(), "excluded by build constraints");
                }
            }
            load_sources(dir.clone(), units)
        }
        PackageSource::Files(paths) => {
            let mut units = Vec::new();
            for path in paths {
                if path.extension().is_none_or(|ext| ext != "go") {
                    return Err(LoadError::NotGoFile { path: path.clone() });
                }
                units.push((path.clone(), read_source(path)?));
            }
            let dir = paths
                .first()
                .and_then(|p| p.parent())
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            load_sources(dir, units)
        }
    }
}

/// Assemble a package from in-memory sources.
///
/// Sources are sorted by path; files of a `_test` package are ignored.
///
/// ## Errors
/// Same as [`load_package`], minus I/O.
pub fn load_sources(dir: PathBuf, mut sources: Vec<(PathBuf, String)>) -> Result<Package, LoadError> {
    sources.sort_by(|a, b| a.0.cmp(&b.0));

    let mut files = Vec::new();
    for (path, source) in sources {
        let tokens = lexer::lex(&source).map_err(|errors| LoadError::syntax(&path, &source, &errors))?;
        let ast = parser::parse(&tokens).map_err(|errors| LoadError::syntax(&path, &source, &errors))?;
        if ast.package.node.ends_with("_test") {
            tracing::debug!(file = %path.display(), "skipping test package file");
            continue;
        }
        files.push(SourceUnit { path, source, ast });
    }

    let mut names: Vec<String> = files.iter().map(|f| f.ast.package.node.clone()).collect();
    names.sort();
    names.dedup();
    let name = match names.len() {
        0 => return Err(LoadError::NoGoFiles { dir }),
        1 => names.remove(0),
        _ => return Err(LoadError::MultiplePackages { dir, names }),
    };

    let symbols = SymbolTable::build(files.iter().map(|f| &f.ast));
    tracing::debug!(package = %name, files = files.len(), "loaded package");

    Ok(Package {
        name,
        dir,
        files,
        symbols,
    })
}

fn list_go_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".go") || name.ends_with("_test.go") || name.starts_with('_') || name.starts_with('.') {
            continue;
        }
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

fn read_source(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(files: &[(&str, &str)]) -> Vec<(PathBuf, String)> {
        files.iter().map(|(p, s)| (PathBuf::from(p), s.to_string())).collect()
    }

    #[test]
    fn test_files_sorted_by_path() {
        let package = load_sources(
            PathBuf::from("pkg"),
            sources(&[
                ("pkg/b.go", "package colors\nconst B = 2\n"),
                ("pkg/a.go", "package colors\nconst A = 1\n"),
            ]),
        )
        .unwrap();
        assert_eq!(package.name, "colors");
        let paths: Vec<_> = package.files.iter().map(|f| f.path.clone()).collect();
        assert_eq!(paths, vec![PathBuf::from("pkg/a.go"), PathBuf::from("pkg/b.go")]);
        assert!(package.symbols.constant("B").is_some());
    }

    #[test]
    fn test_multiple_packages_rejected() {
        let err = load_sources(
            PathBuf::from("pkg"),
            sources(&[("a.go", "package one\n"), ("b.go", "package two\n")]),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::MultiplePackages { ref names, .. } if names == &["one", "two"]));
    }

    #[test]
    fn test_test_package_ignored() {
        let package = load_sources(
            PathBuf::from("pkg"),
            sources(&[("a.go", "package one\n"), ("b.go", "package one_test\n")]),
        )
        .unwrap();
        assert_eq!(package.files.len(), 1);
    }

    #[test]
    fn test_no_files() {
        let err = load_sources(PathBuf::from("pkg"), Vec::new()).unwrap_err();
        assert!(matches!(err, LoadError::NoGoFiles { .. }));
    }

    #[test]
    fn test_syntax_error_reports_location() {
        let err = load_sources(PathBuf::from("pkg"), sources(&[("pkg/a.go", "package p\nconst = 1\n")])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("pkg/a.go:2:"), "{}", msg);
    }
}
