//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::Generator;
use crate::config::GeneratorConfig;
use crate::format::format_source;
use crate::frontend::loader::{PackageSource, load_package};

use super::{CliError, CliResult, ExitCode};

/// Everything one generation run needs, resolved from the command line.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Types to generate, in order
    pub types: Vec<String>,
    /// Where the package comes from
    pub source: PackageSource,
    /// Build tags applied when loading a directory
    pub tags: Vec<String>,
    /// Explicit output path; defaults to `<dir>/<type>.gen.go`
    pub output: Option<PathBuf>,
    pub config: GeneratorConfig,
    /// Raw arguments recorded in the provenance line
    pub args: Vec<String>,
}

impl GenerateRequest {
    /// Package directory: the directory argument, or the parent of the first file.
    pub fn package_dir(&self) -> PathBuf {
        match &self.source {
            PackageSource::Directory(dir) => dir.clone(),
            PackageSource::Files(files) => files
                .first()
                .and_then(|f| f.parent())
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    /// Output file path.
    pub fn output_path(&self) -> PathBuf {
        if let Some(output) = &self.output {
            return output.clone();
        }
        let first = self.types.first().map(String::as_str).unwrap_or_default();
        self.package_dir().join(format!("{}.gen.go", first).to_lowercase())
    }
}

/// Decide whether the positional arguments name a package directory or a list of files.
///
/// A single argument that is a directory is the package directory; anything else is a file list.
pub fn resolve_source(patterns: &[PathBuf], tags: &[String]) -> CliResult<PackageSource> {
    match patterns {
        [] => Ok(PackageSource::Directory(PathBuf::from("."))),
        [single] if single.is_dir() => Ok(PackageSource::Directory(single.clone())),
        files => {
            if !tags.is_empty() {
                return Err(CliError::failure(
                    "Error: --tags applies only to directories, not individual files",
                ));
            }
            Ok(PackageSource::Files(files.to_vec()))
        }
    }
}

/// Load the package, generate every requested type, format, and write the output file.
///
/// Nothing is written unless every type generated and the result formatted.
#[tracing::instrument(skip_all, fields(types = ?request.types))]
pub fn generate(request: &GenerateRequest) -> CliResult<ExitCode> {
    let package = load_package(&request.source, &request.tags)
        .map_err(|e| CliError::failure(format!("error parsing package: {}", e)))?;
    tracing::debug!(package = %package.name, files = package.files.len(), "package loaded");

    let mut generator = Generator::new(request.config.clone(), &package);
    for type_name in &request.types {
        generator.generate(type_name).map_err(|e| {
            CliError::failure(format!(
                "error generating enum code for type {}: {}",
                type_name, e
            ))
        })?;
    }

    let source = generator.finish(&request.args);
    let formatted = format_source(&source)
        .map_err(|e| CliError::failure(format!("error formatting code: {}", e)))?;

    let output = request.output_path();
    fs::write(&output, formatted)
        .map_err(|e| CliError::failure(format!("failed to write output file {}: {}", output.display(), e)))?;
    tracing::info!(output = %output.display(), "generated");

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request(source: PackageSource, types: &[&str]) -> GenerateRequest {
        GenerateRequest {
            types: types.iter().map(|t| t.to_string()).collect(),
            source,
            tags: Vec::new(),
            output: None,
            config: GeneratorConfig::new(),
            args: Vec::new(),
        }
    }

    #[test]
    fn test_output_defaults_to_lowercase_first_type() {
        let req = request(PackageSource::Directory(PathBuf::from("pkg")), &["MyEnum", "Other"]);
        assert_eq!(req.output_path(), PathBuf::from("pkg/myenum.gen.go"));
    }

    #[test]
    fn test_output_dir_is_parent_of_first_file() {
        let req = request(
            PackageSource::Files(vec![PathBuf::from("a/b/x.go"), PathBuf::from("c/y.go")]),
            &["T"],
        );
        assert_eq!(req.package_dir(), PathBuf::from("a/b"));

        let req = request(PackageSource::Files(vec![PathBuf::from("x.go")]), &["T"]);
        assert_eq!(req.package_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_explicit_output_wins() {
        let mut req = request(PackageSource::Directory(PathBuf::from("pkg")), &["T"]);
        req.output = Some(PathBuf::from("out.go"));
        assert_eq!(req.output_path(), PathBuf::from("out.go"));
    }

    #[test]
    fn test_tags_rejected_with_files() {
        let files = vec![PathBuf::from("no/such/a.go"), PathBuf::from("no/such/b.go")];
        let err = resolve_source(&files, &["linux".to_string()]).unwrap_err();
        assert!(err.message.contains("--tags"));
        assert!(matches!(resolve_source(&files, &[]).unwrap(), PackageSource::Files(_)));
    }

    #[test]
    fn test_single_directory_is_package() {
        let dir = std::env::temp_dir();
        let source = resolve_source(std::slice::from_ref(&dir), &["x".to_string()]).unwrap();
        assert!(matches!(source, PackageSource::Directory(d) if d == dir));
    }
}
